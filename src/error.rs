use thiserror::Error;

/// Errors produced while extracting colors from a theme source.
///
/// Format A (Gogh) skips unrecognized lines rather than failing, so its only
/// failure mode is the underlying reader. Format B (Konsole) treats missing
/// sections and keys as hard failures for the whole theme.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("theme is missing section [{0}]")]
    MissingSection(String),

    #[error("section [{section}] is missing key '{key}'")]
    MissingKey { section: String, key: String },

    #[error("failed to read theme input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
