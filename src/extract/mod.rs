//! Theme extractors: turn a raw theme byte stream into a [`ColorTable`].
//!
//! Two source formats are supported. Gogh themes are shell-script exports
//! read line by line with regexes; Konsole colorschemes are INI-style
//! section/key files. Both consume the input in a single forward pass (the
//! stream may be an HTTP response body, so no seeking).

mod gogh;
mod konsole;

pub use gogh::GoghExtractor;
pub use konsole::KonsoleExtractor;

use std::io::BufRead;

use clap::ValueEnum;

use crate::color_table::ColorTable;
use crate::error::Result;

/// Common capability of all theme parsers.
///
/// `fg_index` / `bg_index` name the table slots used for the theme's
/// foreground and background colors when they cannot be resolved to an
/// already-populated slot.
pub trait Extract {
    fn extract(
        &self,
        input: &mut dyn BufRead,
        fg_index: usize,
        bg_index: usize,
    ) -> Result<ColorTable>;
}

/// Extractor selection, exposed directly as a CLI flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractorKind {
    /// Gogh shell-script theme export.
    Gogh,
    /// Konsole colorscheme (INI sections).
    Konsole,
}

impl ExtractorKind {
    pub fn extractor(self) -> &'static dyn Extract {
        match self {
            ExtractorKind::Gogh => &GoghExtractor,
            ExtractorKind::Konsole => &KonsoleExtractor,
        }
    }
}
