//! Resolves where the theme bytes come from: a local file, an explicit URL,
//! or a Gogh theme name fetched from the upstream catalog.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Base path of the Gogh theme catalog; `--gogh-theme NAME` resolves to
/// `{base}NAME.sh`.
const GOGH_THEME_BASE: &str = "https://raw.githubusercontent.com/Mayccoll/Gogh/master/themes/";

/// Build the catalog URL for a named Gogh theme.
pub fn gogh_theme_url(theme: &str) -> String {
    format!("{GOGH_THEME_BASE}{theme}.sh")
}

/// Open a local theme file as a buffered reader.
pub fn open_file(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open theme file {}", path.display()))?;
    info!(path = %path.display(), "reading theme from file");
    Ok(Box::new(BufReader::new(file)))
}

/// Fetch a theme over HTTP and expose the body as a buffered stream.
///
/// The body is consumed forward-only; it is never buffered whole.
pub fn fetch_url(url: &str) -> Result<Box<dyn BufRead>> {
    info!(url = url, "fetching theme");
    let response = ureq::get(url)
        .call()
        .with_context(|| format!("failed to fetch theme from {url}"))?;
    Ok(Box::new(BufReader::new(
        response.into_body().into_reader(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn theme_name_builds_catalog_url() {
        assert_eq!(
            gogh_theme_url("atom"),
            "https://raw.githubusercontent.com/Mayccoll/Gogh/master/themes/atom.sh"
        );
    }

    #[test]
    fn open_file_reads_theme_bytes() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "COLOR_01=\"#112233").unwrap();
        let mut reader = open_file(tmp.path()).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "COLOR_01=\"#112233\n");
    }

    #[test]
    fn missing_file_is_an_error_not_an_empty_stream() {
        let err = match open_file(Path::new("/nonexistent/theme.sh")) {
            Ok(_) => panic!("expected missing file to fail"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("/nonexistent/theme.sh"));
    }
}
