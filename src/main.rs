//! CLI driver: resolves the theme source and output sink, picks the
//! extractor, runs the pipeline, and writes the rendered registry file.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use termreg::extract::ExtractorKind;
use termreg::{logging, registry, source};

#[derive(Parser, Debug)]
#[command(name = "termreg", version, about = "Convert terminal color themes into Windows console registry imports")]
struct Cli {
    /// Local theme file to convert.
    #[arg(long)]
    in_file: Option<PathBuf>,

    /// URL to fetch the theme from.
    #[arg(long)]
    in_url: Option<String>,

    /// Gogh theme name; fetched from the upstream theme catalog.
    #[arg(long)]
    gogh_theme: Option<String>,

    /// Output file. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Append log lines to this file in addition to stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Color table slot for the theme foreground.
    #[arg(long, default_value_t = 1)]
    fg_color_index: usize,

    /// Color table slot for the theme background.
    #[arg(long, default_value_t = 4)]
    bg_color_index: usize,

    /// Which theme format to parse.
    #[arg(long, value_enum, default_value = "gogh")]
    extractor: ExtractorKind,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(cli.log_file.as_deref())
        .context("failed to initialize logging")?;

    let url = cli
        .gogh_theme
        .as_deref()
        .map(source::gogh_theme_url)
        .or_else(|| cli.in_url.clone());

    let mut input: Box<dyn BufRead> = match (&cli.in_file, &url) {
        (Some(path), _) => source::open_file(path)?,
        (None, Some(url)) => source::fetch_url(url)?,
        (None, None) => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let table = cli
        .extractor
        .extractor()
        .extract(&mut input, cli.fg_color_index, cli.bg_color_index)
        .context("failed to extract colors from theme")?;
    let rendered = registry::render(&table);

    match &cli.out {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "registry file written");
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
