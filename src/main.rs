use std::path::PathBuf;

use clap::Parser;
use gruvalized::{
    emit::write_themes,
    preview::{render_palette, render_swatches},
    Palette, ThemeDocument, ThemeResult,
};
use miette::miette;
use rayon::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is not set
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(
    name = "gruvalized",
    version,
    about = "Generate editor color themes from Gruvalized palettes"
)]
struct Cli {
    /// Directory the theme files are written to
    #[arg(long, short = 'o', env = "GRUVALIZED_OUT_DIR", default_value = "themes")]
    out_dir: PathBuf,
    /// Palette JSON file; repeatable. Defaults to the built-in light and dark palettes.
    #[arg(long = "palette", short = 'p', value_name = "FILE")]
    palettes: Vec<PathBuf>,
    /// Print truecolor swatches of each theme (only when stdout is a terminal)
    #[arg(long)]
    preview: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let palettes = if cli.palettes.is_empty() {
        Palette::builtin().to_vec()
    } else {
        cli.palettes
            .iter()
            .map(Palette::load)
            .collect::<ThemeResult<Vec<_>>>()?
    };
    debug!(count = palettes.len(), "building themes");

    // Variants share nothing, so they build side by side
    let docs = palettes
        .par_iter()
        .map(ThemeDocument::build)
        .collect::<ThemeResult<Vec<_>>>()?;

    write_themes(&cli.out_dir, &docs)?;

    if cli.preview && atty::is(atty::Stream::Stdout) {
        for (palette, doc) in palettes.iter().zip(&docs) {
            print!("{}", render_palette(palette));
            println!("{}", render_swatches(&doc.colors));
        }
    }

    Ok(())
}

fn init_logging(level: &str) -> miette::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| miette!("failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_flag_has_help() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            if arg.get_id() == "help" || arg.get_id() == "version" {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{} has no help", arg.get_id());
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["gruvalized"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("themes"));
        assert!(cli.palettes.is_empty());
        assert!(!cli.preview);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_repeated_palettes() {
        let cli = Cli::try_parse_from([
            "gruvalized",
            "-p",
            "a.json",
            "--palette",
            "b.json",
            "--out-dir",
            "out",
            "--preview",
        ])
        .unwrap();
        assert_eq!(
            cli.palettes,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.preview);
    }
}
