//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use funwave_domain::Category;
use std::path::PathBuf;

/// Output format for state reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored, human readable listing
    #[default]
    Text,
    /// JSON array of reports
    Json,
}

/// CLI arguments for funwave-input
#[derive(Parser, Debug)]
#[command(name = "funwave-input")]
#[command(author, version, about = "Build and check FUNWAVE-TVD driver files")]
#[command(long_about = r#"
funwave-input turns JSON configurations into FUNWAVE-TVD driver files.

Every parameter is validated against its datatype and range when loaded.
Parameters only take part in a run when one of their dependencies holds,
e.g. AMP_WK only matters for WAVEMAKER = WK_REG.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./funwave.toml         Project-level config
3. ~/.config/funwave-tools/config.toml   Global config
4. FUNWAVE_<SECTION>__<KEY> environment variables

Example:
  funwave-input template -o config.json
  funwave-input check config.json
  funwave-input render config.json -o input.txt --module sponge_layer
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write error.json into this directory when the command fails
    #[arg(long, value_name = "DIR", global = true)]
    pub error_report: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON configuration as a driver file
    Render {
        /// JSON configuration
        source: PathBuf,

        /// Driver file to write (printed to stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        /// Append descriptions as comments
        #[arg(long)]
        with_desc: bool,

        /// Banner width
        #[arg(long, value_name = "N")]
        width: Option<usize>,

        /// Banner fill character
        #[arg(long, value_name = "CHAR")]
        banner_char: Option<char>,

        /// Refuse to render when required parameters are missing
        #[arg(long)]
        strict: bool,
    },

    /// Report parameters that are missing or have no effect
    Check {
        /// JSON configuration
        source: PathBuf,

        #[command(flatten)]
        view: ViewArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Re-export a JSON configuration
    Export {
        /// JSON configuration
        source: PathBuf,

        /// JSON file to write (printed to stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// List the known parameters
    Show {
        /// Every parameter instead of the minimal set
        #[arg(short, long)]
        all: bool,

        /// Only this category
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<Category>,
    },

    /// Write a JSON configuration with every parameter that must be set
    Template {
        /// JSON file to write (printed to stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,

        #[command(flatten)]
        shape: ShapeArgs,
    },
}

/// Which parameters a command looks at.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Include every parameter of the active categories
    #[arg(long)]
    pub full: bool,

    /// Optional category to include even when nothing in it is set
    #[arg(short, long = "module", value_name = "CATEGORY")]
    pub modules: Vec<Category>,
}

/// Shape of exported JSON.
#[derive(Args, Debug, Clone, Default)]
pub struct ShapeArgs {
    /// Nest parameters under their category
    #[arg(long)]
    pub grouped: bool,

    /// Emit parameter metadata next to each value
    #[arg(long)]
    pub detailed: bool,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_arguments() {
        let cli = Cli::try_parse_from([
            "funwave-input",
            "-vv",
            "render",
            "config.json",
            "-o",
            "input.txt",
            "--module",
            "sponge_layer",
            "-m",
            "WAVE_MAKER",
            "--banner-char",
            "=",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Render {
                source,
                output,
                view,
                banner_char,
                ..
            }) => {
                assert_eq!(source, PathBuf::from("config.json"));
                assert_eq!(output, Some(PathBuf::from("input.txt")));
                assert_eq!(view.modules, vec![Category::SpongeLayer, Category::WaveMaker]);
                assert!(!view.full);
                assert_eq!(banner_char, Some('='));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["funwave-input", "show", "--category", "SPONGE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_report_is_global() {
        let cli = Cli::try_parse_from([
            "funwave-input",
            "check",
            "config.json",
            "--error-report",
            "out",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.error_report, Some(PathBuf::from("out")));
        assert!(matches!(
            cli.command,
            Some(Command::Check {
                format: ReportFormat::Json,
                ..
            })
        ));
    }
}
