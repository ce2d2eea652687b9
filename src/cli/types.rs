use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "tocgen")]
#[command(about = "Generate a table of contents for HTML documents from their headings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append table of contents entries to HTML documents
    #[command(alias = "g")]
    Generate {
        /// Files or directories to process
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Custom configuration file (repeatable, later files win)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,

        /// Id of the element receiving the entries
        #[arg(long, value_name = "ID")]
        container: Option<String>,

        /// Rewrite the input files
        #[arg(short, long, default_value_t = false, conflicts_with = "output")]
        in_place: bool,

        /// Write results into this directory instead of stdout
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// List the headings that would become entries
    #[command(alias = "h")]
    Headings {
        /// Files or directories to inspect
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Custom configuration file (repeatable, later files win)
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
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
    fn test_parse_generate() {
        let cli = Cli::parse_from(["tocgen", "-g", "generate", "a.html", "site", "--in-place", "--container", "nav"]);
        assert!(cli.debug);
        match cli.command {
            Commands::Generate { paths, in_place, container, output, .. } => {
                assert_eq!(paths, vec![PathBuf::from("a.html"), PathBuf::from("site")]);
                assert!(in_place);
                assert_eq!(container.as_deref(), Some("nav"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_in_place_conflicts_with_output() {
        let result = Cli::try_parse_from(["tocgen", "generate", "a.html", "-i", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_headings_json() {
        let cli = Cli::parse_from(["tocgen", "h", "a.html", "--format", "json"]);
        match cli.command {
            Commands::Headings { format, .. } => assert_eq!(format, OutputFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
