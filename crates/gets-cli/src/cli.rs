//! CLI argument definitions for the readiness analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gets_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "gets-readiness",
    version,
    about = "E-invoicing readiness analyzer for GETS invoice data",
    long_about = "Map uploaded invoice columns onto the GETS schema, run the\n\
                  business rules and compute a weighted readiness score.\n\n\
                  Accepts CSV and JSON uploads of up to 200 rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow invoice cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Schema catalog to use instead of the bundled GETS v0.1 catalog
    /// (also read from GETS_SCHEMA_PATH).
    #[arg(long = "schema", value_name = "PATH", global = true)]
    pub schema: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the standard fields of the schema.
    Fields,

    /// List the business rules and their score weights.
    Rules,

    /// Suggest a column mapping for an upload.
    Suggest(SuggestArgs),

    /// Validate and score an upload.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// CSV or JSON upload.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the suggested mapping here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV or JSON upload.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON object mapping source columns to field paths (or null).
    #[arg(long = "mapping", short = 'm', value_name = "JSON")]
    pub mapping: PathBuf,

    /// JSON object with webhooks, sandbox_env, retries and error_handling
    /// answers.
    #[arg(long = "questionnaire", value_name = "JSON")]
    pub questionnaire: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write the report here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_is_named_after_the_binary() {
        assert_eq!(Cli::command().get_name(), "gets-readiness");
    }

    #[test]
    fn parses_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "gets-readiness",
            "analyze",
            "invoices.csv",
            "--mapping",
            "mapping.json",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.file, PathBuf::from("invoices.csv"));
        assert_eq!(args.mapping, PathBuf::from("mapping.json"));
        assert!(args.questionnaire.is_none());
        assert!(args.format == ReportFormatArg::Json);
        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
    }

    #[test]
    fn analyze_requires_mapping() {
        assert!(Cli::try_parse_from(["gets-readiness", "analyze", "invoices.csv"]).is_err());
    }
}
