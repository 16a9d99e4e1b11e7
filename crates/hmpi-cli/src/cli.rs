//! CLI argument definitions for the `hmpi` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hmpi_cli::pipeline::GroupField;
use hmpi_model::{ConcentrationUnit, MetalKey};

#[derive(Parser)]
#[command(
    name = "hmpi",
    version,
    about = "Heavy-metal pollution indices for groundwater quality data",
    long_about = "Compute the Heavy Metal Pollution Index (HPI), Heavy Metal Evaluation \
                  Index (HEI) and Contamination Index (CI) for single samples or whole \
                  CSV measurement tables.\n\n\
                  Concentrations are compared against a named standards profile; tables \
                  can be exported with the indices appended."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate one sample given as METAL=VALUE pairs in mg/L.
    Calc(CalcArgs),

    /// Index a CSV measurement table and summarize it.
    Report(ReportArgs),

    /// List the available standards profiles and their limits.
    Profiles(StandardsArgs),
}

/// Standards profile selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct StandardsArgs {
    /// Standards profile by name or slug (default: the registry default).
    #[arg(long = "profile", value_name = "NAME")]
    pub profile: Option<String>,

    /// TOML file with additional or replacement standards profiles.
    #[arg(long = "profiles", value_name = "PATH")]
    pub profiles_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Concentrations such as `Pb=0.02 Cd=0.004`; unlisted metals are 0.
    #[arg(value_name = "METAL=VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub standards: StandardsArgs,

    /// Number of top HPI contributors to show.
    #[arg(long = "top", default_value_t = 3)]
    pub top: usize,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// CSV file with State, District, Location, Longitude, Latitude and the
    /// eight metal columns.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Unit of the metal columns (mg/L or µg/L).
    #[arg(
        long = "unit",
        value_name = "UNIT",
        default_value_t = ConcentrationUnit::MicrogramsPerLitre
    )]
    pub unit: ConcentrationUnit,

    #[command(flatten)]
    pub standards: StandardsArgs,

    /// Fail on the first metal cell that is not a non-negative number.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Write the table with HPI, HEI and CI columns appended.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the report summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Roll up indices per state or district.
    #[arg(long = "group-by", value_enum, value_name = "FIELD")]
    pub group_by: Option<GroupByArg>,

    /// Rank groups by mean concentration of this metal.
    #[arg(long = "metal", value_name = "METAL")]
    pub metal: Option<MetalKey>,

    /// Number of groups kept in the metal ranking.
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum GroupByArg {
    State,
    District,
}

impl From<GroupByArg> for GroupField {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::State => GroupField::State,
            GroupByArg::District => GroupField::District,
        }
    }
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
