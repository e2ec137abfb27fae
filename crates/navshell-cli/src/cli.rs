//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use navshell_model::DropdownKind;

#[derive(Parser)]
#[command(
    name = "navshell",
    version,
    about = "Inspect the dashboard navigation catalog and replay navigation sessions",
    long_about = "Inspect the dashboard navigation catalog, plan restrictions and dropdown \
                  options, and replay scripted navigation sessions against the shell \
                  controller."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: settings.toml in the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// List sections with category and leaf counts.
    Sections,

    /// List the leaves of one section with tiers and badges.
    Menu(MenuArgs),

    /// Show the plan tier required by each leaf name.
    Tier(TierArgs),

    /// Apply a JSON-lines action script and print the resulting view.
    Replay(ReplayArgs),

    /// List the options of a side-nav dropdown.
    Options(OptionsArgs),
}

#[derive(Parser)]
pub struct MenuArgs {
    /// Section key (e.g. team, member, organization).
    #[arg(value_name = "SECTION")]
    pub section: String,
}

#[derive(Parser)]
pub struct TierArgs {
    /// Leaf names to look up.
    #[arg(value_name = "LEAF", required = true)]
    pub leaves: Vec<String>,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Script with one JSON action per line.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output format of each render instruction.
    #[arg(long = "format", value_enum, default_value = "outline")]
    pub format: RenderFormatArg,

    /// Print every emitted instruction instead of only the final state.
    #[arg(long = "each")]
    pub each: bool,
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[arg(value_name = "KIND", value_enum)]
    pub kind: DropdownKindArg,

    /// Case-insensitive substring filter.
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderFormatArg {
    Outline,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DropdownKindArg {
    Team,
    Member,
    Project,
}

impl From<DropdownKindArg> for DropdownKind {
    fn from(kind: DropdownKindArg) -> Self {
        match kind {
            DropdownKindArg::Team => DropdownKind::Team,
            DropdownKindArg::Member => DropdownKind::Member,
            DropdownKindArg::Project => DropdownKind::Project,
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
