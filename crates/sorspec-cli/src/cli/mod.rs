//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sorspec_core::domain::Layer;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sorspec",
    bin_name = "sorspec",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Project configuration from layers and requirements",
    long_about = "sorspec writes a YAML project configuration describing the \
                  technology layers of an application and the default \
                  configuration of the requirements it needs.",
    after_help = "EXAMPLES:\n\
        \x20 sorspec init myapp\n\
        \x20 sorspec init ./shop --server go --database postgres authorization\n\
        \x20 sorspec init ./shop --mode dir authentication authorization\n\
        \x20 sorspec list requirements",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a project configuration.
    #[command(
        about = "Initialise a project configuration",
        after_help = "EXAMPLES:\n\
            \x20 sorspec init myapp\n\
            \x20 sorspec init base -s go authorization\n\
            \x20 sorspec init . --mode dir -d postgres -b react\n\
            \x20 sorspec init myapp authentication --dry-run"
    )]
    Init(InitArgs),

    /// List layers and requirements.
    #[command(
        visible_alias = "ls",
        about = "List available layers and requirements",
        after_help = "EXAMPLES:\n\
            \x20 sorspec list\n\
            \x20 sorspec list requirements\n\
            \x20 sorspec list layers --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sorspec completions bash > ~/.local/share/bash-completion/completions/sorspec\n\
            \x20 sorspec completions zsh  > ~/.zfunc/_sorspec\n\
            \x20 sorspec completions fish > ~/.config/fish/completions/sorspec.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the sorspec configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sorspec config get defaults.mode\n\
            \x20 sorspec config list\n\
            \x20 sorspec config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sorspec init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory. Its last component becomes the application name.
    #[arg(value_name = "PATH", help = "Project directory")]
    pub path: PathBuf,

    /// Requirement ids whose default configuration is included, in order.
    #[arg(value_name = "REQUIREMENT", help = "Requirements to include")]
    pub requirements: Vec<String>,

    /// Output mode. Falls back to `defaults.mode` from the config file.
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        help = "Output mode: file, dir"
    )]
    pub mode: Option<String>,

    #[arg(short = 'd', long = "database", value_name = "CORE", help = "Database core")]
    pub database: Option<String>,

    #[arg(short = 's', long = "server", value_name = "CORE", help = "Server core")]
    pub server: Option<String>,

    #[arg(short = 'b', long = "browser", value_name = "CORE", help = "Browser core")]
    pub browser: Option<String>,

    #[arg(short = 'a', long = "android", value_name = "CORE", help = "Android core")]
    pub android: Option<String>,

    #[arg(short = 'i', long = "ios", value_name = "CORE", help = "iOS core")]
    pub ios: Option<String>,

    /// Print the document instead of writing anything.
    #[arg(long = "dry-run", help = "Print the configuration without writing it")]
    pub dry_run: bool,
}

impl InitArgs {
    /// Layer flags that were given, in catalog order. An empty value is
    /// passed through and rejected later as an unknown core.
    pub fn layer_selections(&self) -> Vec<(Layer, &str)> {
        [
            (Layer::Database, &self.database),
            (Layer::Server, &self.server),
            (Layer::Browser, &self.browser),
            (Layer::Ios, &self.ios),
            (Layer::Android, &self.android),
        ]
        .into_iter()
        .filter_map(|(layer, core)| core.as_deref().map(|core| (layer, core)))
        .collect()
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sorspec list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list. Both when omitted.
    #[arg(value_enum, value_name = "WHAT")]
    pub what: Option<ListTarget>,

    /// Output format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Layers,
    Requirements,
}

/// Output format for `sorspec list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns with descriptions.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sorspec completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands of `sorspec config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value.
    Get {
        /// Dotted key, e.g. `defaults.mode`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the default config file location.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
