//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More log output: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output.
    ///
    /// Any non-empty `NO_COLOR` other than `0`/`false`/`no`/`off` counts as set.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the user config file.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results on stdout are rendered. Overrides `output.format`.
    #[arg(long = "output-format", global = true, value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,
}

/// Rendering of command results on stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored text.
    Human,
    /// Text without colors.
    Plain,
    /// JSON.
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Human => "human",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}
