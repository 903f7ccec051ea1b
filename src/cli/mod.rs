//! CLI argument parsing for review-inputs.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Review-inputs: fill `$placeholder` prompt templates from review context.
///
/// Context values come from an optional YAML/JSON context file and
/// `--set` flags; anything not supplied takes its default.
#[derive(Parser, Debug)]
#[command(name = "review-inputs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for review-inputs.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a template with the review context.
    ///
    /// Replaces the first occurrence of each `$field` placeholder whose
    /// value is non-empty.
    Render(RenderArgs),

    /// List the fields, their placeholders and default values.
    Fields,

    /// Print the default context as YAML.
    ///
    /// Useful as a starting point for a context file.
    Defaults(DefaultsArgs),

    /// Print the default system message.
    SystemMessage,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file to render. Reads stdin when omitted or `-`.
    pub template: Option<PathBuf>,

    /// YAML or JSON file with field values.
    #[arg(short, long)]
    pub context: Option<PathBuf>,

    /// Set a field value (FIELD=VALUE). May be repeated; later values win.
    #[arg(short, long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Set a field value from a file (FIELD=PATH). May be repeated.
    #[arg(long = "set-file", value_name = "FIELD=PATH")]
    pub set_file: Vec<String>,

    /// Write the rendered output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `defaults` command.
#[derive(Parser, Debug)]
pub struct DefaultsArgs {
    /// Leave the system message out of the output.
    #[arg(long)]
    pub no_system_message: bool,
}
