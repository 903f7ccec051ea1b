//! Command implementations for review-inputs.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod defaults;
mod fields;
mod render;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Fields => fields::cmd_fields(),
        Command::Defaults(args) => defaults::cmd_defaults(args),
        Command::SystemMessage => defaults::cmd_system_message(),
    }
}
