//! Review-inputs: review prompt context with `$placeholder` substitution.
//!
//! The core type is [`prompt::TemplateContext`], a fixed set of named text
//! fields (system message, title, description, summaries, file content and
//! diffs, comment context) with defaults, and a `render` operation that fills
//! `$field` placeholders in a template.
//!
//! The remaining modules back the `review-inputs` binary: context files,
//! errors, exit codes and atomic output writes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
