//! Prompt context and placeholder substitution.
//!
//! This module provides:
//!
//! - **Field**: The twelve named fields and their `$placeholder` tokens
//! - **Context**: [`TemplateContext`], the values substituted into templates
//! - **System message**: The default review checklist
//!
//! # Template Syntax
//!
//! Templates reference fields as `$` followed by the snake_case field name:
//!
//! ```text
//! ## File: $filename
//!
//! $file_diff
//!
//! Reply to: $comment
//! ```
//!
//! Only the first occurrence of each placeholder is replaced, and fields
//! with an empty value are not substituted at all. There is no escape
//! sequence for a literal `$title`.

mod context;
mod field;
mod system_message;


pub use context::{ContextOverrides, TemplateContext};
pub use field::{Field, FieldParseError};
pub use system_message::DEFAULT_SYSTEM_MESSAGE;
