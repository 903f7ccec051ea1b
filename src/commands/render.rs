//! Implementation of the `review-inputs render` command.
//!
//! Builds a [`TemplateContext`] from, in order of precedence (lowest first):
//!
//! 1. Field defaults
//! 2. The `--context` file
//! 3. `--set-file FIELD=PATH` values
//! 4. `--set FIELD=VALUE` values
//!
//! then renders the template and writes the result to stdout or `--output`.

use crate::cli::RenderArgs;
use crate::error::{InputsError, Result};
use crate::fs::atomic_write_file;
use crate::prompt::{ContextOverrides, Field, TemplateContext};
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Execute the `review-inputs render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let ctx = build_context(args.context.as_deref(), &args.set_file, &args.set)?;
    let template = read_template(args.template.as_deref())?;

    let rendered = ctx.render(&template);

    match args.output {
        Some(path) => {
            atomic_write_file(&path, &rendered)?;
            info!(path = %path.display(), bytes = rendered.len(), "wrote rendered prompt");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| InputsError::IoError(format!("failed to write to stdout: {}", e)))?;
        }
    }

    Ok(())
}

/// Assemble the context from the context file and flag assignments.
fn build_context(
    context_file: Option<&Path>,
    set_file: &[String],
    set: &[String],
) -> Result<TemplateContext> {
    let mut ctx = match context_file {
        Some(path) => {
            info!(path = %path.display(), "loading context");
            TemplateContext::load(path)?
        }
        None => TemplateContext::default(),
    };

    let mut overrides = ContextOverrides::new();

    for assignment in set_file {
        let (field, path) = parse_assignment(assignment)?;
        let value = std::fs::read_to_string(path).map_err(|e| {
            InputsError::UserError(format!(
                "failed to read value for '{}' from '{}': {}",
                field, path, e
            ))
        })?;
        debug!(%field, path, bytes = value.len(), "field value from file");
        overrides.set(field, value);
    }

    for assignment in set {
        let (field, value) = parse_assignment(assignment)?;
        debug!(%field, bytes = value.len(), "field value from flag");
        overrides.set(field, value);
    }

    if !overrides.is_empty() {
        overrides.apply_to(&mut ctx);
    }
    Ok(ctx)
}

/// Split `FIELD=VALUE` at the first `=`.
fn parse_assignment(assignment: &str) -> Result<(Field, &str)> {
    let (name, value) = assignment.split_once('=').ok_or_else(|| {
        InputsError::UserError(format!(
            "invalid assignment '{}': expected FIELD=VALUE",
            assignment
        ))
    })?;

    let field: Field = name.parse()?;
    Ok((field, value))
}

/// Read the template from a file, or from stdin when `None` or `-`.
fn read_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            InputsError::UserError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut template = String::new();
            io::stdin()
                .read_to_string(&mut template)
                .map_err(|e| InputsError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(template)
        }
    }
}
