//! Implementations of the `defaults` and `system-message` commands.

use crate::cli::DefaultsArgs;
use crate::error::{InputsError, Result};
use crate::prompt::{DEFAULT_SYSTEM_MESSAGE, TemplateContext};

/// Execute the `review-inputs defaults` command.
pub fn cmd_defaults(args: DefaultsArgs) -> Result<()> {
    print!("{}", defaults_yaml(args.no_system_message)?);
    Ok(())
}

/// Execute the `review-inputs system-message` command.
pub fn cmd_system_message() -> Result<()> {
    print!("{}", DEFAULT_SYSTEM_MESSAGE);
    Ok(())
}

fn defaults_yaml(no_system_message: bool) -> Result<String> {
    let ctx = TemplateContext::default();
    if !no_system_message {
        return ctx.to_yaml();
    }

    let mut value = serde_yaml::to_value(&ctx)
        .map_err(|e| InputsError::ParseError(format!("failed to serialize defaults: {}", e)))?;
    if let Some(mapping) = value.as_mapping_mut() {
        mapping.remove("system_message");
    }

    serde_yaml::to_string(&value)
        .map_err(|e| InputsError::ParseError(format!("failed to serialize defaults: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_yaml_parses_back() {
        let yaml = defaults_yaml(false).unwrap();
        let ctx = TemplateContext::from_yaml(&yaml).unwrap();
        assert_eq!(ctx, TemplateContext::default());
    }

    #[test]
    fn test_defaults_yaml_without_system_message() {
        let yaml = defaults_yaml(true).unwrap();
        assert!(!yaml.contains("system_message"));
        assert!(!yaml.contains("Lesson Overview"));
        assert!(yaml.contains("title: no title provided"));
        assert!(yaml.contains("comment: no comment provided"));

        // The omitted field falls back to its default when read back.
        let ctx = TemplateContext::from_yaml(&yaml).unwrap();
        assert_eq!(ctx, TemplateContext::default());
    }
}
