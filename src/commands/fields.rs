//! Implementation of the `review-inputs fields` command.

use crate::error::Result;
use crate::prompt::Field;

const PREVIEW_CHARS: usize = 48;

/// Execute the `review-inputs fields` command.
pub fn cmd_fields() -> Result<()> {
    print!("{}", format_fields());
    Ok(())
}

/// One line per field, in substitution order.
fn format_fields() -> String {
    let mut out = format!("{:<4}{:<18}{}\n", "#", "PLACEHOLDER", "DEFAULT");
    for (i, field) in Field::ALL.iter().enumerate() {
        out.push_str(&format!(
            "{:<4}{:<18}{}\n",
            i + 1,
            field.placeholder(),
            preview(field.default_value())
        ));
    }
    out
}

/// First non-blank line of a value, quoted and shortened for display.
fn preview(value: &str) -> String {
    let Some(line) = value.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return "(empty)".to_string();
    };

    if line.chars().count() > PREVIEW_CHARS {
        let short: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{:?}...", short)
    } else {
        format!("{:?}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lists_all_fields_in_order() {
        let out = format_fields();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), Field::ALL.len() + 1);
        assert!(lines[0].starts_with("#"));
        assert!(lines[1].contains("$system_message"));
        assert!(lines[12].contains("$comment"));
        assert!(!lines[12].contains("$comment_chain"));
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(preview(""), "(empty)");
        assert_eq!(preview("\n  \n"), "(empty)");
    }

    #[test]
    fn test_preview_short_value_is_quoted() {
        assert_eq!(preview("no diff"), "\"no diff\"");
    }

    #[test]
    fn test_preview_long_value_is_shortened() {
        let p = preview(Field::SystemMessage.default_value());
        assert!(p.starts_with("\"Please review the provided content"));
        assert!(p.ends_with("\"..."));
        assert_eq!(p.chars().filter(|c| *c == '"').count(), 2);
    }
}
