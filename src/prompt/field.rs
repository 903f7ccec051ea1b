//! The named fields of a review context and their placeholder tokens.
//!
//! Each field is referenced in templates as `$` followed by its snake_case
//! name, e.g. `$file_content`. [`Field::ALL`] lists the fields in the order
//! they are substituted by [`TemplateContext::render`](super::TemplateContext::render).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::system_message::DEFAULT_SYSTEM_MESSAGE;

/// A named text field of a [`TemplateContext`](super::TemplateContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Instructions for the downstream model.
    SystemMessage,
    /// Subject title.
    Title,
    /// Subject description.
    Description,
    /// Unprocessed summary text.
    RawSummary,
    /// Condensed summary text.
    ShortSummary,
    /// Path of the file under review.
    Filename,
    /// Full content of the file under review.
    FileContent,
    /// Diff of the file under review.
    FileDiff,
    /// Patch text.
    Patches,
    /// Diff text for the whole change.
    Diff,
    /// Prior comment thread.
    CommentChain,
    /// The comment currently being addressed.
    Comment,
}

impl Field {
    /// All fields, in substitution order.
    ///
    /// `$comment` is a prefix of `$comment_chain`, so `CommentChain` must stay
    /// ahead of `Comment`.
    pub const ALL: [Field; 12] = [
        Field::SystemMessage,
        Field::Title,
        Field::Description,
        Field::RawSummary,
        Field::ShortSummary,
        Field::Filename,
        Field::FileContent,
        Field::FileDiff,
        Field::Patches,
        Field::Diff,
        Field::CommentChain,
        Field::Comment,
    ];

    /// The snake_case name, as used in context files and `--set` flags.
    pub fn name(self) -> &'static str {
        match self {
            Field::SystemMessage => "system_message",
            Field::Title => "title",
            Field::Description => "description",
            Field::RawSummary => "raw_summary",
            Field::ShortSummary => "short_summary",
            Field::Filename => "filename",
            Field::FileContent => "file_content",
            Field::FileDiff => "file_diff",
            Field::Patches => "patches",
            Field::Diff => "diff",
            Field::CommentChain => "comment_chain",
            Field::Comment => "comment",
        }
    }

    /// The placeholder token for this field, e.g. `$file_diff`.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::SystemMessage => "$system_message",
            Field::Title => "$title",
            Field::Description => "$description",
            Field::RawSummary => "$raw_summary",
            Field::ShortSummary => "$short_summary",
            Field::Filename => "$filename",
            Field::FileContent => "$file_content",
            Field::FileDiff => "$file_diff",
            Field::Patches => "$patches",
            Field::Diff => "$diff",
            Field::CommentChain => "$comment_chain",
            Field::Comment => "$comment",
        }
    }

    /// The value a field takes when it is not supplied.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::SystemMessage => DEFAULT_SYSTEM_MESSAGE,
            Field::Title => "no title provided",
            Field::Description => "no description provided",
            Field::RawSummary => "",
            Field::ShortSummary => "",
            Field::Filename => "",
            Field::FileContent => "file contents cannot be provided",
            Field::FileDiff => "file diff cannot be provided",
            Field::Patches => "",
            Field::Diff => "no diff",
            Field::CommentChain => "no other comments on this patch",
            Field::Comment => "no comment provided",
        }
    }

    /// The camelCase spelling, accepted as an alias when parsing.
    fn camel_name(self) -> &'static str {
        match self {
            Field::SystemMessage => "systemMessage",
            Field::RawSummary => "rawSummary",
            Field::ShortSummary => "shortSummary",
            Field::FileContent => "fileContent",
            Field::FileDiff => "fileDiff",
            Field::CommentChain => "commentChain",
            other => other.name(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{name}' (expected one of: {})", expected_names())]
pub struct FieldParseError {
    /// The rejected input.
    pub name: String,
}

fn expected_names() -> String {
    Field::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for Field {
    type Err = FieldParseError;

    /// Parse a field from its snake_case name, camelCase name, or placeholder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);

        Field::ALL
            .into_iter()
            .find(|f| f.name() == bare || f.camel_name() == bare)
            .ok_or_else(|| FieldParseError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_dollar_name() {
        for field in Field::ALL {
            assert_eq!(field.placeholder(), format!("${}", field.name()));
        }
    }

    #[test]
    fn test_order_matches_declaration() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "system_message",
                "title",
                "description",
                "raw_summary",
                "short_summary",
                "filename",
                "file_content",
                "file_diff",
                "patches",
                "diff",
                "comment_chain",
                "comment",
            ]
        );
    }

    #[test]
    fn test_prefix_tokens_substituted_longest_first() {
        // A placeholder that is a prefix of another must come later.
        for (i, earlier) in Field::ALL.iter().enumerate() {
            for later in &Field::ALL[i + 1..] {
                assert!(
                    !later.placeholder().starts_with(earlier.placeholder()),
                    "${} would be clobbered by ${}",
                    later,
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_parse_snake_case() {
        assert_eq!("file_content".parse::<Field>(), Ok(Field::FileContent));
        assert_eq!("comment".parse::<Field>(), Ok(Field::Comment));
        assert_eq!("diff".parse::<Field>(), Ok(Field::Diff));
    }

    #[test]
    fn test_parse_camel_case_and_placeholder() {
        assert_eq!("commentChain".parse::<Field>(), Ok(Field::CommentChain));
        assert_eq!("systemMessage".parse::<Field>(), Ok(Field::SystemMessage));
        assert_eq!("$short_summary".parse::<Field>(), Ok(Field::ShortSummary));
        assert_eq!(" title ".parse::<Field>(), Ok(Field::Title));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "author".parse::<Field>().unwrap_err();
        assert_eq!(err.name, "author");
        let msg = err.to_string();
        assert!(msg.starts_with("unknown field 'author'"));
        assert!(msg.contains("comment_chain"));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Field::RawSummary.to_string(), "raw_summary");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Field::Title.default_value(), "no title provided");
        assert_eq!(Field::Filename.default_value(), "");
        assert_eq!(Field::Diff.default_value(), "no diff");
        assert!(Field::SystemMessage.default_value().contains("Lesson Overview"));
    }
}
