//! Review context: the named values substituted into prompt templates.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::field::Field;

/// The values available to a prompt template.
///
/// Every field is always a defined string. Fields that are not supplied take
/// the value from [`Field::default_value`]. Rendering never mutates the
/// context, so one instance can render any number of templates; clone it to
/// specialize a field (typically `comment`) without touching the original.
///
/// When deserialized, a missing key and an explicit `null` both mean "not
/// supplied" and take the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContextDocument")]
pub struct TemplateContext {
    /// Instructions for the downstream model (`$system_message`).
    pub system_message: String,
    /// Subject title (`$title`).
    pub title: String,
    /// Subject description (`$description`).
    pub description: String,
    /// Unprocessed summary (`$raw_summary`).
    pub raw_summary: String,
    /// Condensed summary (`$short_summary`).
    pub short_summary: String,
    /// Path of the file under review (`$filename`).
    pub filename: String,
    /// Content of the file under review (`$file_content`).
    pub file_content: String,
    /// Diff of the file under review (`$file_diff`).
    pub file_diff: String,
    /// Patch text (`$patches`).
    pub patches: String,
    /// Diff of the whole change (`$diff`).
    pub diff: String,
    /// Prior comment thread (`$comment_chain`).
    pub comment_chain: String,
    /// Comment currently being addressed (`$comment`).
    pub comment: String,
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self {
            system_message: Field::SystemMessage.default_value().to_string(),
            title: Field::Title.default_value().to_string(),
            description: Field::Description.default_value().to_string(),
            raw_summary: Field::RawSummary.default_value().to_string(),
            short_summary: Field::ShortSummary.default_value().to_string(),
            filename: Field::Filename.default_value().to_string(),
            file_content: Field::FileContent.default_value().to_string(),
            file_diff: Field::FileDiff.default_value().to_string(),
            patches: Field::Patches.default_value().to_string(),
            diff: Field::Diff.default_value().to_string(),
            comment_chain: Field::CommentChain.default_value().to_string(),
            comment: Field::Comment.default_value().to_string(),
        }
    }
}

/// Optional per-field values used to build a [`TemplateContext`].
///
/// `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextOverrides {
    values: [Option<String>; 12],
}

impl ContextOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a field, replacing any earlier value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        self.values[index_of(field)] = Some(value.into());
        self
    }

    /// The override for a field, if one was given.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[index_of(field)].as_deref()
    }

    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Write every given value into `ctx`, leaving other fields untouched.
    pub fn apply_to(&self, ctx: &mut TemplateContext) {
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                ctx.set(field, value);
            }
        }
    }
}

/// On-disk shape of a context: every key optional, `null` treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContextDocument {
    system_message: Option<String>,
    title: Option<String>,
    description: Option<String>,
    raw_summary: Option<String>,
    short_summary: Option<String>,
    filename: Option<String>,
    file_content: Option<String>,
    file_diff: Option<String>,
    patches: Option<String>,
    diff: Option<String>,
    comment_chain: Option<String>,
    comment: Option<String>,
}

impl From<ContextDocument> for TemplateContext {
    fn from(doc: ContextDocument) -> Self {
        let values = [
            (Field::SystemMessage, doc.system_message),
            (Field::Title, doc.title),
            (Field::Description, doc.description),
            (Field::RawSummary, doc.raw_summary),
            (Field::ShortSummary, doc.short_summary),
            (Field::Filename, doc.filename),
            (Field::FileContent, doc.file_content),
            (Field::FileDiff, doc.file_diff),
            (Field::Patches, doc.patches),
            (Field::Diff, doc.diff),
            (Field::CommentChain, doc.comment_chain),
            (Field::Comment, doc.comment),
        ];

        let mut overrides = ContextOverrides::new();
        for (field, value) in values {
            if let Some(value) = value {
                overrides.set(field, value);
            }
        }
        TemplateContext::from_overrides(&overrides)
    }
}

fn index_of(field: Field) -> usize {
    field as usize
}

impl TemplateContext {
    /// Create a context with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from optional overrides; missing fields take defaults.
    pub fn from_overrides(overrides: &ContextOverrides) -> Self {
        let mut ctx = Self::default();
        overrides.apply_to(&mut ctx);
        ctx
    }

    /// The current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SystemMessage => &self.system_message,
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::RawSummary => &self.raw_summary,
            Field::ShortSummary => &self.short_summary,
            Field::Filename => &self.filename,
            Field::FileContent => &self.file_content,
            Field::FileDiff => &self.file_diff,
            Field::Patches => &self.patches,
            Field::Diff => &self.diff,
            Field::CommentChain => &self.comment_chain,
            Field::Comment => &self.comment,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::SystemMessage => &mut self.system_message,
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::RawSummary => &mut self.raw_summary,
            Field::ShortSummary => &mut self.short_summary,
            Field::Filename => &mut self.filename,
            Field::FileContent => &mut self.file_content,
            Field::FileDiff => &mut self.file_diff,
            Field::Patches => &mut self.patches,
            Field::Diff => &mut self.diff,
            Field::CommentChain => &mut self.comment_chain,
            Field::Comment => &mut self.comment,
        };
        *slot = value.into();
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_system_message(self, value: impl Into<String>) -> Self {
        self.with(Field::SystemMessage, value)
    }

    pub fn with_title(self, value: impl Into<String>) -> Self {
        self.with(Field::Title, value)
    }

    pub fn with_description(self, value: impl Into<String>) -> Self {
        self.with(Field::Description, value)
    }

    pub fn with_raw_summary(self, value: impl Into<String>) -> Self {
        self.with(Field::RawSummary, value)
    }

    pub fn with_short_summary(self, value: impl Into<String>) -> Self {
        self.with(Field::ShortSummary, value)
    }

    pub fn with_filename(self, value: impl Into<String>) -> Self {
        self.with(Field::Filename, value)
    }

    pub fn with_file_content(self, value: impl Into<String>) -> Self {
        self.with(Field::FileContent, value)
    }

    pub fn with_file_diff(self, value: impl Into<String>) -> Self {
        self.with(Field::FileDiff, value)
    }

    pub fn with_patches(self, value: impl Into<String>) -> Self {
        self.with(Field::Patches, value)
    }

    pub fn with_diff(self, value: impl Into<String>) -> Self {
        self.with(Field::Diff, value)
    }

    pub fn with_comment_chain(self, value: impl Into<String>) -> Self {
        self.with(Field::CommentChain, value)
    }

    pub fn with_comment(self, value: impl Into<String>) -> Self {
        self.with(Field::Comment, value)
    }

    /// The `(placeholder, value)` pairs in substitution order.
    pub fn substitutions(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field.placeholder(), self.get(field)))
    }

    /// Substitute placeholders in `content` with this context's values.
    ///
    /// Fields are visited in [`Field::ALL`] order. For each field with a
    /// non-empty value, the first occurrence of its placeholder is replaced.
    /// Fields with an empty value are skipped, leaving their placeholder in
    /// the output. Unknown or unmatched placeholders are left as-is.
    ///
    /// There is no escaping: a value that itself contains a placeholder may
    /// be substituted again by a later field.
    ///
    /// # Examples
    ///
    /// ```
    /// use review_inputs::prompt::TemplateContext;
    ///
    /// let ctx = TemplateContext::new()
    ///     .with_title("Add tests")
    ///     .with_comment("LGTM");
    ///
    /// let out = ctx.render("Title: $title\nComment: $comment");
    /// assert_eq!(out, "Title: Add tests\nComment: LGTM");
    /// ```
    pub fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut rendered = content.to_string();
        let mut replaced = 0usize;

        for (placeholder, value) in self.substitutions() {
            if value.is_empty() {
                trace!(placeholder, "skipping empty field");
                continue;
            }
            if let Some(pos) = rendered.find(placeholder) {
                rendered.replace_range(pos..pos + placeholder.len(), value);
                replaced += 1;
                trace!(placeholder, position = pos, "substituted placeholder");
            }
        }

        debug!(
            template_len = content.len(),
            rendered_len = rendered.len(),
            replaced,
            "rendered template"
        );
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_cover_every_field() {
        let mut ctx = TemplateContext::new();
        for field in Field::ALL {
            ctx.set(field, format!("value of {}", field));
        }
        for field in Field::ALL {
            assert_eq!(ctx.get(field), format!("value of {}", field));
        }
    }

    #[test]
    fn test_overrides_index_is_stable() {
        let mut overrides = ContextOverrides::new();
        assert!(overrides.is_empty());

        overrides.set(Field::Comment, "last");
        overrides.set(Field::SystemMessage, "first");

        assert_eq!(overrides.get(Field::Comment), Some("last"));
        assert_eq!(overrides.get(Field::SystemMessage), Some("first"));
        assert_eq!(overrides.get(Field::Title), None);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_overrides_later_set_wins() {
        let mut overrides = ContextOverrides::new();
        overrides.set(Field::Title, "one").set(Field::Title, "two");
        assert_eq!(overrides.get(Field::Title), Some("two"));
    }

    #[test]
    fn test_from_overrides_keeps_defaults() {
        let mut overrides = ContextOverrides::new();
        overrides.set(Field::Diff, "");
        overrides.set(Field::Filename, "src/lib.rs");

        let ctx = TemplateContext::from_overrides(&overrides);
        assert_eq!(ctx.diff, "");
        assert_eq!(ctx.filename, "src/lib.rs");
        assert_eq!(ctx.title, "no title provided");
        assert_eq!(ctx.comment, "no comment provided");
    }

    #[test]
    fn test_substitutions_order() {
        let ctx = TemplateContext::new();
        let tokens: Vec<_> = ctx.substitutions().map(|(token, _)| token).collect();
        let expected: Vec<_> = Field::ALL.iter().map(|f| f.placeholder()).collect();
        assert_eq!(tokens, expected);
    }
}
