//! Context files for review-inputs.
//!
//! A context file supplies the field values of a [`TemplateContext`] as YAML
//! or JSON, keyed by snake_case field name:
//!
//! ```yaml
//! title: Add retry to fetch
//! filename: src/net/fetch.rs
//! file_diff: |
//!   @@ -1,3 +1,4 @@
//!   +use std::time::Duration;
//! ```
//!
//! Missing keys and `null` values take their defaults, and unknown keys are
//! ignored for forward compatibility. Field contents are not validated.

use crate::error::{InputsError, Result};
use crate::prompt::TemplateContext;
use std::path::Path;
use tracing::debug;

/// Serialization format of a context file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFormat {
    /// YAML (also accepts JSON documents).
    Yaml,
    /// JSON.
    Json,
}

impl ContextFormat {
    /// Pick the format from a file extension. Unknown extensions use YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ContextFormat::Json,
            _ => ContextFormat::Yaml,
        }
    }
}

impl TemplateContext {
    /// Load a context from a YAML or JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(TemplateContext)` - The loaded context, defaults filled in
    /// * `Err(InputsError::UserError)` - The file could not be read
    /// * `Err(InputsError::ParseError)` - The file is not valid YAML/JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            InputsError::UserError(format!(
                "failed to read context file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let format = ContextFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = content.len(), "loading context file");

        let parsed = match format {
            ContextFormat::Yaml => Self::from_yaml(&content),
            ContextFormat::Json => Self::from_json(&content),
        };

        parsed.map_err(|e| match e {
            InputsError::ParseError(msg) => {
                InputsError::ParseError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a context from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| InputsError::ParseError(format!("failed to parse context YAML: {}", e)))
    }

    /// Parse a context from a JSON string. An empty document yields defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(json)
            .map_err(|e| InputsError::ParseError(format!("failed to parse context JSON: {}", e)))
    }

    /// Serialize the context to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            InputsError::ParseError(format!("failed to serialize context to YAML: {}", e))
        })
    }
}
