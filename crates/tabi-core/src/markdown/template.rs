//! Template sets: the prose surrounding the structured part of a prompt.
//!
//! A built-in set is embedded at compile time from `templates.toml`. Callers
//! can load their own set from disk and hand it to
//! [`super::MarkdownGenerator::new`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The embedded default template set.
static BUILTIN_TEMPLATES: &str = include_str!("templates.toml");

/// Errors from loading a template set.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("template TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("template serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Prose used by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub standard: StandardTemplate,
    pub suggestion: SuggestionTemplate,
    pub footer: FooterTemplate,
}

/// Preamble of a standard-mode prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardTemplate {
    /// Depth-1 heading text.
    pub title: String,
    #[serde(default)]
    pub intro: String,
}

/// Preamble of a suggestion-mode prompt. The heading itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionTemplate {
    #[serde(default)]
    pub intro: String,
}

/// Instruction block appended to every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterTemplate {
    /// Depth-3 heading text.
    pub heading: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Extra instructions used when proactive suggestions are enabled.
    #[serde(default)]
    pub proactive: Vec<String>,
    #[serde(default)]
    pub closing: String,
}

impl TemplateSet {
    /// The embedded default set.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The file is compiled into
    /// the crate and covered by tests, so this cannot happen in a released
    /// build.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_TEMPLATES).expect("embedded templates.toml is invalid")
    }

    /// Parse a template set from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this set back to TOML, e.g. as a starting point for a
    /// custom template file.
    pub fn to_toml_string(&self) -> Result<String, TemplateError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_parses() {
        let set = TemplateSet::builtin();
        assert_eq!(set.standard.title, "旅行プランの作成依頼");
        assert_eq!(set.footer.heading, "AIへの特別指示");
        assert!(!set.footer.instructions.is_empty());
        assert!(!set.footer.proactive.is_empty());
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let set = TemplateSet::from_toml_str(
            r#"
[standard]
title = "Trip request"

[suggestion]

[footer]
heading = "Instructions"
"#,
        )
        .expect("minimal template should parse");
        assert_eq!(set.standard.intro, "");
        assert_eq!(set.suggestion.intro, "");
        assert!(set.footer.instructions.is_empty());
        assert_eq!(set.footer.closing, "");
    }

    #[test]
    fn rejects_missing_required_fields() {
        let err = TemplateSet::from_toml_str("[standard]\nintro = \"x\"\n").unwrap_err();
        assert!(matches!(err, TemplateError::Toml(_)), "got: {err}");
    }

    #[test]
    fn export_then_load_gives_same_set() {
        let set = TemplateSet::builtin();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("templates.toml");
        std::fs::write(&path, set.to_toml_string().unwrap()).unwrap();
        assert_eq!(TemplateSet::load(&path).unwrap(), set);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = TemplateSet::load(Path::new("/nonexistent/templates.toml")).unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }), "got: {err}");
    }
}
