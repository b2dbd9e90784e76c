//! Plan files: a [`TripPlan`] stored as TOML or JSON.
//!
//! The format is chosen from the file extension. Both formats use the same
//! camelCase field names, so a plan exported from a browser form as JSON can
//! be edited as TOML and vice versa.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use super::model::TripPlan;

/// Errors from reading or writing plan files.
#[derive(Debug, Error)]
pub enum PlanFileError {
    #[error("failed to read plan file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported plan file extension for {0} (expected .toml or .json)")]
    UnsupportedExtension(String),
}

/// On-disk plan formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Toml,
    Json,
}

impl PlanFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PlanFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(PlanFileError::UnsupportedExtension(
                path.display().to_string(),
            )),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parse a plan from a string in the given format.
pub fn parse_plan_str(content: &str, format: PlanFormat) -> Result<TripPlan, PlanFileError> {
    let plan = match format {
        PlanFormat::Toml => toml::from_str(content)?,
        PlanFormat::Json => serde_json::from_str(content)?,
    };
    Ok(plan)
}

/// Read a plan file, choosing the format from its extension.
pub fn load_plan(path: &Path) -> Result<TripPlan, PlanFileError> {
    let format = PlanFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| PlanFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_plan_str(&content, format)
}

/// Serialize a plan (pretty-printed).
pub fn render_plan(plan: &TripPlan, format: PlanFormat) -> Result<String, PlanFileError> {
    let mut out = match format {
        PlanFormat::Toml => toml::to_string_pretty(plan)?,
        PlanFormat::Json => serde_json::to_string_pretty(plan)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
