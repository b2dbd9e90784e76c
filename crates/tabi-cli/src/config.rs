//! Configuration file management for tabi.
//!
//! Provides a TOML-based config file at `~/.config/tabi/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use tabi_core::markdown::TemplateSet;
use tabi_core::plan::GeneralInfo;

/// Env var naming a custom template file.
pub const TEMPLATES_ENV: &str = "TABI_TEMPLATES";

/// Env var toggling proactive suggestions (`1`/`true`/`yes` or `0`/`false`/`no`).
pub const PROACTIVE_ENV: &str = "TABI_PROACTIVE";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub defaults: DefaultsSection,
    pub output: OutputSection,
}

/// Values used for general fields a plan leaves empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    pub departure: String,
    pub members: String,
    pub theme: String,
    pub priority: String,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            departure: "札幌".to_string(),
            members: "50代、1人、体力に少し不安".to_string(),
            theme: "美術館に行く".to_string(),
            priority: "節約志向".to_string(),
        }
    }
}

impl DefaultsSection {
    /// Fill every empty field of `general` from these defaults.
    pub fn apply(&self, general: &mut GeneralInfo) {
        for (field, default) in [
            (&mut general.departure, &self.departure),
            (&mut general.members, &self.members),
            (&mut general.theme, &self.theme),
            (&mut general.priority, &self.priority),
        ] {
            if field.trim().is_empty() {
                field.clone_from(default);
            }
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub proactive_suggestions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the tabi config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/tabi` or `~/.config/tabi`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("tabi");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tabi")
}

/// Return the path to the tabi config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

fn parse_bool_env(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("{name} must be a boolean (true/false), got {other:?}"),
    }
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct TabiConfig {
    pub defaults: DefaultsSection,
    pub proactive_suggestions: bool,
    /// Custom template file; `None` means the built-in set.
    pub templates: Option<PathBuf>,
}

impl TabiConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Templates: `cli_templates` > `TABI_TEMPLATES` env > `output.templates` > built-in
    /// - Proactive: `--proactive` > `TABI_PROACTIVE` env > `output.proactive_suggestions` > off
    /// - Defaults: `[defaults]` from the config file > built-in defaults
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn resolve(cli_templates: Option<&Path>, cli_proactive: bool) -> Result<Self> {
        let file_config = if config_path().exists() {
            load_config()?
        } else {
            ConfigFile::default()
        };

        let templates = if let Some(path) = cli_templates {
            Some(path.to_path_buf())
        } else if let Ok(path) = std::env::var(TEMPLATES_ENV) {
            Some(PathBuf::from(path))
        } else {
            file_config.output.templates
        };

        let proactive_suggestions = if cli_proactive {
            true
        } else if let Ok(value) = std::env::var(PROACTIVE_ENV) {
            parse_bool_env(PROACTIVE_ENV, &value)?
        } else {
            file_config.output.proactive_suggestions
        };

        Ok(Self {
            defaults: file_config.defaults,
            proactive_suggestions,
            templates,
        })
    }

    /// Load the resolved template set.
    pub fn template_set(&self) -> Result<TemplateSet> {
        match &self.templates {
            Some(path) => TemplateSet::load(path)
                .with_context(|| format!("failed to load templates from {}", path.display())),
            None => Ok(TemplateSet::builtin()),
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
