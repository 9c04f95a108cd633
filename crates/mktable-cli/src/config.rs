use crate::args::{InputArgs, StyleArgs};
use anyhow::{Context, Result, bail};
use mktable_core::TableStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path
/// 2. MKTABLE_CONFIG environment variable
/// 3. `mktable/config.toml` in the user config directory
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(env_path) = std::env::var_os("MKTABLE_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|dir| dir.join("mktable").join("config.toml"))
}

/// Tokens used when rows are typed or read as delimited lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub delimiter: String,
    pub empty_token: String,
    pub exit_token: String,
}

impl InputConfig {
    /// An empty delimiter cannot split a line, and an empty exit token would
    /// end input at the first empty cell.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            bail!("Input delimiter must not be empty");
        }
        if self.exit_token.is_empty() {
            bail!("Input exit token must not be empty");
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: ";".to_string(),
            empty_token: "@e".to_string(),
            exit_token: "@x".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub style: TableStyle,
    pub input: InputConfig,
}

impl Config {
    /// Loads the file at the resolved path, or defaults when there is none.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config
            .input
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Command-line flags win over file values.
    pub fn apply_overrides(&mut self, style: &StyleArgs, input: &InputArgs) -> Result<()> {
        if let Some(vertical) = style.vertical {
            self.style.vertical = vertical;
        }
        if let Some(horizontal) = style.horizontal {
            self.style.horizontal = horizontal;
        }
        if let Some(junction) = style.junction {
            self.style.junction = junction;
        }
        if let Some(empty) = &style.empty {
            self.style.empty = empty.clone();
        }
        if let Some(delimiter) = &input.delimiter {
            self.input.delimiter = delimiter.clone();
        }
        if let Some(token) = &input.empty_token {
            self.input.empty_token = token.clone();
        }
        if let Some(token) = &input.exit_token {
            self.input.exit_token = token.clone();
        }
        self.input.validate()
    }
}
