//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::host::TeapotDataSource;
use crate::layout::{EdgeInsets, LayoutConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TEAPOT_LIST_CONFIG";

/// Environment variable overriding the vertical item spacing.
pub const SPACING_ENV_VAR: &str = "TEAPOT_LIST_SPACING";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// The raw value found.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/teapot-list/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Gap after every item, in rows.
    #[serde(default)]
    pub vertical_spacing: Option<f64>,

    /// Placeholder height for unmeasured items, in rows.
    #[serde(default)]
    pub estimated_item_height: Option<f64>,

    /// Content insets around the list.
    #[serde(default)]
    pub insets: Option<InsetsSection>,

    /// Number of sections in the demo data.
    #[serde(default)]
    pub sections: Option<usize>,

    /// Items in every section of the demo data.
    #[serde(default)]
    pub items_per_section: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// `[insets]` table. Missing sides keep their defaults.
///
/// ```toml
/// [insets]
/// top = 1
/// left = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InsetsSection {
    /// Rows above the first item.
    #[serde(default)]
    pub top: Option<f64>,
    /// Columns left of every item.
    #[serde(default)]
    pub left: Option<f64>,
    /// Rows below the last item.
    #[serde(default)]
    pub bottom: Option<f64>,
    /// Columns right of every item.
    #[serde(default)]
    pub right: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Gap after every item.
    pub vertical_spacing: f64,
    /// Placeholder height for unmeasured items.
    pub estimated_item_height: f64,
    /// Content insets.
    pub insets: EdgeInsets,
    /// Number of sections.
    pub sections: usize,
    /// Items per section.
    pub items_per_section: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            vertical_spacing: 1.0,
            estimated_item_height: 1.0,
            insets: EdgeInsets::new(1.0, 2.0, 1.0, 2.0),
            sections: TeapotDataSource::DEFAULT_SECTIONS,
            items_per_section: TeapotDataSource::DEFAULT_ITEMS_PER_SECTION,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Layout parameters for the engine.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(self.vertical_spacing, self.insets, self.estimated_item_height)
    }

    /// Demo data source sized by this config.
    pub fn data_source(&self) -> TeapotDataSource {
        TeapotDataSource::new(self.sections, self.items_per_section)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/teapot-list/teapot-list.log` on Linux,
/// or the platform state directory elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("teapot-list").join("teapot-list.log")
    } else {
        PathBuf::from("teapot-list.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/teapot-list/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if the config directory is unknown.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("teapot-list").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TEAPOT_LIST_CONFIG` environment variable
/// 3. Default path `~/.config/teapot-list/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let insets = config.insets.unwrap_or_default();

    ResolvedConfig {
        vertical_spacing: config.vertical_spacing.unwrap_or(defaults.vertical_spacing),
        estimated_item_height: config
            .estimated_item_height
            .unwrap_or(defaults.estimated_item_height),
        insets: EdgeInsets::new(
            insets.top.unwrap_or(defaults.insets.top),
            insets.left.unwrap_or(defaults.insets.left),
            insets.bottom.unwrap_or(defaults.insets.bottom),
            insets.right.unwrap_or(defaults.insets.right),
        ),
        sections: config.sections.unwrap_or(defaults.sections),
        items_per_section: config.items_per_section.unwrap_or(defaults.items_per_section),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TEAPOT_LIST_SPACING`: Override vertical spacing
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnv` if a variable is set but unparsable.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(SPACING_ENV_VAR) {
        config.vertical_spacing = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or(ConfigError::InvalidEnv {
                var: SPACING_ENV_VAR,
                value: raw,
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    sections_override: Option<usize>,
    items_per_section_override: Option<usize>,
    spacing_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(sections) = sections_override {
        config.sections = sections;
    }

    if let Some(items) = items_per_section_override {
        config.items_per_section = items;
    }

    if let Some(spacing) = spacing_override {
        config.vertical_spacing = spacing;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
