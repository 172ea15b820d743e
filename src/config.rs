/// Startup configuration.
///
/// Read once from an optional TOML file, then overridden by environment
/// variables. The resulting value is passed explicitly to whatever needs it.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

pub const CONFIG_ENV: &str = "HXGLUE_CONFIG";
pub const THEME_ENV: &str = "HXGLUE_THEME";
pub const LOG_DIR_ENV: &str = "HXGLUE_LOG_DIR";

const DEFAULT_CONFIG_FILE: &str = "hxglue.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Preferred colour scheme; `None` leaves the document default.
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Directory for the log file; logs go to stderr when unset.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            log_dir: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Parse a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration for this process.
    ///
    /// An explicit `path` (or `HXGLUE_CONFIG`) must exist; the default
    /// `hxglue.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = env::var(THEME_ENV) {
            let theme: Theme = raw
                .parse()
                .with_context(|| format!("Invalid {} value", THEME_ENV))?;
            tracing::debug!("Theme overridden by {}: {}", THEME_ENV, theme);
            self.theme = Some(theme);
        }
        if let Some(dir) = env::var_os(LOG_DIR_ENV) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse_full_file() {
        let config: Config = toml::from_str(
            r#"
            theme = "dark"
            log_dir = "/var/log/hxglue"
            log_filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Some(Theme::Dark));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/hxglue")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_theme_is_case_insensitive_in_file() {
        let config: Config = toml::from_str(r#"theme = "Dark""#).unwrap();
        assert_eq!(config.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(toml::from_str::<Config>(r#"theme = "sepia""#).is_err());
    }
}
