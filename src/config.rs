//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, a TOML file, and
//! command-line flags. File loading needs the `config` feature (on by default).
//!
//! ```toml
//! refresh_interval_ms = 1000
//! theme = "high-contrast"
//! show_date = true
//! plain = false
//! ```

use crate::display::ThemeName;
use crate::error::{ClockError, Result};
use crate::refresher::DEFAULT_PERIOD;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct ClockConfig {
    pub refresh_interval_ms: u64,
    pub theme: ThemeName,
    pub show_date: bool,
    /// Print lines instead of drawing a full-screen face.
    pub plain: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_PERIOD.as_millis() as u64,
            theme: ThemeName::Default,
            show_date: true,
            plain: false,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub refresh_interval_ms: Option<u64>,
    pub theme: Option<ThemeName>,
    pub plain: bool,
    pub no_date: bool,
}

impl ClockConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_ms == 0 {
            return Err(ClockError::config(
                "refresh_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ms) = overrides.refresh_interval_ms {
            self.refresh_interval_ms = ms;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.plain {
            self.plain = true;
        }
        if overrides.no_date {
            self.show_date = false;
        }
    }

    /// `<config dir>/rclock/config.toml`, when the platform has a config dir.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rclock").join("config.toml"))
    }

    #[cfg(not(feature = "config"))]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ClockError::config(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "config")]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClockError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Resolve the file layer.
    ///
    /// An explicit path must exist. Without one, the default location is used only if a
    /// file is present there.
    #[cfg(feature = "config")]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    #[cfg(not(feature = "config"))]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if explicit.is_some() {
            return Err(ClockError::config(
                "rclock was built without the `config` feature",
            ));
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClockConfig::default();
        assert_eq!(config.period(), Duration::from_millis(1000));
        assert_eq!(config.theme, ThemeName::Default);
        assert!(config.show_date);
        assert!(!config.plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = ClockConfig {
            refresh_interval_ms: 500,
            theme: ThemeName::Monochrome,
            show_date: true,
            plain: false,
        };
        config.apply_overrides(&ConfigOverrides {
            refresh_interval_ms: Some(250),
            theme: Some(ThemeName::HighContrast),
            plain: true,
            no_date: true,
        });

        assert_eq!(config.refresh_interval_ms, 250);
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert!(config.plain);
        assert!(!config.show_date);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let mut config = ClockConfig {
            refresh_interval_ms: 2000,
            theme: ThemeName::Monochrome,
            show_date: false,
            plain: true,
        };
        let before = config.clone();
        config.apply_overrides(&ConfigOverrides::default());
        assert_eq!(config, before);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = ClockConfig {
            refresh_interval_ms: 0,
            ..ClockConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ClockError::ConfigError { .. })
        ));
    }

    #[cfg(feature = "config")]
    mod file {
        use super::*;
        use std::io::Write;

        #[test]
        fn test_partial_toml_uses_defaults() {
            let config = ClockConfig::from_toml_str("theme = \"high-contrast\"\n").unwrap();
            assert_eq!(config.theme, ThemeName::HighContrast);
            assert_eq!(config.refresh_interval_ms, 1000);
            assert!(config.show_date);
        }

        #[test]
        fn test_invalid_toml_is_config_error() {
            assert!(matches!(
                ClockConfig::from_toml_str("refresh_interval_ms = \"soon\""),
                Err(ClockError::ConfigError { .. })
            ));
            assert!(matches!(
                ClockConfig::from_toml_str("colour = \"red\""),
                Err(ClockError::ConfigError { .. })
            ));
            assert!(matches!(
                ClockConfig::from_toml_str("refresh_interval_ms = 0"),
                Err(ClockError::ConfigError { .. })
            ));
        }

        #[test]
        fn test_load_explicit_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "refresh_interval_ms = 250\nplain = true\nshow_date = false").unwrap();

            let config = ClockConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.period(), Duration::from_millis(250));
            assert!(config.plain);
            assert!(!config.show_date);
        }

        #[test]
        fn test_load_missing_explicit_file_fails() {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("nope.toml");
            assert!(matches!(
                ClockConfig::load(Some(&missing)),
                Err(ClockError::ConfigError { .. })
            ));
        }
    }
}
