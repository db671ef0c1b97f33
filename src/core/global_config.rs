//! Global configuration management
//!
//! Reads and manages global settings from `config.toml` in the config
//! directory. Settings cover the default toolchain version, the install
//! directory, a mirror base URL, and output preferences.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GlobalConfigError;
use crate::infra::dirs::ZigfetchDirs;

/// Global configuration for zigfetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Toolchain settings
    #[serde(default)]
    pub toolchain: ToolchainConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Toolchain configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Default version for `ensure` when none is given on the command line
    pub version: Option<String>,

    /// Directory toolchains are installed under
    pub install_dir: Option<PathBuf>,

    /// Custom download base URL (mirror)
    pub mirror: Option<String>,
}

/// Output preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable quiet mode
    pub quiet: Option<bool>,

    /// Enable JSON output
    pub json: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// A missing config file yields the default configuration; an existing
    /// but invalid file is an error.
    pub fn load(dirs: &ZigfetchDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save global configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<(), GlobalConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| GlobalConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GlobalConfigError::WriteError {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;
        }

        fs::write(path, content).map_err(|e| GlobalConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Set a value by its dotted key, as given on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), GlobalConfigError> {
        match key {
            "toolchain.version" => self.toolchain.version = Some(value.to_string()),
            "toolchain.install_dir" => self.toolchain.install_dir = Some(PathBuf::from(value)),
            "toolchain.mirror" => self.toolchain.mirror = Some(value.to_string()),
            "output.quiet" => self.output.quiet = Some(parse_bool(key, value)?),
            "output.json" => self.output.json = Some(parse_bool(key, value)?),
            _ => {
                return Err(GlobalConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Clear a value by its dotted key, reverting it to the default
    pub fn unset(&mut self, key: &str) -> Result<(), GlobalConfigError> {
        match key {
            "toolchain.version" => self.toolchain.version = None,
            "toolchain.install_dir" => self.toolchain.install_dir = None,
            "toolchain.mirror" => self.toolchain.mirror = None,
            "output.quiet" => self.output.quiet = None,
            "output.json" => self.output.json = None,
            _ => {
                return Err(GlobalConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// The download base URL to use, falling back to the official one
    pub fn download_base(&self) -> String {
        self.toolchain
            .mirror
            .clone()
            .unwrap_or_else(|| crate::config::urls::ZIG_DOWNLOAD_BASE.to_string())
    }

    /// The install directory to use, falling back to the cache directory
    pub fn install_dir(&self, dirs: &ZigfetchDirs) -> PathBuf {
        self.toolchain
            .install_dir
            .clone()
            .unwrap_or_else(|| dirs.toolchains_dir())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, GlobalConfigError> {
    value.parse().map_err(|_| GlobalConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = GlobalConfig::load_from_path(&temp.path().join("config.toml")).unwrap();
        assert!(config.toolchain.version.is_none());
        assert!(config.toolchain.mirror.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[toolchain]
version = "0.13.0"
install_dir = "/opt/zig"
mirror = "https://mirror.example.com/zig/"

[output]
quiet = true
"#,
        )
        .unwrap();

        let config = GlobalConfig::load_from_path(&path).unwrap();
        assert_eq!(config.toolchain.version.as_deref(), Some("0.13.0"));
        assert_eq!(
            config.toolchain.install_dir,
            Some(PathBuf::from("/opt/zig"))
        );
        assert_eq!(config.download_base(), "https://mirror.example.com/zig/");
        assert_eq!(config.output.quiet, Some(true));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "toolchain = not toml").unwrap();

        let err = GlobalConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, GlobalConfigError::ParseError { .. }));
    }

    #[test]
    fn test_save_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = GlobalConfig::default();
        config.toolchain.version = Some("0.14.0".to_string());
        config.save_to_path(&path).unwrap();

        let loaded = GlobalConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.toolchain.version.as_deref(), Some("0.14.0"));
    }

    #[test]
    fn test_set_key_persists_and_unset_reverts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let mut config = GlobalConfig::default();
        config.set("toolchain.version", "0.13.0").unwrap();
        config.set("output.json", "true").unwrap();
        config.save_to_path(&path).unwrap();

        let mut loaded = GlobalConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.toolchain.version.as_deref(), Some("0.13.0"));
        assert_eq!(loaded.output.json, Some(true));

        loaded.unset("output.json").unwrap();
        loaded.save_to_path(&path).unwrap();

        let reloaded = GlobalConfig::load_from_path(&path).unwrap();
        assert_eq!(reloaded.output.json, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = GlobalConfig::default();
        let err = config.set("toolchain.bogus", "x").unwrap_err();
        assert!(matches!(err, GlobalConfigError::UnknownKey { key } if key == "toolchain.bogus"));

        let err = config.unset("output.bogus").unwrap_err();
        assert!(matches!(err, GlobalConfigError::UnknownKey { .. }));
    }

    #[test]
    fn test_non_boolean_output_value_is_rejected() {
        let mut config = GlobalConfig::default();
        let err = config.set("output.json", "yes").unwrap_err();
        assert!(matches!(err, GlobalConfigError::InvalidValue { .. }));
        assert_eq!(config.output.json, None);
    }

    #[test]
    fn test_default_download_base() {
        let config = GlobalConfig::default();
        assert_eq!(config.download_base(), "https://ziglang.org/builds/");
    }
}
