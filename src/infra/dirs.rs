//! Platform-specific directory management
//!
//! Provides platform-specific paths for cache and config directories.
//! Follows the XDG Base Directory Specification on Linux and standard
//! locations on macOS.
//!
//! Environment variables can override default directories:
//! - `ZIGFETCH_CACHE_DIR` - Override cache directory
//! - `ZIGFETCH_CONFIG_DIR` - Override config directory

use std::env;
use std::path::PathBuf;

use crate::config::defaults::TOOLCHAINS_SUBDIR;

/// Environment variable names for directory overrides
pub const ENV_CACHE_DIR: &str = "ZIGFETCH_CACHE_DIR";
pub const ENV_CONFIG_DIR: &str = "ZIGFETCH_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "zigfetch";

/// Platform-specific directory provider for zigfetch
#[derive(Debug, Clone)]
pub struct ZigfetchDirs {
    cache_dir: PathBuf,
    config_dir: PathBuf,
}

impl ZigfetchDirs {
    /// Create a new `ZigfetchDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform
    /// defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: Self::resolve_cache_dir(),
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Get the cache directory path
    ///
    /// - Linux: `$XDG_CACHE_HOME/zigfetch` or `~/.cache/zigfetch`
    /// - macOS: `~/Library/Caches/zigfetch`
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/zigfetch` or `~/.config/zigfetch`
    /// - macOS: `~/Library/Application Support/zigfetch`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the toolchain install directory path
    ///
    /// Extracted toolchains live under the cache directory.
    #[must_use]
    pub fn toolchains_dir(&self) -> PathBuf {
        self.cache_dir.join(TOOLCHAINS_SUBDIR)
    }

    /// Get the global config file path
    ///
    /// Returns the path to `config.toml` in the config directory.
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Resolve cache directory from environment or platform default
    fn resolve_cache_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CACHE_DIR) {
            return PathBuf::from(path);
        }

        dirs::cache_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".cache").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".cache").join(APP_NAME))
            })
    }

    /// Resolve config directory from environment or platform default
    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for ZigfetchDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolchains_dir_is_under_cache() {
        let dirs = ZigfetchDirs {
            cache_dir: PathBuf::from("/tmp/cache"),
            config_dir: PathBuf::from("/tmp/config"),
        };
        assert_eq!(dirs.toolchains_dir(), PathBuf::from("/tmp/cache/toolchains"));
    }

    #[test]
    fn test_global_config_path() {
        let dirs = ZigfetchDirs {
            cache_dir: PathBuf::from("/tmp/cache"),
            config_dir: PathBuf::from("/tmp/config"),
        };
        assert_eq!(
            dirs.global_config_path(),
            PathBuf::from("/tmp/config/config.toml")
        );
    }
}
