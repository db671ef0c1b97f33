//! CLI command for `zigfetch config`
//!
//! Shows and edits the global `config.toml`.

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::print_success;
use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::ZigfetchDirs;

/// Configuration operations
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,

    /// Set a configuration value (e.g. `toolchain.version 0.13.0`)
    Set {
        /// Dotted key to set
        key: String,

        /// Value to store
        value: String,
    },

    /// Remove a configuration value, reverting it to the default
    Unset {
        /// Dotted key to clear
        key: String,
    },
}

/// Execute the config command
pub fn execute(action: ConfigAction, quiet: bool) -> Result<()> {
    let dirs = ZigfetchDirs::new();
    let path = dirs.global_config_path();
    let mut config = GlobalConfig::load_from_path(&path)?;

    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save_to_path(&path)?;
            if !quiet {
                print_success(&format!("{key} = {value}"));
            }
        }
        ConfigAction::Unset { key } => {
            config.unset(&key)?;
            config.save_to_path(&path)?;
            if !quiet {
                print_success(&format!("removed {key}"));
            }
        }
    }

    Ok(())
}
