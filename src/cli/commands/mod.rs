//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod ensure;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure a Zig toolchain version is available
    Ensure {
        /// Version to provision (e.g. "0.13.0"); defaults to the configured one
        version: Option<String>,

        /// Directory to install toolchains under
        #[arg(short, long, env = "ZIGFETCH_INSTALL_DIR")]
        install_dir: Option<PathBuf>,

        /// Download base URL (mirror)
        #[arg(short, long)]
        mirror: Option<String>,

        /// Fail instead of downloading when nothing suitable is installed
        #[arg(long)]
        no_download: bool,

        /// Do not create the install directory if it is missing
        #[arg(long)]
        no_create: bool,
    },

    /// Check for a system-installed Zig and report its version
    Check {
        /// Output in JSON format for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show or edit the global configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigAction,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, quiet: bool) -> Result<()> {
        match self {
            Commands::Ensure {
                version,
                install_dir,
                mirror,
                no_download,
                no_create,
            } => {
                ensure::execute(
                    version,
                    install_dir,
                    mirror,
                    no_download,
                    no_create,
                    quiet,
                )
                .await
            }
            Commands::Check { json } => check::execute(json),
            Commands::Config { action } => config::execute(action, quiet),
        }
    }
}
