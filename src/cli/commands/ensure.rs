//! CLI command for `zigfetch ensure`
//!
//! Resolves the requested toolchain version and prints the command to run.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::output::print_success;
use crate::core::global_config::GlobalConfig;
use crate::core::probe::SystemProbe;
use crate::core::resolver::{ResolutionRequest, ResolvedToolchain, ToolchainResolver};
use crate::core::platform::Host;
use crate::infra::dirs::ZigfetchDirs;
use crate::infra::download::ArchiveFetcher;

/// Execute the ensure command
pub async fn execute(
    version: Option<String>,
    install_dir: Option<PathBuf>,
    mirror: Option<String>,
    no_download: bool,
    no_create: bool,
    quiet: bool,
) -> Result<()> {
    let dirs = ZigfetchDirs::new();
    let config = GlobalConfig::load(&dirs)?;

    let Some(version) = version.or_else(|| config.toolchain.version.clone()) else {
        bail!("No version given and none configured; run `zigfetch ensure <version>`");
    };
    let download_url = mirror.unwrap_or_else(|| config.download_base());
    let install_path = install_dir.unwrap_or_else(|| config.install_dir(&dirs));

    let quiet = quiet || config.output.quiet.unwrap_or(false);
    let resolver = ToolchainResolver::with_parts(
        Host::detect(),
        SystemProbe,
        ArchiveFetcher::with_progress(!quiet),
    );

    let mut request = ResolutionRequest::new(version.clone(), download_url, install_path);
    request.download_if_absent = !no_download;
    request.create_path = !no_create;

    let resolved = resolver.resolve(&request).await?;

    if !quiet {
        match &resolved {
            ResolvedToolchain::SystemPath => {
                print_success(&format!("zig {version} is already installed on PATH"));
            }
            ResolvedToolchain::Installed(path) => {
                print_success(&format!("zig {version} available at {}", path.display()));
            }
        }
    }

    // The command line callers should invoke, on stdout by itself
    println!("{}", resolved.command());

    Ok(())
}
