//! Toolchain resolution
//!
//! Given a desired version, a download base URL, and an install directory,
//! produce a usable `zig` command or fail. Control flow is linear: resolve
//! naming, check the local cache, check the system binary, download and
//! extract, return the path.
//!
//! The host platform and the version probe are injected so tests can drive
//! every branch without depending on the machine they run on.

use std::path::PathBuf;

use crate::config::defaults;
use crate::core::platform::{
    alias_for_architecture, alias_for_platform, ArchitectureAlias, Host, PlatformAlias,
};
use crate::core::probe::VersionProbe;
use crate::error::ToolchainError;
use crate::infra::download::ArchiveFetcher;
use crate::infra::filesystem;

/// A single resolution request
///
/// Caller-supplied and never mutated; every call re-resolves from scratch.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// Exact version string to provision (e.g. "0.13.0")
    pub version: String,
    /// Base URL such that appending an archive name yields a resource
    pub download_url: String,
    /// Directory under which toolchains are extracted
    pub install_path: PathBuf,
    /// Download and extract when no cache and no matching system binary
    pub download_if_absent: bool,
    /// Create `install_path` (recursively) before downloading
    pub create_path: bool,
}

impl ResolutionRequest {
    /// Create a request with both flags enabled
    pub fn new(
        version: impl Into<String>,
        download_url: impl Into<String>,
        install_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            version: version.into(),
            download_url: download_url.into(),
            install_path: install_path.into(),
            download_if_absent: true,
            create_path: true,
        }
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedToolchain {
    /// Path to an executable inside a locally extracted install
    Installed(PathBuf),
    /// The tool is available on PATH under its bare name
    SystemPath,
}

impl ResolvedToolchain {
    /// The command to invoke: a filesystem path or the bare tool name
    pub fn command(&self) -> String {
        match self {
            ResolvedToolchain::Installed(path) => path.display().to_string(),
            ResolvedToolchain::SystemPath => defaults::TOOL_NAME.to_string(),
        }
    }

    /// Whether resolution picked the PATH-installed binary
    pub fn is_system(&self) -> bool {
        matches!(self, ResolvedToolchain::SystemPath)
    }
}

/// Directory name for an extracted toolchain
///
/// A pure function of (platform alias, architecture alias, version), so a
/// previously extracted install is found by later calls.
pub fn toolchain_dir_name(
    platform: &PlatformAlias,
    arch: &ArchitectureAlias,
    version: &str,
) -> String {
    format!(
        "{}-{}-{}-{version}",
        defaults::TOOL_NAME,
        platform.platform,
        arch.build_alias
    )
}

/// Resolves a requested toolchain version to a usable command
#[derive(Debug)]
pub struct ToolchainResolver<P: VersionProbe> {
    host: Host,
    probe: P,
    fetcher: ArchiveFetcher,
}

impl<P: VersionProbe> ToolchainResolver<P> {
    /// Create a resolver from explicit collaborators
    pub fn with_parts(host: Host, probe: P, fetcher: ArchiveFetcher) -> Self {
        Self {
            host,
            probe,
            fetcher,
        }
    }

    /// Resolve the requested version to a usable `zig` command
    ///
    /// Order is strict: platform naming, local cache, system probe, then
    /// download and extract. Probe failure is a normal branch; everything
    /// else aborts the resolution and propagates unmodified.
    pub async fn resolve(
        &self,
        request: &ResolutionRequest,
    ) -> Result<ResolvedToolchain, ToolchainError> {
        let platform = alias_for_platform(&self.host.os)?;
        let arch = alias_for_architecture(&self.host.arch)?;

        let dir_name = toolchain_dir_name(&platform, &arch, &request.version);
        let candidate_dir = request.install_path.join(&dir_name);
        let candidate_exe = candidate_dir.join(format!(
            "{}{}",
            defaults::TOOL_NAME,
            platform.executable_ext
        ));

        // Use the locally-installed version. Presence of the directory is
        // trusted; no content verification.
        if candidate_dir.is_dir() {
            tracing::debug!(path = %candidate_exe.display(), "cache hit");
            return Ok(ResolvedToolchain::Installed(candidate_exe));
        }

        // Try the system-installed binary next.
        if self.probe.probe().matches(&request.version) {
            tracing::debug!(version = %request.version, "system zig matches");
            return Ok(ResolvedToolchain::SystemPath);
        }

        if !request.download_if_absent {
            return Err(ToolchainError::NotFound {
                version: request.version.clone(),
            });
        }

        if request.create_path {
            filesystem::create_dir_all(&request.install_path)?;
        }

        let archive_name = format!("{dir_name}{}", platform.compress_ext);
        let archive_url = format!("{}{archive_name}", request.download_url);

        let (_metadata, payload) = self
            .fetcher
            .download_with_progress(&archive_url, defaults::DOWNLOAD_LABEL)
            .await?;

        self.fetcher.extract(
            &payload,
            &archive_name,
            &request.install_path,
            &dir_name,
            defaults::EXTRACT_LABEL,
        )?;

        Ok(ResolvedToolchain::Installed(candidate_exe))
    }
}
