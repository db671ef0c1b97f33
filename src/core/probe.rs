//! System binary probing
//!
//! Asks the system-installed `zig` for its version. A failed probe (binary
//! absent, not executable, non-zero exit) is an expected outcome, not an
//! error: it is reported as [`ProbeResult::Unavailable`] and the caller
//! branches on the value.

use crate::config::defaults;

/// Outcome of probing the system-installed binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// Binary ran successfully; carries its trimmed version output
    Found(String),
    /// Binary absent, unreachable, or exited with failure
    Unavailable,
}

impl ProbeResult {
    /// Whether the probed version matches the requested one exactly
    pub fn matches(&self, version: &str) -> bool {
        match self {
            ProbeResult::Found(v) => v == version,
            ProbeResult::Unavailable => false,
        }
    }
}

/// Source of system binary version information
///
/// Abstracted as a trait so tests can supply arbitrary probe outcomes
/// without a real binary on PATH.
pub trait VersionProbe {
    /// Probe the system binary and report its version
    fn probe(&self) -> ProbeResult;
}

/// Probe that runs `zig version` as a blocking subprocess
#[derive(Debug, Default, Clone)]
pub struct SystemProbe;

impl VersionProbe for SystemProbe {
    fn probe(&self) -> ProbeResult {
        // Resolving through PATH first avoids spawning when the binary is
        // plainly absent.
        if which::which(defaults::TOOL_NAME).is_err() {
            return ProbeResult::Unavailable;
        }

        let output = std::process::Command::new(defaults::TOOL_NAME)
            .arg(defaults::VERSION_SUBCOMMAND)
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
                tracing::debug!(version = %version, "probed system zig");
                ProbeResult::Found(version)
            }
            _ => ProbeResult::Unavailable,
        }
    }
}

/// Extract a version string from `--version`-style command output
///
/// Used for display purposes in the `check` command; resolution itself
/// compares the raw trimmed probe output.
pub fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:-[\w.+]+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
