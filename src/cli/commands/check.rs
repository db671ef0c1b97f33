//! CLI command for `zigfetch check`
//!
//! Probes the system-installed Zig and reports its version.

use anyhow::Result;

use crate::cli::output::{print_info, print_success};
use crate::core::global_config::GlobalConfig;
use crate::core::probe::{extract_version, ProbeResult, SystemProbe, VersionProbe};
use crate::infra::dirs::ZigfetchDirs;

/// Execute the check command
pub fn execute(json: bool) -> Result<()> {
    let config = GlobalConfig::load(&ZigfetchDirs::new())?;
    let json = json || config.output.json.unwrap_or(false);

    let result = SystemProbe.probe();

    if json {
        let payload = match &result {
            ProbeResult::Found(raw) => serde_json::json!({
                "found": true,
                "version": extract_version(raw),
                "raw": raw,
            }),
            ProbeResult::Unavailable => serde_json::json!({ "found": false }),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match result {
        ProbeResult::Found(raw) => {
            let version = extract_version(&raw).unwrap_or(raw);
            print_success(&format!("zig {version} found on PATH"));
        }
        ProbeResult::Unavailable => {
            print_info("no zig installation found on PATH");
        }
    }

    Ok(())
}
