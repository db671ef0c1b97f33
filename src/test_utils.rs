//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a plausible Zig version string
    pub fn version() -> impl Strategy<Value = String> {
        (0u32..2, 1u32..20, 0u32..10)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a supported OS name
    pub fn supported_os() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("linux".to_string()),
            Just("macos".to_string()),
            Just("windows".to_string()),
        ]
    }

    /// Generate a supported architecture name
    pub fn supported_arch() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("x86_64".to_string()),
            Just("aarch64".to_string()),
            Just("x86".to_string()),
        ]
    }
}
