//! Default configuration values

/// Name of the provisioned tool, also the bare PATH command
pub const TOOL_NAME: &str = "zig";

/// Subcommand used to probe an installed binary's version
pub const VERSION_SUBCOMMAND: &str = "version";

/// Subdirectory of the cache directory holding extracted toolchains
pub const TOOLCHAINS_SUBDIR: &str = "toolchains";

/// Progress label shown while downloading an archive
pub const DOWNLOAD_LABEL: &str = "Downloading zig compiler";

/// Progress label shown while extracting an archive
pub const EXTRACT_LABEL: &str = "Decompressing";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
