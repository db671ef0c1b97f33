//! Toolchain download URLs

/// Zig nightly/release tarball base URL
///
/// Appending an archive file name to this base yields a fetchable resource,
/// e.g. `https://ziglang.org/builds/zig-linux-x86_64-0.13.0.tar.xz`.
pub const ZIG_DOWNLOAD_BASE: &str = "https://ziglang.org/builds/";
