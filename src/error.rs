//! Error types for zigfetch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for '{url}'")]
    HttpStatus { url: String, status: u16 },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Archive suffix is not one of the known formats
    #[error("Unsupported archive format: '{name}'")]
    UnsupportedFormat { name: String },

    /// Decompression of the payload failed
    #[error("Failed to decompress '{name}': {error}")]
    Decompress { name: String, error: String },

    /// Unpacking the decompressed archive failed
    #[error("Failed to unpack '{name}': {error}")]
    Unpack { name: String, error: String },

    /// Archive did not contain a root directory to rename
    #[error("Archive '{name}' has no root directory")]
    MissingRoot { name: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },
}

/// Global configuration errors
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Failed to write config file
    #[error("Failed to write config file '{path}': {error}")]
    WriteError { path: String, error: String },

    /// Key does not name a known setting
    #[error("Unknown configuration key: '{key}'")]
    UnknownKey { key: String },

    /// Value cannot be parsed for the given key
    #[error("Invalid value '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Toolchain resolution errors
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// Current OS or machine architecture has no known alias mapping
    #[error("Unsupported platform: '{name}'")]
    UnsupportedPlatform { name: String },

    /// No local cache, no matching system binary, and downloads disabled
    #[error("Could not find a zig {version} installation on the system")]
    NotFound { version: String },

    /// Download error
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
