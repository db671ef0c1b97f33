//! Archive extraction
//!
//! Unpacks downloaded toolchain archives. Zig ships `.tar.xz` archives for
//! Linux and macOS and `.zip` for Windows; the format is chosen from the
//! archive file name. The archive's root directory is renamed to the name
//! the resolver expects, so later calls find the install by path alone.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::ExtractionError;

/// Extract `payload` into `dest_dir`, naming the extracted root `extracted_name`
pub fn extract_archive(
    payload: &[u8],
    archive_name: &str,
    dest_dir: &Path,
    extracted_name: &str,
) -> Result<(), ExtractionError> {
    // Unpack into a staging directory first so a half-written install is
    // never mistaken for a cache hit.
    // Staging sits one level under dest_dir; a missing dest_dir is the
    // caller's problem and surfaces here as an IO error.
    let staging = dest_dir.join(format!(".{extracted_name}.partial"));
    remove_path(&staging)?;
    std::fs::create_dir(&staging).map_err(|e| ExtractionError::IoError {
        path: staging.clone(),
        error: e.to_string(),
    })?;

    let unpack_result = if archive_name.ends_with(".tar.xz") {
        unpack_tar_xz(payload, archive_name, &staging)
    } else if archive_name.ends_with(".zip") {
        unpack_zip(payload, archive_name, &staging)
    } else {
        Err(ExtractionError::UnsupportedFormat {
            name: archive_name.to_string(),
        })
    };

    if let Err(e) = unpack_result {
        // A cleanup failure must not shadow the unpack error.
        if let Err(cleanup) = remove_path(&staging) {
            tracing::warn!(path = %staging.display(), error = %cleanup, "leaving staging directory behind");
        }
        return Err(e);
    }

    let root = archive_root(&staging, archive_name)?;
    let target = dest_dir.join(extracted_name);
    remove_path(&target)?;
    std::fs::rename(&root, &target).map_err(|e| ExtractionError::IoError {
        path: target.clone(),
        error: e.to_string(),
    })?;
    remove_path(&staging)?;

    tracing::debug!(path = %target.display(), "extracted toolchain");

    Ok(())
}

fn unpack_tar_xz(
    payload: &[u8],
    archive_name: &str,
    staging: &Path,
) -> Result<(), ExtractionError> {
    let decoder = xz2::read::XzDecoder::new(payload);
    let mut archive = tar::Archive::new(decoder);
    archive.unpack(staging).map_err(|e| ExtractionError::Unpack {
        name: archive_name.to_string(),
        error: e.to_string(),
    })
}

fn unpack_zip(payload: &[u8], archive_name: &str, staging: &Path) -> Result<(), ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(payload)).map_err(|e| ExtractionError::Decompress {
            name: archive_name.to_string(),
            error: e.to_string(),
        })?;
    archive.extract(staging).map_err(|e| ExtractionError::Unpack {
        name: archive_name.to_string(),
        error: e.to_string(),
    })
}

/// Locate the single root directory an archive unpacked to
fn archive_root(staging: &Path, archive_name: &str) -> Result<PathBuf, ExtractionError> {
    let entries = std::fs::read_dir(staging).map_err(|e| ExtractionError::IoError {
        path: staging.to_path_buf(),
        error: e.to_string(),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ExtractionError::IoError {
            path: staging.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.path().is_dir() {
            return Ok(entry.path());
        }
    }

    Err(ExtractionError::MissingRoot {
        name: archive_name.to_string(),
    })
}

fn remove_path(path: &Path) -> Result<(), ExtractionError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| ExtractionError::IoError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}
