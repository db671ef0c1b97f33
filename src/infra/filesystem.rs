//! Filesystem operations
//!
//! Handles directory operations shared by resolution and extraction.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
///
/// Succeeds if the directory already exists.
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
