use std::fs;
use std::path::{Path, PathBuf};

use super::AssetSource;
use crate::core::{InternalizeError, InternalizeResult};

/// Reads assets from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsAssets;

impl FsAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for FsAssets {
    fn read(&self, path: &Path) -> InternalizeResult<Vec<u8>> {
        fs::read(path).map_err(|e| InternalizeError::read_failure(path, e))
    }

    fn expand(&self, pattern: &str) -> InternalizeResult<Vec<PathBuf>> {
        let paths = glob::glob(pattern).map_err(|source| InternalizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in paths {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}
