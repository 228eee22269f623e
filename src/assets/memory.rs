use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use super::AssetSource;
use crate::core::{InternalizeError, InternalizeResult};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// In-memory asset store; expansion order is the sorted path order
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, path: &Path) -> InternalizeResult<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            InternalizeError::read_failure(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn expand(&self, pattern: &str) -> InternalizeResult<Vec<PathBuf>> {
        let compiled = Pattern::new(pattern).map_err(|source| InternalizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(self
            .files
            .keys()
            .filter(|path| compiled.matches_path_with(path, MATCH_OPTIONS))
            .cloned()
            .collect())
    }
}
