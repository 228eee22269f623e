// 集成测试公共模块
//
// 提供临时目录夹具和共享辅助函数

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// 临时源目录
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temporary directory"),
        }
    }

    /// Fixture inside the package root, addressable as `./<name>/`
    pub fn in_package() -> Self {
        Self {
            dir: tempfile::Builder::new()
                .prefix("fixture-")
                .tempdir_in(env!("CARGO_MANIFEST_DIR"))
                .expect("temporary directory"),
        }
    }

    /// `./<name>/`, relative to the package root
    pub fn relative_folder(&self) -> String {
        let name = self.dir.path().file_name().expect("directory name");
        format!("./{}/", name.to_string_lossy())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Source folder prefix with a trailing slash
    pub fn folder(&self) -> String {
        format!("{}/", self.dir.path().display())
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture directory");
        }
        fs::write(&path, contents).expect("fixture file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative)).expect("fixture output")
    }
}
