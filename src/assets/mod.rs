//! # 资源模块
//!
//! 内联过程所需的外部协作者：
//!
//! - 文件读取（路径 → 原始字节）
//! - 通配符展开（模式 → 路径列表）
//! - 媒体类型解析（路径 → MIME 字符串）
//!
//! # 模块组织
//!
//! - `fs` - 基于本地文件系统和 `glob` 的实现
//! - `memory` - 内存实现，用于测试和嵌入式调用

pub mod fs;
pub mod memory;

use std::path::{Path, PathBuf};

use crate::core::InternalizeResult;

pub use fs::FsAssets;
pub use memory::MemoryAssets;

/// Where inlined files come from
pub trait AssetSource {
    /// Reads the raw bytes at `path`
    fn read(&self, path: &Path) -> InternalizeResult<Vec<u8>>;

    /// Expands a wildcard pattern into matching file paths
    fn expand(&self, pattern: &str) -> InternalizeResult<Vec<PathBuf>>;

    /// Reads `path` as text, replacing invalid UTF-8 sequences
    fn read_to_string(&self, path: &Path) -> InternalizeResult<String> {
        let bytes = self.read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

/// Determines the media type based on file extension
pub fn media_type_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
