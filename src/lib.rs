//! # Internalize
//!
//! 构建期文本转换工具库：把文档中对外部资源（样式表、脚本、Angular 模板、
//! 翻译包、通用资源 URL）的引用替换为内联内容，并能将文档中的命名区域
//! 提取、序列化并压缩为紧凑的传输载荷。
//!
//! ## 模块组织
//!
//! - `core` - 文档、错误类型和逐文档流处理
//! - `config` - 转换配置及其分层合并
//! - `env` - 类型安全的环境变量
//! - `internalizer` - 按转换类型调度重写过程
//! - `parsers` - 五个基于正则的重写过程
//! - `compressor` - 区域提取与压缩
//! - `assets` - 文件读取、通配符展开、媒体类型
//! - `diagnostics` - 可注入的诊断输出
//! - `utils` - 工具函数和实用程序

pub mod assets;
pub mod compressor;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod env;
pub mod internalizer;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use assets::{AssetSource, FsAssets, MemoryAssets};
pub use compressor::{Codec, CodecKind, Compressor};
pub use config::{Delimiter, RegionMarkers, TransformConfig};
pub use crate::core::{
    run_stream, Document, DocumentTransform, InternalizeError, InternalizeResult, Payload,
    StreamOutcome,
};
pub use diagnostics::{DiagnosticsSink, InlineEvent, MemorySink, SilentSink, TracingSink};
pub use internalizer::{Internalizer, TransformKind};
