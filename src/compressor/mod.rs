//! # 压缩器
//!
//! 从文档中提取命名区域，将每个区域序列化为按行拆分的 JSON 数组，
//! 压缩后与版本号和额外数据合并为一个 JSON 对象，替换原文档内容。
//!
//! # 模块组织
//!
//! - `codec` - 可逆的字符串压缩编解码器
//! - `region` - 区域提取（贪婪、非嵌套）

pub mod codec;
pub mod region;

use serde_json::{Map, Value};

use crate::config::{deep_merge, TransformConfig};
use crate::core::{Document, DocumentTransform, InternalizeError, InternalizeResult};

pub use codec::{Codec, CodecKind, DeflateCodec, LzStringCodec};
pub use region::{extract_region, region_lines};

/// Turns each document into its compressed payload
pub struct Compressor {
    config: TransformConfig,
    codec: Box<dyn Codec + Send + Sync>,
}

impl Compressor {
    pub fn new(config: TransformConfig) -> Self {
        let codec = config.codec().codec();
        Self { config, codec }
    }

    /// Replaces the configured codec
    pub fn with_codec(mut self, codec: impl Codec + Send + Sync + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Builds the payload object for one document
    pub fn compress_regions(&self, document: &str) -> InternalizeResult<Map<String, Value>> {
        let mut payload = Map::new();
        payload.insert(
            "version".to_string(),
            Value::String(self.config.version().to_string()),
        );

        for (name, markers) in self.config.regions() {
            let region = extract_region(document, &markers);
            let serialized = serde_json::to_string(&region_lines(region))?;
            tracing::debug!(
                "region {}: {} bytes, {} lines",
                name,
                region.len(),
                region_lines(region).len()
            );
            payload.insert(name, Value::String(self.codec.compress(&serialized)?));
        }

        deep_merge(&mut payload, self.config.data.clone());
        Ok(payload)
    }

    /// Payload serialized as the replacement document body
    pub fn compress_text(&self, document: &str) -> InternalizeResult<String> {
        let payload = self.compress_regions(document)?;
        Ok(serde_json::to_string(&Value::Object(payload))?)
    }

    /// Reads one compressed region back into its lines
    pub fn decompress_region(&self, encoded: &str) -> InternalizeResult<Vec<String>> {
        let serialized = self.codec.decompress(encoded)?;
        Ok(serde_json::from_str(&serialized)?)
    }
}

impl DocumentTransform for Compressor {
    fn transform(&self, document: Document) -> InternalizeResult<Option<Document>> {
        if document.is_passthrough() {
            return Ok(Some(document));
        }
        let Some(text) = document.text() else {
            return Err(InternalizeError::UnsupportedPayloadKind {
                path: document.path,
            });
        };

        let result = self.compress_text(&text)?;
        Ok(Some(document.with_contents(result)))
    }
}
