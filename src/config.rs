//! 转换配置
//!
//! 配置按层合并：默认值 → TOML 配置文件 → 环境变量 → 命令行参数。
//! 合并是有类型的：字符串非空时覆盖，可选值存在时覆盖，
//! `delimiters` 按名称覆盖，`data` 递归合并。

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::compressor::CodecKind;
use crate::core::{InternalizeError, InternalizeResult};

pub const DEFAULT_HEAD_START: &str = "<head>";
pub const DEFAULT_HEAD_STOP: &str = "</head>";
pub const DEFAULT_BODY_START: &str = "<body>";
pub const DEFAULT_BODY_STOP: &str = "</body>";

/// Start/stop marker pair bounding a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMarkers {
    pub start: String,
    pub stop: String,
}

impl RegionMarkers {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }
}

/// Legacy marker pair where either side may be left to its default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerOverrides {
    pub start: Option<String>,
    pub stop: Option<String>,
}

impl MarkerOverrides {
    fn resolve(&self, start: &str, stop: &str) -> RegionMarkers {
        RegionMarkers::new(
            non_empty(self.start.as_deref()).unwrap_or(start),
            non_empty(self.stop.as_deref()).unwrap_or(stop),
        )
    }
}

/// The `head`/`body` form of the delimiter option
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionDelimiters {
    pub head: Option<MarkerOverrides>,
    pub body: Option<MarkerOverrides>,
}

/// `delimiter` is either one marker or a pair of head/body marker pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delimiter {
    Marker(String),
    Sections(SectionDelimiters),
}

/// Configuration shared by every pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Prefix for every resolved on-disk path
    pub source_folder: String,
    /// Extra prefix for CSS `url(...)` references only
    pub css_path: String,
    pub delimiter: Option<Delimiter>,
    /// Named regions for the compressor; preferred over `delimiter`
    pub delimiters: BTreeMap<String, RegionMarkers>,
    pub version: Option<String>,
    /// Extra data merged into the compressed payload
    pub data: Map<String, Value>,
    pub codec: Option<CodecKind>,
}

impl TransformConfig {
    /// Loads a TOML configuration file
    pub fn load(path: &Path) -> InternalizeResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| InternalizeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&contents).map_err(|message| InternalizeError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Source folder with a leading `~` expanded
    pub fn source_folder(&self) -> String {
        shellexpand::tilde(&self.source_folder).into_owned()
    }

    pub fn css_path(&self) -> &str {
        &self.css_path
    }

    /// The single-marker delimiter, or `default` when none is configured
    pub fn marker<'a>(&'a self, default: &'a str) -> &'a str {
        match &self.delimiter {
            Some(Delimiter::Marker(marker)) => non_empty(Some(marker.as_str())).unwrap_or(default),
            _ => default,
        }
    }

    /// Regions to extract, in name order for `delimiters`, else head then body
    pub fn regions(&self) -> Vec<(String, RegionMarkers)> {
        if !self.delimiters.is_empty() {
            return self
                .delimiters
                .iter()
                .map(|(name, markers)| (name.clone(), markers.clone()))
                .collect();
        }

        let sections = match &self.delimiter {
            Some(Delimiter::Sections(sections)) => sections.clone(),
            _ => SectionDelimiters::default(),
        };
        let head = sections.head.unwrap_or_default();
        let body = sections.body.unwrap_or_default();

        vec![
            (
                "head".to_string(),
                head.resolve(DEFAULT_HEAD_START, DEFAULT_HEAD_STOP),
            ),
            (
                "body".to_string(),
                body.resolve(DEFAULT_BODY_START, DEFAULT_BODY_STOP),
            ),
        ]
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("undefined")
    }

    pub fn codec(&self) -> CodecKind {
        self.codec.unwrap_or_default()
    }

    /// Layers `overlay` on top of `self`
    pub fn merge(mut self, overlay: TransformConfig) -> TransformConfig {
        if !overlay.source_folder.is_empty() {
            self.source_folder = overlay.source_folder;
        }
        if !overlay.css_path.is_empty() {
            self.css_path = overlay.css_path;
        }
        if overlay.delimiter.is_some() {
            self.delimiter = overlay.delimiter;
        }
        self.delimiters.extend(overlay.delimiters);
        if overlay.version.is_some() {
            self.version = overlay.version;
        }
        deep_merge(&mut self.data, overlay.data);
        if overlay.codec.is_some() {
            self.codec = overlay.codec;
        }
        self
    }
}

/// Recursively merges `overlay` into `target`
///
/// Objects merge key by key; for anything else the overlay value wins.
pub fn deep_merge(target: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
