//! 内联调度器
//!
//! 根据转换类型选择唯一的重写过程。类型字符串在处理每个文档时解析为
//! 封闭的 [`TransformKind`] 枚举；未知类型只会丢弃当前文档，流继续处理。

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::assets::{AssetSource, FsAssets};
use crate::config::TransformConfig;
use crate::core::{Document, DocumentTransform, InternalizeError, InternalizeResult};
use crate::diagnostics::{DiagnosticsSink, TracingSink};
use crate::parsers::{
    inline_css, inline_js, inline_resources, inline_templates, inline_translations, PassContext,
};

/// The five rewrite passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Css,
    Js,
    AngularTemplate,
    Resources,
    Translations,
}

impl TransformKind {
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Css,
        TransformKind::Js,
        TransformKind::AngularTemplate,
        TransformKind::Resources,
        TransformKind::Translations,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransformKind::Css => "css",
            TransformKind::Js => "js",
            TransformKind::AngularTemplate => "angular-template",
            TransformKind::Resources => "resources",
            TransformKind::Translations => "translations",
        }
    }

    /// Runs this pass over one document's text
    pub fn apply(self, document: &str, ctx: &PassContext) -> InternalizeResult<String> {
        match self {
            TransformKind::Css => inline_css(document, ctx),
            TransformKind::Js => inline_js(document, ctx),
            TransformKind::AngularTemplate => inline_templates(document, ctx),
            TransformKind::Resources => inline_resources(document, ctx),
            TransformKind::Translations => inline_translations(document, ctx),
        }
    }
}

impl FromStr for TransformKind {
    type Err = InternalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InternalizeError::UnsupportedTransformKind(s.to_string()))
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-document inliner bound to one selector and one configuration
pub struct Internalizer {
    selector: String,
    config: TransformConfig,
    assets: Box<dyn AssetSource>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl Internalizer {
    /// Reads assets from disk and logs substitutions through `tracing`
    pub fn new(selector: impl Into<String>, config: TransformConfig) -> Self {
        Self {
            selector: selector.into(),
            config,
            assets: Box::new(FsAssets::new()),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_assets(mut self, assets: impl AssetSource + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn kind(&self) -> InternalizeResult<TransformKind> {
        self.selector.parse()
    }

    /// Applies the selected pass to a document's text
    pub fn internalize_text(&self, document: &str) -> InternalizeResult<String> {
        let kind = self.kind()?;
        let ctx = PassContext::new(&self.config, self.assets.as_ref(), self.sink.as_ref());
        tracing::debug!("running {} pass over {} bytes", kind, document.len());
        kind.apply(document, &ctx)
    }
}

impl DocumentTransform for Internalizer {
    fn transform(&self, document: Document) -> InternalizeResult<Option<Document>> {
        if document.is_passthrough() {
            return Ok(Some(document));
        }
        let Some(text) = document.text() else {
            return Err(InternalizeError::UnsupportedPayloadKind {
                path: document.path,
            });
        };

        let result = self.internalize_text(&text)?;
        Ok(Some(document.with_contents(result)))
    }
}
