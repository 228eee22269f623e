//! # 解析器模块
//!
//! 基于正则表达式的重写过程，每个过程扫描整个文档字符串并把匹配到的
//! 外部引用替换为内联内容：
//!
//! - `css` - `<link type="text/css">` → `<style>`
//! - `js` - `<script src>` → 内联脚本
//! - `templates` - Angular 模板 → `<script type="text/ng-template">`
//! - `translations` - 翻译 JSON → `$translateProvider` 调用链
//! - `resources` - `src="..."` 与 CSS `url(...)` → data URL
//!
//! 所有过程共享 [`PassContext`]：只读配置、资源来源以及诊断输出。

pub mod css;
pub mod js;
pub mod resources;
pub mod templates;
pub mod translations;

use crate::assets::AssetSource;
use crate::config::TransformConfig;
use crate::diagnostics::DiagnosticsSink;

// Re-export commonly used items for convenience
pub use css::inline_css;
pub use js::inline_js;
pub use resources::inline_resources;
pub use templates::inline_templates;
pub use translations::inline_translations;

/// Everything a rewrite pass may touch besides the document itself
#[derive(Clone, Copy)]
pub struct PassContext<'a> {
    pub config: &'a TransformConfig,
    pub assets: &'a dyn AssetSource,
    pub sink: &'a dyn DiagnosticsSink,
}

impl<'a> PassContext<'a> {
    pub fn new(
        config: &'a TransformConfig,
        assets: &'a dyn AssetSource,
        sink: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            config,
            assets,
            sink,
        }
    }
}
