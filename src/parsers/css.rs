//! CSS 内联
//!
//! 将 `type="text/css"` 的 `<link>` 元素替换为包含样式表内容的 `<style>` 块。
//! 以 `http` 开头的引用保持不变；读取失败会使整个文档失败。

use std::sync::LazyLock;

use regex::Regex;

use super::PassContext;
use crate::core::InternalizeResult;
use crate::diagnostics::InlineEvent;
use crate::internalizer::TransformKind;
use crate::utils::{is_remote_url, join_path, try_replace_all};

static STYLESHEET_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link\b[^>]*\btype="text/css"[^>]*>"#).expect("stylesheet link pattern")
});

static HREF_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bhref="([^"]+)""#).expect("href pattern"));

/// Inlines local stylesheets referenced by `<link type="text/css">`
pub fn inline_css(document: &str, ctx: &PassContext) -> InternalizeResult<String> {
    let source_folder = ctx.config.source_folder();

    try_replace_all(&STYLESHEET_LINK, document, |caps| {
        let Some(href) = HREF_ATTR.captures(&caps[0]).and_then(|c| c.get(1)) else {
            return Ok(None);
        };
        let href = href.as_str();
        if is_remote_url(href) {
            return Ok(None);
        }

        let stylesheet = ctx
            .assets
            .read_to_string(&join_path(&[&source_folder], href))?;
        ctx.sink.record(InlineEvent::new(TransformKind::Css, 1, href));

        Ok(Some(format!(
            "<style type=\"text/css\">{}</style>",
            stylesheet
        )))
    })
}
