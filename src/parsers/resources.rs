//! 资源内联
//!
//! 两个依次执行的替换：
//!
//! 1. `src="<path>"` → `src="data:<mime>;base64,..."`，路径相对 `source_folder`
//! 2. CSS `url(<path>)` → `url(data:<mime>;base64,...)`，路径相对
//!    `source_folder + css_path`
//!
//! 远程、`file://` 和 `data:` 引用以及不符合严格路径规则的值保持不变。

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::PassContext;
use crate::assets::media_type_for_path;
use crate::core::{InternalizeError, InternalizeResult};
use crate::diagnostics::InlineEvent;
use crate::internalizer::TransformKind;
use crate::utils::{create_data_url, is_absolute_reference, is_path_token, join_path, try_replace_all};

static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]+)""#).expect("src attribute pattern"));

static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\s*\(\s*"?'?([^)|"']+)'?"?\s*\)"#).expect("css url pattern")
});

/// Embeds local resources as base64 data URLs
pub fn inline_resources(document: &str, ctx: &PassContext) -> InternalizeResult<String> {
    let source_folder = ctx.config.source_folder();

    let document = try_replace_all::<InternalizeError, _>(&SRC_ATTR, document, |caps| {
        let reference = &caps[1];
        if !is_inlinable(reference) {
            return Ok(None);
        }

        let data_url = embed(ctx, &join_path(&[&source_folder], reference))?;
        ctx.sink
            .record(InlineEvent::new(TransformKind::Resources, 1, reference));
        Ok(Some(format!("src=\"{}\"", data_url)))
    })?;

    try_replace_all(&CSS_URL, &document, |caps| {
        let reference = &caps[1];
        if !is_inlinable(reference) {
            return Ok(None);
        }

        let path = join_path(&[&source_folder, ctx.config.css_path()], reference);
        let data_url = embed(ctx, &path)?;
        ctx.sink
            .record(InlineEvent::new(TransformKind::Resources, 2, reference));
        Ok(Some(format!("url({})", data_url)))
    })
}

fn is_inlinable(reference: &str) -> bool {
    !is_absolute_reference(reference) && is_path_token(reference)
}

fn embed(ctx: &PassContext, path: &Path) -> InternalizeResult<String> {
    let data = ctx.assets.read(path)?;
    Ok(create_data_url(&media_type_for_path(path), &data))
}
