//! JavaScript 内联
//!
//! 去掉本地 `<script>` 的 `src` 属性，并在开始标签之后追加脚本内容。

use std::sync::LazyLock;

use regex::Regex;

use super::PassContext;
use crate::core::InternalizeResult;
use crate::diagnostics::InlineEvent;
use crate::internalizer::TransformKind;
use crate::utils::{is_remote_url, join_path, try_replace_all};

static SCRIPT_WITH_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script\b([^>]*?)\s+src="([^"]+)"([^>]*)>"#).expect("script src pattern")
});

/// Inlines local scripts referenced by `<script src="...">`
pub fn inline_js(document: &str, ctx: &PassContext) -> InternalizeResult<String> {
    let source_folder = ctx.config.source_folder();

    try_replace_all(&SCRIPT_WITH_SRC, document, |caps| {
        let src = &caps[2];
        if is_remote_url(src) {
            return Ok(None);
        }

        let script = ctx.assets.read_to_string(&join_path(&[&source_folder], src))?;
        ctx.sink.record(InlineEvent::new(TransformKind::Js, 1, src));

        Ok(Some(format!("<script{}{}>\n{}", &caps[1], &caps[3], script)))
    })
}
