//! Angular 模板内联
//!
//! 在分隔符（默认 `</body>`）第一次出现的位置之前插入
//! `source_folder/html/**/*.html` 下的所有模板。分隔符不存在时文档保持不变。

use std::path::Path;

use super::PassContext;
use crate::core::InternalizeResult;
use crate::diagnostics::InlineEvent;
use crate::internalizer::TransformKind;

pub const DEFAULT_TEMPLATE_MARKER: &str = "</body>";
const TEMPLATE_GLOB: &str = "html/**/*.html";

/// Inlines every Angular template before the first marker occurrence
pub fn inline_templates(document: &str, ctx: &PassContext) -> InternalizeResult<String> {
    let marker = ctx.config.marker(DEFAULT_TEMPLATE_MARKER);
    let Some(position) = document.find(marker) else {
        return Ok(document.to_string());
    };

    let source_folder = ctx.config.source_folder();
    let pattern = format!("{}{}", source_folder, TEMPLATE_GLOB);

    let mut templates = String::new();
    for path in ctx.assets.expand(&pattern)? {
        let id = template_id(&path, &source_folder);
        let contents = ctx.assets.read_to_string(&path)?;
        templates.push_str(&format!(
            "\n<script type=\"text/ng-template\" id=\"{}\">\n{}</script>",
            id, contents
        ));
        ctx.sink
            .record(InlineEvent::new(TransformKind::AngularTemplate, 1, id));
    }

    let mut result = String::with_capacity(document.len() + templates.len() + 1);
    result.push_str(&document[..position]);
    result.push_str(&templates);
    result.push('\n');
    result.push_str(&document[position..]);
    Ok(result)
}

/// Template id: the path with the first occurrence of the source folder removed
///
/// Both sides lose any leading `./`, which glob expansion drops from its results.
fn template_id(path: &Path, source_folder: &str) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    let path = strip_current_dir(&path);
    let source_folder = strip_current_dir(source_folder);
    if source_folder.is_empty() {
        path.to_string()
    } else {
        path.replacen(source_folder, "", 1)
    }
}

fn strip_current_dir(mut path: &str) -> &str {
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}
