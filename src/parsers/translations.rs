//! 翻译内联
//!
//! 在分隔符第一次出现之前插入 `$translateProvider.translations(...)` 调用链，
//! 每个 `source_folder/**/*.json` 文件一次，语言名取自文件名（去掉扩展名）。

use super::PassContext;
use crate::core::InternalizeResult;
use crate::diagnostics::InlineEvent;
use crate::internalizer::TransformKind;
use crate::utils::join_pattern;

pub const DEFAULT_TRANSLATIONS_MARKER: &str = "/*@@TRANSLATIONS@@*/";
const TRANSLATIONS_GLOB: &str = "/**/*.json";
const PROVIDER_PREFIX: &str = "//TRANSLATIONS\n$translateProvider";

/// Registers every translation bundle on `$translateProvider`
pub fn inline_translations(document: &str, ctx: &PassContext) -> InternalizeResult<String> {
    let marker = ctx.config.marker(DEFAULT_TRANSLATIONS_MARKER);
    let Some(position) = document.find(marker) else {
        return Ok(document.to_string());
    };

    let pattern = join_pattern(&ctx.config.source_folder(), TRANSLATIONS_GLOB);

    let mut block = String::from(PROVIDER_PREFIX);
    for path in ctx.assets.expand(&pattern)? {
        let locale = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bundle = ctx.assets.read_to_string(&path)?;
        block.push_str(&format!(".translations('{}', {})", locale, bundle));
        ctx.sink
            .record(InlineEvent::new(TransformKind::Translations, 1, locale));
    }
    block.push_str(";\n");

    let mut result = String::with_capacity(document.len() + block.len());
    result.push_str(&document[..position]);
    result.push_str(&block);
    result.push_str(&document[position..]);
    Ok(result)
}
