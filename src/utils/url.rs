use std::path::PathBuf;

use base64::prelude::*;

/// Schemes that mark a resource reference as absolute (never inlined)
const ABSOLUTE_REFERENCE_PREFIXES: &[&str] = &["http://", "https://", "file://", "data:"];

/// Builds a `data:` URL with base64-encoded contents
pub fn create_data_url(media_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64_STANDARD.encode(data))
}

/// Stylesheet and script references are remote when they start with `http`
pub fn is_remote_url(reference: &str) -> bool {
    reference.starts_with("http")
}

/// Checks for references resources must leave alone: remote, file or data URLs
pub fn is_absolute_reference(reference: &str) -> bool {
    ABSOLUTE_REFERENCE_PREFIXES
        .iter()
        .any(|prefix| reference.starts_with(prefix))
}

/// Strict rule for resource paths: at least two of `[a-zA-Z0-9./_-]`
pub fn is_path_token(reference: &str) -> bool {
    reference.len() >= 2
        && reference
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'/' | b'_' | b'-'))
}

/// Resolves a reference against its prefixes by plain concatenation
///
/// The prefixes are not normalized: `"assets/" + "a.css"` and
/// `"assets" + "a.css"` differ, just like the configured folder says.
pub fn join_path(prefixes: &[&str], reference: &str) -> PathBuf {
    let mut joined = prefixes.concat();
    joined.push_str(reference);
    PathBuf::from(joined)
}

/// Joins a folder and a glob tail with exactly one `/`
///
/// An empty folder yields the tail alone, so the pattern stays relative.
pub fn join_pattern(folder: &str, tail: &str) -> String {
    let folder = folder.trim_end_matches('/');
    let tail = tail.trim_start_matches('/');
    if folder.is_empty() {
        tail.to_string()
    } else {
        format!("{}/{}", folder, tail)
    }
}
