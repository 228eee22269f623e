use regex::{Captures, Regex};

/// Replaces every match of `re`, letting the replacer fail
///
/// The replacer returns `Ok(None)` to keep a match as it is. The first error
/// aborts the whole replacement; no partially rewritten text is returned.
pub fn try_replace_all<E, F>(re: &Regex, haystack: &str, mut replacer: F) -> Result<String, E>
where
    F: FnMut(&Captures) -> Result<Option<String>, E>,
{
    let mut result = String::with_capacity(haystack.len());
    let mut last_match = 0;

    for caps in re.captures_iter(haystack) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if let Some(replacement) = replacer(&caps)? {
            result.push_str(&haystack[last_match..whole.start()]);
            result.push_str(&replacement);
            last_match = whole.end();
        }
    }

    result.push_str(&haystack[last_match..]);
    Ok(result)
}
