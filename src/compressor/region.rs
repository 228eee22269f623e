use crate::config::RegionMarkers;

/// Extracts the text between a start marker and a stop marker
///
/// The scan is greedy and flat: it runs from the first occurrence of `start`
/// to the last occurrence of `stop` after it. A stop marker repeated later in
/// the document therefore widens the region. One line break right after the
/// start marker and one right before the stop marker are not part of the
/// region. Missing markers yield an empty region.
pub fn extract_region<'a>(document: &'a str, markers: &RegionMarkers) -> &'a str {
    let Some(start) = document.find(markers.start.as_str()) else {
        return "";
    };
    let inner_start = start + markers.start.len();
    let Some(inner_len) = document[inner_start..].rfind(markers.stop.as_str()) else {
        return "";
    };

    strip_boundary_line_breaks(&document[inner_start..inner_start + inner_len])
}

/// Splits region text into the lines that get serialized
pub fn region_lines(region: &str) -> Vec<&str> {
    region.split('\n').collect()
}

fn strip_boundary_line_breaks(text: &str) -> &str {
    let text = text
        .strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text);
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
