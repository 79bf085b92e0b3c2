/// Text following the matched prefix, or empty if `prefix_end` is past the
/// end of the line or not on a character boundary.
pub fn remainder(line: &str, prefix_end: usize) -> &str {
    line.get(prefix_end..).unwrap_or_default()
}

/// Assembles a rewritten line: `<item type> <markers> :<code> <remainder>`.
pub fn rewrite_line(item_type: &str, markers: &str, code: &str, remainder: &str) -> String {
    format!("{item_type} {markers} :{code} {remainder}")
}
