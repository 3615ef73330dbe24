//! Leading indentation conversion.
//!
//! The host nests lists with one tab per level; the rich surface only understands spaces. Only
//! the leading whitespace run of a line is touched. Tabs inside the content are the entity
//! codec's business.

/// Splits a line into its leading whitespace run and the rest.
pub fn split_leading_whitespace(line: &str) -> (&str, &str) {
    let end = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    line.split_at(end)
}

/// Host→rich: every tab of the leading run becomes `indent`.
pub fn tabs_to_spaces(line: &str, indent: &str) -> String {
    let (leading, rest) = split_leading_whitespace(line);
    if indent.is_empty() || !leading.contains('\t') {
        return line.to_string();
    }
    let mut out = leading.replace('\t', indent);
    out.push_str(rest);
    out
}

/// Rich→host: each `indent` in the leading run becomes one tab, greedily from the left.
///
/// Odd leftovers stay as literal spaces.
pub fn spaces_to_tabs(line: &str, indent: &str) -> String {
    let (leading, rest) = split_leading_whitespace(line);
    if indent.is_empty() || !leading.contains(indent) {
        return line.to_string();
    }
    let mut out = leading.replace(indent, "\t");
    out.push_str(rest);
    out
}
