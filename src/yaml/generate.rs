//! Render missing key path segments as YAML mapping lines.

/// Render `segments` as one mapping key per line, each one
/// `indent_unit` deeper than the previous and all offset by
/// `base_indent`. No trailing newline; the caller decides how the
/// block joins the surrounding text.
pub fn generate_structure(segments: &[String], base_indent: &str, indent_unit: &str) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| format!("{}{}{}:", base_indent, indent_unit.repeat(i), segment))
        .collect::<Vec<_>>()
        .join("\n")
}
