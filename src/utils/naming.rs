//! Identifier and position helpers

use std::path::Path;

/// Fallback name when a file stem yields no usable characters.
pub const FALLBACK_COMPONENT_NAME: &str = "Component";

/// Derive a PascalCase identifier from a file's base name.
///
/// `user-profile.jsx` becomes `UserProfile`, `date_utils.ts` becomes
/// `DateUtils`. Every character that cannot appear in an identifier acts as a
/// word break, a leading digit is prefixed with `_`, and an empty stem maps to
/// [`FALLBACK_COMPONENT_NAME`].
pub fn component_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name: String = stem
        .split(|c: char| !is_identifier_part(c))
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();

    if name.is_empty() {
        return FALLBACK_COMPONENT_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric()
}

/// Whether `name` is a plain JavaScript identifier (reserved words included).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// 1-based line of a byte offset. Offsets past the end clamp to the last line.
pub fn line_number_at(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
