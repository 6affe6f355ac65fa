//! Key-path parsing and array-index interpolation for form-state lookups.

use crate::constants::INDEX_PLACEHOLDER;

/// One step of a parsed key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object property lookup.
    Key(String),
    /// Array element lookup.
    Index(usize),
}

/// Substitute the positional placeholder in a path template with a
/// concrete array index.
#[must_use]
pub fn insert_array_index(template: &str, index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &format!("[{index}]"))
}

/// Resolve a path template against an optional array index.
/// Templates without a placeholder pass through unchanged.
#[must_use]
pub fn concrete_path(template: &str, index: Option<usize>) -> String {
    match index {
        Some(value) => insert_array_index(template, value),
        None => template.to_string(),
    }
}

/// Append a property key to a base path, handling the empty root path.
#[must_use]
pub fn join_key(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

/// Parse a dot/bracket key path into lookup segments.
///
/// Bracket segments holding only digits become array indices; anything
/// else is a property key, so `items[0][code]` and `items[0].code`
/// resolve identically. Returns `None` while the path still carries an
/// unresolved index placeholder, letting lookups degrade to absent
/// instead of matching the wrong element.
#[must_use]
pub fn parse_path(path: &str) -> Option<Vec<PathSegment>> {
    if path.contains(INDEX_PLACEHOLDER) {
        return None;
    }
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut chars = path.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '.' => flush_key(&mut key, &mut segments),
            '[' => {
                flush_key(&mut key, &mut segments);
                let mut inner = String::new();
                for bracket_ch in chars.by_ref() {
                    if bracket_ch == ']' {
                        break;
                    }
                    inner.push(bracket_ch);
                }
                if inner.is_empty() {
                    continue;
                }
                match inner.parse::<usize>() {
                    Ok(index) => segments.push(PathSegment::Index(index)),
                    Err(_) => segments.push(PathSegment::Key(inner)),
                }
            }
            _ => key.push(ch),
        }
    }
    flush_key(&mut key, &mut segments);
    Some(segments)
}

fn flush_key(key: &mut String, segments: &mut Vec<PathSegment>) {
    if !key.is_empty() {
        segments.push(PathSegment::Key(std::mem::take(key)));
    }
}
