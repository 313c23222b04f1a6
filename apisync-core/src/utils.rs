//! Shared string utilities for identifier derivation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// Only the first character of each segment is touched; the remainder keeps
/// its original casing.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize_first).collect()
}

/// Convert a snake_case identifier to camelCase (e.g., "get_users" -> "getUsers").
///
/// The first segment is kept as is, every following segment gets its first
/// character upper-cased. Empty segments produced by repeated underscores
/// vanish.
pub fn to_camel_case(s: &str) -> String {
    match s.split_once('_') {
        Some((head, rest)) => format!("{}{}", head, to_pascal_case(rest)),
        None => s.to_string(),
    }
}

/// Remove every character outside `[A-Za-z0-9_]`.
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn capitalize_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
