//! String transforms used to build TypeScript names.

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a snake_case name to camelCase.
///
/// The first segment is kept as-is; empty segments (leading, trailing or
/// doubled underscores) are dropped.
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for part in s.split('_').filter(|part| !part.is_empty()) {
        if result.is_empty() {
            result.push_str(part);
        } else {
            result.push_str(&capitalize_first(part));
        }
    }
    result
}

/// PascalCase form of a snake_case or camelCase name.
pub fn pascal_case(s: &str) -> String {
    capitalize_first(&snake_to_camel(s))
}

/// Check if a property name must be quoted to be a valid key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escape a string for use in a double-quoted TypeScript string literal.
///
/// Control characters become escape sequences, so the literal always stays
/// on one line.
pub fn escape_ts_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c if c.is_control() => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Quote a property key if it is not a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_ts_string(name))
    } else {
        name.to_string()
    }
}
