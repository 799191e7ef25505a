
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

// `is_alphanumeric` would let through other numerics such as '½' or '²'
fn is_identifier_part(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_' || c == '$'
}

pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Turns a declaration name into something usable as a generated symbol.
/// Offending characters are replaced by their decimal code point, so
/// `"p 1"` becomes `"p321"`.
pub fn java_identifier(name: &str) -> String {
    if is_java_identifier(name) {
        return name.to_string();
    }

    let mut identifier = String::with_capacity(name.len() + 5);
    for (i, c) in name.chars().enumerate() {
        let valid = if i == 0 {
            is_identifier_start(c)
        } else {
            is_identifier_part(c)
        };
        if valid {
            identifier.push(c);
        } else {
            identifier.push_str(&(c as u32).to_string());
        }
    }
    identifier
}

pub fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
