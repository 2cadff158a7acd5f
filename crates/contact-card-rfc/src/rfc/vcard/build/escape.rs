//! vCard 3.0 text escaping (RFC 2426 §4).

/// Escapes a text value.
///
/// Backslash, newline, comma and semicolon are backslash-escaped; CR is
/// dropped so CRLF in the source becomes a single `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Joins the values of one structured component with `,`, escaping each.
#[must_use]
pub fn escape_component(values: &[String]) -> String {
    values
        .iter()
        .map(|v| escape_text(v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escapes a parameter value.
///
/// vCard 3.0 has no escape for parameter values: DQUOTE and control
/// characters are dropped, and a value holding `:`, `;` or `,` is quoted.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    let cleaned: String = s.chars().filter(|&c| c != '"' && !c.is_control()).collect();

    if cleaned.contains([':', ';', ',']) {
        format!("\"{cleaned}\"")
    } else {
        cleaned
    }
}

/// Removes control characters from a URI-like value (TEL, URL).
///
/// These values are not text-escaped in vCard 3.0, so a line break must
/// not reach the content line.
#[must_use]
pub fn strip_controls(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Returns whether `name` can be written as a property or parameter name:
/// non-empty, ASCII alphanumerics and `-` only.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
