//! Stock field formatters
//!
//! A formatter turns a raw field value into display text. Formatting is only
//! used for rendering; structured output always carries the raw values.

use serde_json::Value;

/// Default formatter: strings raw, `null` empty, everything else compact JSON
pub fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pretty-printed JSON with two-space indentation
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One `- item` line per array element
///
/// Non-array values fall back to [`plain`].
pub fn bullet_list(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| format!("- {}", plain(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => plain(other),
    }
}

/// Placeholder text for masked values
pub const MASK: &str = "<hidden>";

/// Hide the value, keeping only whether it is set
pub fn masked(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        _ => MASK.to_string(),
    }
}

/// Prefix every line that is not blank with `prefix`
pub fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain() {
        assert_eq!(plain(&json!("w1")), "w1");
        assert_eq!(plain(&json!(3)), "3");
        assert_eq!(plain(&json!(null)), "");
        assert_eq!(plain(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_pretty_json() {
        assert_eq!(pretty_json(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            bullet_list(&json!(["queue:*", "assume:x"])),
            "- queue:*\n- assume:x"
        );
        assert_eq!(bullet_list(&json!([])), "");
        assert_eq!(bullet_list(&json!("x")), "x");
    }

    #[test]
    fn test_masked() {
        assert_eq!(masked(&json!("hunter2")), "<hidden>");
        assert_eq!(masked(&json!({"token": "abc"})), "<hidden>");
        assert_eq!(masked(&json!(null)), "");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", "  "), "  a\n\n  b");
        assert_eq!(indent("", "  "), "");
    }
}
