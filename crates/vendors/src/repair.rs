//! Repair of syntactically truncated JSON text.

/// Append the minimal closing tokens to a truncated JSON text.
///
/// The scan is string- and escape-aware: brackets inside string literals do
/// not count. Returns `None` when the text has nothing to repair or when the
/// closers that are present do not nest (that is not truncation, and the
/// caller's next strategy handles it).
pub fn repair_truncated(text: &str) -> Option<String> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return None;
                }
            }
            _ => {}
        }
    }

    if stack.is_empty() && !in_string {
        return None;
    }

    let mut repaired = String::with_capacity(text.len() + stack.len() + 1);
    repaired.push_str(text);
    if in_string {
        repaired.push('"');
    }
    while let Some(closer) = stack.pop() {
        repaired.push(closer);
    }
    Some(repaired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn closes_an_unterminated_array_of_objects() {
        let text = r#"[{"vendorCode":"V1","vendorName":"Acme"},{"vendorCode":"V2""#;
        let repaired = repair_truncated(text).unwrap();
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn closes_a_dangling_string() {
        let repaired = repair_truncated(r#"{"vendorCode":"V1"#).unwrap();
        let value: Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value["vendorCode"], "V1");
    }

    #[test]
    fn complete_text_needs_no_repair() {
        assert!(repair_truncated(r#"{"vendorCode":"V1"}"#).is_none());
        assert!(repair_truncated("plain text").is_none());
    }

    #[test]
    fn mismatched_closers_are_not_truncation() {
        assert!(repair_truncated(r#"[}"#).is_none());
        assert!(repair_truncated(r#"[{"a":1]"#).is_none());
    }

    #[test]
    fn brackets_inside_strings_do_not_count() {
        assert!(repair_truncated(r#"{"note":"a ] b } c"}"#).is_none());
    }
}
