//! Raw-text scans for vendor data that defeated structured parsing.

use std::sync::LazyLock;

use regex::Regex;

static LITERAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:vendorCode|supplierCode)"\s*:\s*"([^"]+)"#).expect("literal code pattern")
});

static LITERAL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:vendorName|supplierName)"\s*:\s*"([^"]+)"#).expect("literal name pattern")
});

/// Vendor-code shape: short letter prefix followed by digits, as a whole
/// token.
static CODE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]{1,4}[0-9]{2,}\b").expect("code token pattern"));

/// Scan malformed text for literal `"vendorCode": "…"` / `"vendorName": "…"`
/// substrings and pair them by ordinal position: the i-th code gets the i-th
/// name. Codes beyond the number of names stay unnamed.
pub fn literal_pairs(text: &str) -> Vec<(String, Option<String>)> {
    let codes: Vec<&str> = LITERAL_CODE_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let names: Vec<&str> = LITERAL_NAME_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    codes
        .into_iter()
        .enumerate()
        .map(|(i, code)| (code.to_string(), names.get(i).map(|n| n.to_string())))
        .collect()
}

/// Scan free text for tokens matching the vendor-code shape.
pub fn code_tokens(text: &str) -> Vec<String> {
    CODE_TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_codes_and_names_by_ordinal() {
        // The trailing V2 value never closes its quote; the pattern does not
        // require it to.
        let text = r#"garbage "vendorCode":"V1" junk "vendorName":"Acme" "vendorCode":"V2"#;
        let pairs = literal_pairs(text);
        assert_eq!(
            pairs,
            vec![
                ("V1".to_string(), Some("Acme".to_string())),
                ("V2".to_string(), None),
            ]
        );
    }

    #[test]
    fn supplier_spelled_keys_are_recognized() {
        let pairs = literal_pairs(r#""supplierCode":"S9" "supplierName":"Nine""#);
        assert_eq!(pairs, vec![("S9".to_string(), Some("Nine".to_string()))]);
    }

    #[test]
    fn code_tokens_require_a_letter_prefix_and_digits() {
        let tokens = code_tokens("delivered by AB12 and XYZ003, not 1234 or ABCDE12345 or X1");
        assert_eq!(tokens, vec!["AB12".to_string(), "XYZ003".to_string()]);
    }
}
