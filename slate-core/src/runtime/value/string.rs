//! String coercion rules

/// Parse text as a decimal number.
///
/// Surrounding whitespace is ignored. Only digits, one optional sign, a
/// decimal point and an exponent are accepted, so words such as `inf` or
/// `NaN` stay strings.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E');
    if !trimmed.chars().all(allowed) {
        return None;
    }
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Debugger form: the text in double quotes
pub fn quote(text: &str) -> String {
    format!("\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("  -3.5 "), Some(-3.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn test_reject_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("e"), None);
        assert_eq!(parse_number("12px"), None);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("hi"), "\"hi\"");
        assert_eq!(quote(""), "\"\"");
    }
}
