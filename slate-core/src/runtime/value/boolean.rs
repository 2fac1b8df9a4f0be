//! Boolean text forms

pub const TRUE_TEXT: &str = "True";
pub const FALSE_TEXT: &str = "False";

pub fn to_text(b: bool) -> &'static str {
    if b {
        TRUE_TEXT
    } else {
        FALSE_TEXT
    }
}

/// Whether `text` spells `b` (ASCII case-insensitive)
pub fn matches_text(b: bool, text: &str) -> bool {
    text.eq_ignore_ascii_case(to_text(b))
}
