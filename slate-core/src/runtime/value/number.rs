//! Number formatting

/// Magnitudes at or above this print in exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this print in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Canonical text for a number.
///
/// Integral values print without a fraction, `-0` prints as `0`, and the
/// non-finite values use `Infinity`, `-Infinity` and `NaN`. Very large and
/// very small magnitudes use exponent form with a signed exponent (`1e+300`,
/// `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let text = format!("{n:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{n}")
}

/// Truthiness of a number: nonzero and not NaN
pub fn is_truthy(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}
