//! Numeric detection for field values
//!
//! A value is numeric when the whole trimmed text is a finite decimal number:
//! optional sign, digits, optional fraction, optional exponent. Special names
//! (`inf`, `NaN`), hexadecimal and trailing garbage are kept as strings.

use serde_json::{Number, Value};

/// Largest magnitude at which every integer is exactly representable in f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse a field as a JSON number, if the entire value is numeric
pub fn parse_number(value: &str) -> Option<Number> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // f64::from_str also accepts "inf", "infinity" and "nan"
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }

    if parsed.fract() == 0.0 && parsed.abs() < MAX_SAFE_INTEGER {
        Some(Number::from(parsed as i64))
    } else {
        Number::from_f64(parsed)
    }
}

/// Coerce a field into a number when possible, otherwise keep it as a string
pub fn coerce_value(value: &str) -> Value {
    match parse_number(value) {
        Some(number) => Value::Number(number),
        None => Value::String(value.to_string()),
    }
}
