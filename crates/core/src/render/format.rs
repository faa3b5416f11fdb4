//! Number formatting for displayed values

/// Shortest decimal form of a number: `9` for `9.0`, `72.5` for `72.5`.
pub fn format_number(value: f64) -> String {
    // Avoid printing "-0" for values that round to zero from below
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Round to one decimal place, then format with [`format_number`].
pub fn format_tenths(value: f64) -> String {
    format_number(round_tenths(value))
}

pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
