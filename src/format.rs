//! Magnitude suffixing for population figures shown in tooltips and the
//! world-population header.

/// Formats a population figure with a billion/million suffix.
///
/// Non-numeric input yields a user-facing message rather than an error:
/// this is a display-layer contract and the text lands directly in the UI.
#[must_use]
pub fn format_population(value: f64) -> String {
    if !value.is_finite() {
        return "Invalid input: provide a number".to_owned();
    }

    if value.abs() >= 1e9 {
        return format!("{:.2} Bn", value / 1e9);
    }
    if value.abs() >= 1e6 {
        return format!("{:.2} Mn", value / 1e6);
    }

    if value == value.trunc() {
        format!("{}", value.trunc() as i64)
    } else {
        value.to_string()
    }
}
