//! Presentation helpers for evaluation results.

const LARGE: f64 = 1_000_000.0;
const SMALL: f64 = 0.001;

/// Renders a result the way the shell prints it: integral values keep a
/// trailing `.0`, everything else uses the shortest round-tripping form.
pub fn format_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Scientific rendering (`1.23e+06`) for values above a million or below a
/// thousandth in magnitude. Zero and everything in between return `None`.
pub fn scientific(value: f64) -> Option<String> {
    let magnitude = value.abs();
    if magnitude > LARGE || (magnitude < SMALL && value != 0.0) {
        Some(exponent_form(value))
    } else {
        None
    }
}

fn exponent_form(value: f64) -> String {
    let raw = format!("{:.2e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
