//! Precision constants and presentation rounding.
//!
//! Internal computation always runs at full f64 precision. Rounding happens
//! only through [`round_display`], at the point where numbers become text.

/// Confusion tolerance for checking coincidence of two points.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Tolerance used when checking that a derived point satisfies the conic equation.
/// The implicit form is scaled by the denominators, so this is looser than CONFUSION.
pub const ON_CURVE: f64 = 1.0e-6;

/// Number of decimal places shown for derived quantities.
pub const DISPLAY_DECIMALS: usize = 2;

/// Rounds a value to [`DISPLAY_DECIMALS`] places and folds negative zero into zero.
#[inline]
pub fn round_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
    let rounded = (value * scale).round() / scale;
    // -0.0 + 0.0 == +0.0
    rounded + 0.0
}

/// Formats a value with [`DISPLAY_DECIMALS`] places, never printing "-0.00".
pub fn format_display(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, round_display(value))
}

/// Formats a value in its shortest exact form ("3", "-2", "2.5").
///
/// Used for the center coordinates and raw a/b values, which the display
/// shows unrounded.
pub fn format_exact(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Formats a rounded value without trailing zeros ("5", "3.61", "-0.5").
pub fn format_compact(value: f64) -> String {
    format_exact(round_display(value))
}

/// Formats `name - value` with the sign folded: "x - 3", "y + 2", or just "x" for zero.
pub fn format_offset(name: &str, value: f64) -> String {
    if value == 0.0 {
        name.to_string()
    } else if value < 0.0 {
        format!("{} + {}", name, format_exact(-value))
    } else {
        format!("{} - {}", name, format_exact(value))
    }
}

/// Check if a value is zero within CONFUSION.
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() <= CONFUSION
}
