//! Step-exact increment/decrement for text field values.

use rust_decimal::Decimal;

/// Nudge a field's text value up or down by one unit of its last decimal
/// place: "1.25" steps by 0.01, "2" steps by 1.
///
/// Empty and unparsable inputs both yield "0". The result is clamped at 0
/// and re-formatted to the same number of decimal places as the input, so
/// the field keeps its precision across repeated presses.
pub fn adjust_value(current: &str, increment: bool) -> String {
    let trimmed = current.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }

    let Ok(value) = trimmed.parse::<Decimal>() else {
        return "0".to_string();
    };

    // Decimal caps scale at 28; the parse above already rounded any longer
    // fraction there, so the step and reformatting clamp to match.
    let decimal_places = trimmed
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
        .min(Decimal::MAX_SCALE);

    let step = Decimal::new(1, decimal_places);
    let mut adjusted = if increment { value + step } else { value - step };

    if adjusted < Decimal::ZERO {
        adjusted = Decimal::ZERO;
    }

    adjusted.rescale(decimal_places);
    adjusted.to_string()
}
