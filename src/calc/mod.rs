//! Pure calculation core: position sizing and profit/loss projection.
//!
//! Both calculators are stateless functions of their numeric inputs. Inputs
//! are deliberately unvalidated `f64`s: zero or negative values propagate
//! through the arithmetic and may yield zero, negative, infinite, or NaN
//! results, which the display layer renders as-is.

mod position_size;
mod profit_loss;

pub use position_size::{PositionSizeInputs, PositionSizeReport};
pub use profit_loss::{ProfitLossInputs, ProfitLossReport, PIPS_PER_PRICE_UNIT};

/// Round to 2 decimal places, half away from zero.
///
/// All displayed monetary and percentage outputs go through this. NaN and
/// infinities pass through unchanged.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(4.999999), 5.0);
        assert_eq!(round2(-1.006), -1.01);
        assert!(round2(f64::NAN).is_nan());
        assert!(round2(f64::INFINITY).is_infinite());
    }
}
