//! Position (lot) size from account risk parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::round2;

/// Inputs for a position-size calculation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionSizeInputs {
    /// Account size in currency units
    pub account_size: f64,

    /// Percent of the account to risk, in (0, 100]
    pub risk_percent: f64,

    /// Stop-loss distance in pips
    pub stop_loss_pips: f64,

    /// Currency value of one pip per unit of position size
    pub pip_value: f64,
}

/// Result of a position-size calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSizeReport {
    /// Position size, rounded to 2 decimals
    pub lot_size: f64,

    /// Currency amount at risk if the stop-loss is hit
    pub risk_amount: f64,

    pub calculated_at: DateTime<Utc>,
}

impl PositionSizeInputs {
    /// Compute the position size that risks exactly `risk_percent` of the
    /// account if the stop-loss is hit.
    ///
    /// Performs no range validation: out-of-range inputs flow through the
    /// arithmetic unchanged.
    pub fn compute(&self) -> PositionSizeReport {
        let risk_amount = self.account_size * (self.risk_percent / 100.0);
        let lot_size = risk_amount / (self.stop_loss_pips * self.pip_value);

        PositionSizeReport {
            lot_size: round2(lot_size),
            risk_amount: round2(risk_amount),
            calculated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for PositionSizeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lot Size: {:.2}", self.lot_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lot_size() {
        let inputs = PositionSizeInputs {
            account_size: 10000.0,
            risk_percent: 1.0,
            stop_loss_pips: 10.0,
            pip_value: 10.0,
        };

        let report = inputs.compute();
        assert_eq!(report.risk_amount, 100.0);
        assert_eq!(report.lot_size, 1.0);
    }

    #[test]
    fn test_fractional_lot_size() {
        let inputs = PositionSizeInputs {
            account_size: 5000.0,
            risk_percent: 2.0,
            stop_loss_pips: 15.0,
            pip_value: 10.0,
        };

        // 100 / 150 = 0.666... -> 0.67
        let report = inputs.compute();
        assert_eq!(report.lot_size, 0.67);
    }

    #[test]
    fn test_zero_stop_loss_propagates() {
        let inputs = PositionSizeInputs {
            account_size: 10000.0,
            risk_percent: 1.0,
            stop_loss_pips: 0.0,
            pip_value: 10.0,
        };

        // Division by zero is not guarded; the display layer shows it as-is.
        let report = inputs.compute();
        assert!(report.lot_size.is_infinite());
    }

    #[test]
    fn test_negative_risk_propagates() {
        let inputs = PositionSizeInputs {
            account_size: 10000.0,
            risk_percent: -1.0,
            stop_loss_pips: 10.0,
            pip_value: 10.0,
        };

        let report = inputs.compute();
        assert_eq!(report.lot_size, -1.0);
    }
}
