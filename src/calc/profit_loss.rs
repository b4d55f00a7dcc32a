//! Profit/loss projection from entry and exit prices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::round2;

/// Fixed price-difference to pip conversion factor.
///
/// Hard-coded for 4-decimal quoted pairs; changing it breaks numeric
/// compatibility with existing results.
pub const PIPS_PER_PRICE_UNIT: f64 = 10_000.0;

/// Inputs for a profit/loss projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfitLossInputs {
    /// Account balance in currency units
    pub account_balance: f64,

    /// Entry price
    pub entry: f64,

    /// Take-profit price
    pub take_profit: f64,

    /// Stop-loss price
    pub stop_loss: f64,

    /// Position size in lots
    pub lot_size: f64,

    /// Currency value of one pip per lot
    pub pip_value: f64,
}

/// Projected outcomes for both exits, rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitLossReport {
    /// Currency gained if take-profit is hit
    pub profit: f64,

    /// Currency lost if stop-loss is hit
    pub loss: f64,

    /// Profit as a percentage of the account balance
    pub profit_pct: f64,

    /// Loss as a percentage of the account balance
    pub loss_pct: f64,

    pub calculated_at: DateTime<Utc>,
}

impl ProfitLossInputs {
    /// Project profit and loss for both exit prices.
    ///
    /// Distances are taken as absolute values, so entry/exit ordering (long
    /// vs short) is irrelevant. A zero account balance yields infinite
    /// percentages rather than an error.
    pub fn compute(&self) -> ProfitLossReport {
        let pips_to_tp = (self.take_profit - self.entry).abs() * PIPS_PER_PRICE_UNIT;
        let pips_to_sl = (self.entry - self.stop_loss).abs() * PIPS_PER_PRICE_UNIT;

        let profit = pips_to_tp * self.lot_size * self.pip_value;
        let loss = pips_to_sl * self.lot_size * self.pip_value;

        ProfitLossReport {
            profit: round2(profit),
            loss: round2(loss),
            profit_pct: round2(profit / self.account_balance * 100.0),
            loss_pct: round2(loss / self.account_balance * 100.0),
            calculated_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for ProfitLossReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "If TP Hit: ${:.2} ({:.2}%)",
            self.profit, self.profit_pct
        )?;
        write!(f, "If SL Hit: ${:.2} ({:.2}%)", self.loss, self.loss_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfitLossInputs {
        ProfitLossInputs {
            account_balance: 10000.0,
            entry: 1.1000,
            take_profit: 1.1050,
            stop_loss: 1.0950,
            lot_size: 1.0,
            pip_value: 10.0,
        }
    }

    #[test]
    fn test_symmetric_exits() {
        // 50 pips to either exit
        let report = sample().compute();
        assert_eq!(report.profit, 500.0);
        assert_eq!(report.loss, 500.0);
        assert_eq!(report.profit_pct, 5.0);
        assert_eq!(report.loss_pct, 5.0);
    }

    #[test]
    fn test_direction_agnostic() {
        // Swapping take-profit and stop-loss at equal distances from entry
        // swaps nothing: both branches use absolute differences.
        let mut swapped = sample();
        std::mem::swap(&mut swapped.take_profit, &mut swapped.stop_loss);

        let a = sample().compute();
        let b = swapped.compute();
        assert_eq!(a.profit, b.profit);
        assert_eq!(a.loss, b.loss);
    }

    #[test]
    fn test_asymmetric_exits() {
        let inputs = ProfitLossInputs {
            take_profit: 1.1100, // 100 pips
            ..sample()
        };

        let report = inputs.compute();
        assert_eq!(report.profit, 1000.0);
        assert_eq!(report.loss, 500.0);
        assert_eq!(report.profit_pct, 10.0);
    }

    #[test]
    fn test_zero_balance_propagates() {
        let inputs = ProfitLossInputs {
            account_balance: 0.0,
            ..sample()
        };

        let report = inputs.compute();
        assert_eq!(report.profit, 500.0);
        assert!(report.profit_pct.is_infinite());
        assert!(report.loss_pct.is_infinite());
    }
}
