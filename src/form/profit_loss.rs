//! The "Calculator" panel: profit/loss projection with adjustable prices.

use tracing::debug;

use crate::calc::{ProfitLossInputs, ProfitLossReport};

use super::{adjust_value, Field, FieldSet};

pub const ACCOUNT_BALANCE: &str = "account_balance";
pub const ENTRY: &str = "entry";
pub const TAKE_PROFIT: &str = "take_profit";
pub const STOP_LOSS: &str = "stop_loss";
pub const LOT_SIZE: &str = "lot_size";
pub const PIP_VALUE: &str = "pip_value";

/// Price fields that expose +/- stepping controls.
pub const ADJUSTABLE: [&str; 3] = [ENTRY, TAKE_PROFIT, STOP_LOSS];

/// Form state for the profit/loss projector.
pub struct ProfitLossPanel {
    pub fields: FieldSet,
    pub last_result: Option<ProfitLossReport>,
}

impl ProfitLossPanel {
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(vec![
                Field::new(ACCOUNT_BALANCE, "Account Balance", "10000"),
                Field::new(ENTRY, "Entry Price", ""),
                Field::new(TAKE_PROFIT, "Take Profit", ""),
                Field::new(STOP_LOSS, "Stop Loss", ""),
                Field::new(LOT_SIZE, "Lot Size", ""),
                Field::new(PIP_VALUE, "Pip Value", "10"),
            ]),
            last_result: None,
        }
    }

    /// Run the projection if every field holds a number; otherwise skip and
    /// keep the previous result.
    pub fn calculate(&mut self) -> Option<&ProfitLossReport> {
        let inputs = ProfitLossInputs {
            account_balance: self.fields.parsed(ACCOUNT_BALANCE)?,
            entry: self.fields.parsed(ENTRY)?,
            take_profit: self.fields.parsed(TAKE_PROFIT)?,
            stop_loss: self.fields.parsed(STOP_LOSS)?,
            lot_size: self.fields.parsed(LOT_SIZE)?,
            pip_value: self.fields.parsed(PIP_VALUE)?,
        };

        let report = inputs.compute();
        debug!(
            profit = report.profit,
            loss = report.loss,
            "Profit/loss projected"
        );
        self.last_result = Some(report);
        self.last_result.as_ref()
    }

    /// Step a price field up or down by one unit of its last decimal place.
    /// Returns the new value, or `None` for an unknown or locked field.
    pub fn adjust(&mut self, key: &str, increment: bool) -> Option<String> {
        let adjusted = adjust_value(self.fields.get(key)?, increment);
        if !self.fields.set(key, adjusted.clone()) {
            return None;
        }
        Some(adjusted)
    }
}

impl Default for ProfitLossPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProfitLossPanel {
        let mut panel = ProfitLossPanel::new();
        panel.fields.set(ENTRY, "1.1000".to_string());
        panel.fields.set(TAKE_PROFIT, "1.1050".to_string());
        panel.fields.set(STOP_LOSS, "1.0950".to_string());
        panel.fields.set(LOT_SIZE, "1".to_string());
        panel
    }

    #[test]
    fn test_full_projection() {
        let mut panel = filled();
        let report = panel.calculate().unwrap();
        assert_eq!(report.profit, 500.0);
        assert_eq!(report.loss, 500.0);
        assert_eq!(report.profit_pct, 5.0);
        assert_eq!(report.loss_pct, 5.0);
    }

    #[test]
    fn test_skips_on_empty_field() {
        let mut panel = ProfitLossPanel::new();
        assert!(panel.calculate().is_none());

        let mut panel = filled();
        panel.calculate();
        panel.fields.set(LOT_SIZE, "".to_string());
        assert!(panel.calculate().is_none());
        assert!(panel.last_result.is_some());
    }

    #[test]
    fn test_adjust_steps_by_last_decimal_place() {
        let mut panel = filled();
        assert_eq!(panel.adjust(ENTRY, true).as_deref(), Some("1.1001"));
        assert_eq!(panel.adjust(ENTRY, false).as_deref(), Some("1.1000"));

        // Empty field becomes "0" on the first press.
        let mut panel = ProfitLossPanel::new();
        assert_eq!(panel.adjust(STOP_LOSS, true).as_deref(), Some("0"));
    }

    #[test]
    fn test_adjust_respects_lock() {
        let mut panel = filled();
        panel.fields.toggle_lock(ENTRY);
        assert!(panel.adjust(ENTRY, true).is_none());
        assert_eq!(panel.fields.get(ENTRY), Some("1.1000"));
    }
}
