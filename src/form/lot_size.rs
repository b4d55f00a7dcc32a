//! The "Lot Size" panel: position sizing from risk parameters.

use tracing::debug;

use crate::calc::{PositionSizeInputs, PositionSizeReport};

use super::{Field, FieldSet};

pub const ACCOUNT_SIZE: &str = "account_size";
pub const RISK_PERCENT: &str = "risk_percent";
pub const STOP_LOSS: &str = "stop_loss";
pub const PIP_VALUE: &str = "pip_value";

/// Form state for the position-size calculator.
pub struct LotSizePanel {
    pub fields: FieldSet,
    pub last_result: Option<PositionSizeReport>,
}

impl LotSizePanel {
    /// Fresh panel with the stock defaults (stop loss starts empty, so a
    /// calculation is skipped until the user fills it in).
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(vec![
                Field::new(ACCOUNT_SIZE, "Account Size", "10000"),
                Field::new(RISK_PERCENT, "Risk %", "1"),
                Field::new(STOP_LOSS, "Stop Loss (pips)", ""),
                Field::new(PIP_VALUE, "Pip Value", "10"),
            ]),
            last_result: None,
        }
    }

    /// Run the calculation if every field holds a number. A missing or
    /// unparsable field skips the calculation and leaves the previous
    /// result in place.
    pub fn calculate(&mut self) -> Option<&PositionSizeReport> {
        let inputs = PositionSizeInputs {
            account_size: self.fields.parsed(ACCOUNT_SIZE)?,
            risk_percent: self.fields.parsed(RISK_PERCENT)?,
            stop_loss_pips: self.fields.parsed(STOP_LOSS)?,
            pip_value: self.fields.parsed(PIP_VALUE)?,
        };

        let report = inputs.compute();
        debug!(lot_size = report.lot_size, "Lot size calculated");
        self.last_result = Some(report);
        self.last_result.as_ref()
    }
}

impl Default for LotSizePanel {
    fn default() -> Self {
        Self::new()
    }
}
