//! Form surface: field state, the lock discipline, value stepping, and the
//! two calculator panels.

mod adjust;
mod field;
pub mod lot_size;
pub mod profit_loss;

pub use adjust::adjust_value;
pub use field::{Field, FieldSet};
pub use lot_size::LotSizePanel;
pub use profit_loss::ProfitLossPanel;
