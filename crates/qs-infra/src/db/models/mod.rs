pub mod category_row;
pub mod cost_item_row;
pub mod line_item_row;
pub mod project_row;

pub use category_row::{CategoryRow, SubElementRow};
pub use cost_item_row::CostItemRow;
pub use line_item_row::{LineItemRow, NewLineItemRow};
pub use project_row::ProjectRow;
