pub mod add_line_item;
pub mod get_estimate_summary;
pub mod list_line_items;
pub mod remove_line_item;
pub mod update_line_item;

mod pricing;

pub use add_line_item::AddLineItem;
pub use get_estimate_summary::GetEstimateSummary;
pub use list_line_items::ListLineItems;
pub use remove_line_item::RemoveLineItem;
pub use update_line_item::UpdateLineItem;

#[cfg(test)]
pub(crate) mod support;
