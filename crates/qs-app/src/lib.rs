//! # qs-app
//!
//! Application layer: use cases orchestrating the estimate engine and the
//! persistence ports.

pub mod usecases;

pub use usecases::get_estimate_summary::{EstimateSummary, GetEstimateSummary};
pub use usecases::{AddLineItem, ListLineItems, RemoveLineItem, UpdateLineItem};
