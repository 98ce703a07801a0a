//! Estimate domain: models and the calculation engine.
//!
//! The engine turns a project's persisted line items plus a read-only
//! pricing snapshot into a hierarchically-grouped financial summary:
//!
//! line items + snapshot -> [`normalize`] -> computed lines
//!   -> [`aggregate_by_category`] -> category aggregates
//!   -> [`calculate`] -> [`ProjectEstimateTotals`]
//!
//! Every consumer that produces subtotals, grand totals or export output
//! must go through this path; the cached `line_total` on a persisted line
//! is a display hint only.

pub mod aggregate;
pub mod catalog;
pub mod computed;
pub mod error;
pub mod line_item;
pub mod normalize;
pub mod project;
pub mod snapshot;
pub mod totals;

pub use aggregate::aggregate_by_category;
pub use catalog::{CategoryRef, CostCatalogItem, UnitRef};
pub use computed::{CategoryAggregate, ComputedLine, ProjectEstimateTotals, UnresolvedLine};
pub use error::EstimateError;
pub use line_item::{
    LineItem, LineItemOrigin, LineItemPatch, LineItemValidationError, NewLineItem,
};
pub use normalize::{normalize, NormalizeError, PricingLookups};
pub use project::Project;
pub use snapshot::PricingSnapshot;
pub use totals::calculate;
