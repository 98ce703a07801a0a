//! # qs-core
//!
//! Core domain models and the estimate calculation engine for the
//! cost-estimation service.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies.

// Public module exports
pub mod config;
pub mod estimate;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::EstimateConfig;
pub use estimate::{
    aggregate_by_category, calculate, normalize, CategoryAggregate, CategoryRef, ComputedLine,
    CostCatalogItem, EstimateError, LineItem, LineItemOrigin, LineItemPatch,
    LineItemValidationError, NewLineItem, NormalizeError, PricingLookups, PricingSnapshot,
    Project, ProjectEstimateTotals, UnitRef, UnresolvedLine,
};
pub use ids::{CategoryId, CostItemId, LineItemId, ProjectId};
