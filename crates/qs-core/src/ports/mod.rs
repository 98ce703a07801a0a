//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the persistence
//! implementations, so the engine can be exercised against in-memory
//! fakes without touching a real database.

pub mod catalog_repository;
pub mod line_item_repository;
pub mod project_repository;

pub use catalog_repository::CatalogRepositoryPort;
pub use line_item_repository::LineItemRepositoryPort;
pub use project_repository::ProjectRepositoryPort;
