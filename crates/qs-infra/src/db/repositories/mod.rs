pub mod catalog_repo;
pub mod line_item_repo;
pub mod project_repo;

pub use catalog_repo::DieselCatalogRepository;
pub use line_item_repo::DieselLineItemRepository;
pub use project_repo::DieselProjectRepository;
