pub mod catalog_mapper;
pub mod line_item_mapper;
pub mod money;
pub mod project_mapper;
