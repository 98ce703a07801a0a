//! # qs-infra
//!
//! Diesel/SQLite persistence for the cost-estimation service: schema, row
//! models, row-to-domain mappers and the repository implementations of the
//! `qs-core` ports.

pub mod config;
pub mod db;

pub use config::StorageConfig;
