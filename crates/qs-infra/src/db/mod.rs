pub mod executor;
pub mod mapper;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use executor::{DbExecutor, DieselSqliteExecutor};
pub use pool::{init_db_pool, init_from_config, DbPool};
