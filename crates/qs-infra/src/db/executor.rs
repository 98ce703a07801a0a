use std::sync::Arc;

use anyhow::Context;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

/// Runs a closure against a checked-out connection. Repositories stay
/// generic over this so tests can hand them any pool they like.
pub trait DbExecutor: Send + Sync {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T>;
}

/// The one production executor: every Diesel repository shares this pool.
#[derive(Clone)]
pub struct DieselSqliteExecutor {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl DieselSqliteExecutor {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

impl DbExecutor for DieselSqliteExecutor {
    fn run<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut conn = self
            .pool
            .get()
            .context("checking out a sqlite connection from the pool")?;
        f(&mut conn)
    }
}
