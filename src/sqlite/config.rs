use std::sync::Arc;

use bb8::ManageConnection;
use tokio::sync::Mutex;

use super::executor::SqliteQueryer;
use crate::error::FooStoreError;

/// A rusqlite connection shared between the pool and the blocking task using it.
pub type SharedSqliteConnection = Arc<Mutex<rusqlite::Connection>>;

pub(crate) const MEMORY_PATH: &str = ":memory:";

/// Options for configuring a `SQLite` pool.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    pub db_path: String,
    pub pool_size: u32,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            pool_size: 4,
        }
    }

    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Every connection to `:memory:` opens a distinct database.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.db_path == MEMORY_PATH
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn pool_size(mut self, pool_size: u32) -> Self {
        self.opts.pool_size = pool_size;
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Build a pooled [`SqliteQueryer`].
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError` if the pool cannot be created or the first connection fails.
    pub async fn build(self) -> Result<SqliteQueryer, FooStoreError> {
        SqliteQueryer::connect(self.finish()).await
    }
}

/// bb8 manager opening rusqlite connections to one database path.
#[derive(Debug, Clone)]
pub struct SqliteManager {
    db_path: String,
}

impl SqliteManager {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }
}

impl ManageConnection for SqliteManager {
    type Connection = SharedSqliteConnection;
    type Error = FooStoreError;

    async fn connect(&self) -> Result<Self::Connection, Self::Error> {
        let path = self.db_path.clone();
        let conn = tokio::task::spawn_blocking(move || rusqlite::Connection::open(path))
            .await
            .map_err(|e| {
                FooStoreError::ConnectionError(format!("sqlite open join error: {e}"))
            })??;
        tracing::debug!(db_path = %self.db_path, "opened sqlite connection");
        Ok(Arc::new(Mutex::new(conn)))
    }

    async fn is_valid(&self, conn: &mut Self::Connection) -> Result<(), Self::Error> {
        run_blocking(Arc::clone(conn), |guard| {
            guard
                .execute_batch("SELECT 1")
                .map_err(FooStoreError::SqliteError)
        })
        .await
    }

    fn has_broken(&self, _conn: &mut Self::Connection) -> bool {
        false
    }
}

/// Run synchronous rusqlite work on a blocking thread.
pub(crate) async fn run_blocking<F, R>(
    conn: SharedSqliteConnection,
    func: F,
) -> Result<R, FooStoreError>
where
    F: FnOnce(&mut rusqlite::Connection) -> Result<R, FooStoreError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut guard = conn.blocking_lock();
        func(&mut guard)
    })
    .await
    .map_err(|e| FooStoreError::ExecutionError(format!("sqlite spawn_blocking join error: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_pool_size() {
        let opts = SqliteOptionsBuilder::new("foo.db".into()).pool_size(9).finish();
        assert_eq!(opts.pool_size, 9);
        assert!(!opts.is_memory());
        assert!(SqliteOptions::new(MEMORY_PATH.into()).is_memory());
    }
}
