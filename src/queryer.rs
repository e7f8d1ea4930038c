use async_trait::async_trait;

use crate::error::FooStoreError;
use crate::results::ResultSet;
use crate::types::{DatabaseType, RowValues};

#[cfg(feature = "postgres")]
use crate::postgres::PostgresQueryer;
#[cfg(feature = "sqlite")]
use crate::sqlite::SqliteQueryer;

/// What the store needs from a database: run a statement, run a query, and rewrite `?`
/// placeholders into the backend's own binding convention.
///
/// Implementations own connection lifecycle, timeouts, and cancellation. Errors from the driver
/// are returned as-is; nothing here retries.
#[async_trait]
pub trait Queryer: Send + Sync {
    /// Executes a single statement and returns the number of rows affected.
    async fn exec(&self, query: &str, params: &[RowValues]) -> Result<usize, FooStoreError>;

    /// Executes a single query and returns every row it produced.
    async fn select(&self, query: &str, params: &[RowValues]) -> Result<ResultSet, FooStoreError>;

    /// Rewrites a statement written with `?` placeholders for this backend.
    fn rebind(&self, query: &str) -> String;

    /// Dialect used for schema and default-value SQL.
    fn database_type(&self) -> DatabaseType;
}

/// Whichever backend was configured at runtime.
#[derive(Debug, Clone)]
pub enum AnyQueryer {
    #[cfg(feature = "postgres")]
    Postgres(PostgresQueryer),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteQueryer),
}

#[async_trait]
impl Queryer for AnyQueryer {
    async fn exec(&self, query: &str, params: &[RowValues]) -> Result<usize, FooStoreError> {
        match self {
            #[cfg(feature = "postgres")]
            AnyQueryer::Postgres(db) => db.exec(query, params).await,
            #[cfg(feature = "sqlite")]
            AnyQueryer::Sqlite(db) => db.exec(query, params).await,
        }
    }

    async fn select(&self, query: &str, params: &[RowValues]) -> Result<ResultSet, FooStoreError> {
        match self {
            #[cfg(feature = "postgres")]
            AnyQueryer::Postgres(db) => db.select(query, params).await,
            #[cfg(feature = "sqlite")]
            AnyQueryer::Sqlite(db) => db.select(query, params).await,
        }
    }

    fn rebind(&self, query: &str) -> String {
        match self {
            #[cfg(feature = "postgres")]
            AnyQueryer::Postgres(db) => db.rebind(query),
            #[cfg(feature = "sqlite")]
            AnyQueryer::Sqlite(db) => db.rebind(query),
        }
    }

    fn database_type(&self) -> DatabaseType {
        match self {
            #[cfg(feature = "postgres")]
            AnyQueryer::Postgres(db) => db.database_type(),
            #[cfg(feature = "sqlite")]
            AnyQueryer::Sqlite(db) => db.database_type(),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<PostgresQueryer> for AnyQueryer {
    fn from(db: PostgresQueryer) -> Self {
        AnyQueryer::Postgres(db)
    }
}

#[cfg(feature = "sqlite")]
impl From<SqliteQueryer> for AnyQueryer {
    fn from(db: SqliteQueryer) -> Self {
        AnyQueryer::Sqlite(db)
    }
}
