use async_trait::async_trait;
use deadpool_postgres::Pool;

use super::config::PostgresOptions;
use super::params::Params;
use super::query::build_result_set;
use crate::error::FooStoreError;
use crate::queryer::Queryer;
use crate::results::ResultSet;
use crate::translation::{PlaceholderStyle, rebind};
use crate::types::{DatabaseType, RowValues};

/// [`Queryer`] over a deadpool of tokio-postgres clients, binding `$N` placeholders.
#[derive(Clone)]
pub struct PostgresQueryer {
    pool: Pool,
}

impl std::fmt::Debug for PostgresQueryer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresQueryer")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl PostgresQueryer {
    pub const PLACEHOLDER_STYLE: PlaceholderStyle = PlaceholderStyle::Postgres;

    /// Create the pool and check out one client to prove the server is reachable.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError` if the options are incomplete or no client can be obtained.
    pub async fn connect(opts: PostgresOptions) -> Result<Self, FooStoreError> {
        let pool_size = opts.pool_size;
        let pool = opts.create_pool()?;
        drop(pool.get().await?);
        tracing::info!(pool_size, "postgres pool ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl Queryer for PostgresQueryer {
    async fn exec(&self, query: &str, params: &[RowValues]) -> Result<usize, FooStoreError> {
        let client = self.pool.get().await?;
        let converted = Params::convert(params);
        let rows = client.execute(query, converted.as_refs()).await?;
        usize::try_from(rows).map_err(|e| {
            FooStoreError::ExecutionError(format!("postgres affected rows conversion error: {e}"))
        })
    }

    async fn select(&self, query: &str, params: &[RowValues]) -> Result<ResultSet, FooStoreError> {
        let client = self.pool.get().await?;
        let stmt = client.prepare_cached(query).await?;
        let converted = Params::convert(params);
        let rows = client.query(&stmt, converted.as_refs()).await?;
        build_result_set(&stmt, &rows)
    }

    fn rebind(&self, query: &str) -> String {
        rebind(query, Self::PLACEHOLDER_STYLE).into_owned()
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::Postgres
    }
}
