use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bb8::Pool;
use rusqlite::params_from_iter;

use super::config::{SqliteManager, SqliteOptions, run_blocking};
use super::params::Params;
use super::query::build_result_set;
use crate::error::FooStoreError;
use crate::queryer::Queryer;
use crate::results::ResultSet;
use crate::translation::{PlaceholderStyle, rebind};
use crate::types::{DatabaseType, RowValues};

/// [`Queryer`] over a bb8 pool of rusqlite connections, binding `?N` placeholders.
#[derive(Clone)]
pub struct SqliteQueryer {
    pool: Pool<SqliteManager>,
    max_size: u32,
}

impl std::fmt::Debug for SqliteQueryer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteQueryer")
            .field("max_size", &self.max_size)
            .field("state", &self.pool.state())
            .finish()
    }
}

impl SqliteQueryer {
    pub const PLACEHOLDER_STYLE: PlaceholderStyle = PlaceholderStyle::Sqlite;

    /// Create the pool and check out one connection to prove the path opens.
    ///
    /// A `:memory:` database lives only as long as its connection, so such pools hold exactly
    /// one connection that is never reaped.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError` if the pool cannot be built or the database cannot be opened.
    pub async fn connect(opts: SqliteOptions) -> Result<Self, FooStoreError> {
        let max_size = if opts.is_memory() {
            1
        } else {
            opts.pool_size.max(1)
        };
        let mut builder = Pool::builder().max_size(max_size);
        if opts.is_memory() {
            builder = builder
                .min_idle(Some(1))
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = builder
            .build(SqliteManager::new(opts.db_path.clone()))
            .await?;

        {
            let conn = pool.get().await?;
            // WAL only applies to file-backed databases.
            if !opts.is_memory() {
                run_blocking(Arc::clone(&*conn), |guard| {
                    guard
                        .execute_batch("PRAGMA journal_mode = WAL;")
                        .map_err(FooStoreError::SqliteError)
                })
                .await?;
            }
        }

        tracing::info!(db_path = %opts.db_path, pool_size = max_size, "sqlite pool ready");
        Ok(Self { pool, max_size })
    }

    /// Most connections the pool will open; always 1 for `:memory:`.
    #[must_use]
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

#[async_trait]
impl Queryer for SqliteQueryer {
    async fn exec(&self, query: &str, params: &[RowValues]) -> Result<usize, FooStoreError> {
        let converted = Params::convert(params).0;
        let sql_owned = query.to_owned();
        let conn = self.pool.get().await?;
        run_blocking(Arc::clone(&*conn), move |guard| {
            guard
                .execute(&sql_owned, params_from_iter(converted.iter()))
                .map_err(FooStoreError::SqliteError)
        })
        .await
    }

    async fn select(&self, query: &str, params: &[RowValues]) -> Result<ResultSet, FooStoreError> {
        let converted = Params::convert(params).0;
        let sql_owned = query.to_owned();
        let conn = self.pool.get().await?;
        run_blocking(Arc::clone(&*conn), move |guard| {
            let mut stmt = guard.prepare(&sql_owned)?;
            build_result_set(&mut stmt, &converted)
        })
        .await
    }

    fn rebind(&self, query: &str) -> String {
        rebind(query, Self::PLACEHOLDER_STYLE).into_owned()
    }

    fn database_type(&self) -> DatabaseType {
        DatabaseType::Sqlite
    }
}
