use deadpool_postgres::{Config as PgConfig, PoolConfig, Runtime};
use tokio_postgres::NoTls;

use super::executor::PostgresQueryer;
use crate::error::FooStoreError;

/// Options for configuring a Postgres pool.
#[derive(Debug, Clone)]
pub struct PostgresOptions {
    pub config: PgConfig,
    pub pool_size: usize,
}

impl PostgresOptions {
    #[must_use]
    pub fn new(config: PgConfig) -> Self {
        Self {
            config,
            pool_size: 4,
        }
    }

    /// Options from a connection URL such as `postgres://user:pw@localhost:5432/foo`.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        let mut config = PgConfig::new();
        config.url = Some(url.into());
        Self::new(config)
    }

    #[must_use]
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Without a URL, the discrete fields must name a database, a host, and a user.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError::ConfigError` naming the first missing field.
    pub fn validate(&self) -> Result<(), FooStoreError> {
        if self.config.url.is_some() {
            return Ok(());
        }
        if self.config.dbname.is_none() {
            return Err(FooStoreError::ConfigError("dbname is required".to_string()));
        }
        if self.config.host.is_none() && self.config.hosts.is_none() {
            return Err(FooStoreError::ConfigError("host is required".to_string()));
        }
        if self.config.user.is_none() {
            return Err(FooStoreError::ConfigError("user is required".to_string()));
        }
        Ok(())
    }

    /// Build a pooled [`PostgresQueryer`].
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError::ConfigError` for incomplete options or
    /// `FooStoreError::ConnectionError` if the pool cannot be created.
    pub async fn build(self) -> Result<PostgresQueryer, FooStoreError> {
        PostgresQueryer::connect(self).await
    }

    pub(crate) fn create_pool(mut self) -> Result<deadpool_postgres::Pool, FooStoreError> {
        self.validate()?;
        self.config.pool = Some(PoolConfig::new(self.pool_size.max(1)));
        self.config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| {
                FooStoreError::ConnectionError(format!("Failed to create Postgres pool: {e}"))
            })
    }
}
