use crate::error::FooStoreError;
use crate::queryer::AnyQueryer;
use crate::types::DatabaseType;

#[cfg(feature = "postgres")]
use crate::postgres::{PostgresOptions, PostgresQueryer};
#[cfg(feature = "sqlite")]
use crate::sqlite::{SqliteOptions, SqliteQueryer};

/// Which backend to open and how.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    #[cfg(feature = "postgres")]
    Postgres(PostgresOptions),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteOptions),
}

impl StoreConfig {
    /// Assemble a config from loose settings, as given on a command line.
    ///
    /// `SQLite` falls back to an in-memory database; Postgres needs a URL.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError::ConfigError` when the chosen backend is missing a required setting.
    pub fn from_settings(
        database: DatabaseType,
        sqlite_path: Option<String>,
        postgres_url: Option<String>,
        pool_size: u32,
    ) -> Result<Self, FooStoreError> {
        match database {
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => {
                let url = postgres_url.ok_or_else(|| {
                    FooStoreError::ConfigError("a postgres url is required".to_string())
                })?;
                let pool_size = usize::try_from(pool_size)
                    .map_err(|e| FooStoreError::ConfigError(format!("pool size: {e}")))?;
                Ok(StoreConfig::Postgres(
                    PostgresOptions::from_url(url).with_pool_size(pool_size),
                ))
            }
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => {
                let _ = postgres_url;
                let path = sqlite_path.unwrap_or_else(|| ":memory:".to_string());
                Ok(StoreConfig::Sqlite(
                    SqliteOptions::new(path).with_pool_size(pool_size),
                ))
            }
        }
    }

    #[must_use]
    pub fn database_type(&self) -> DatabaseType {
        match self {
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(_) => DatabaseType::Postgres,
            #[cfg(feature = "sqlite")]
            StoreConfig::Sqlite(_) => DatabaseType::Sqlite,
        }
    }

    /// Open the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `FooStoreError` if the pool cannot be created or the database is unreachable.
    pub async fn connect(self) -> Result<AnyQueryer, FooStoreError> {
        match self {
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(opts) => Ok(PostgresQueryer::connect(opts).await?.into()),
            #[cfg(feature = "sqlite")]
            StoreConfig::Sqlite(opts) => Ok(SqliteQueryer::connect(opts).await?.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sqlite")]
    #[test]
    fn sqlite_defaults_to_memory() {
        let cfg = StoreConfig::from_settings(DatabaseType::Sqlite, None, None, 2).unwrap();
        match cfg {
            StoreConfig::Sqlite(opts) => {
                assert!(opts.is_memory());
                assert_eq!(opts.pool_size, 2);
            }
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(_) => panic!("expected sqlite config"),
        }
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn postgres_requires_url() {
        let err = StoreConfig::from_settings(DatabaseType::Postgres, None, None, 2).unwrap_err();
        assert!(matches!(err, FooStoreError::ConfigError(_)));

        let cfg = StoreConfig::from_settings(
            DatabaseType::Postgres,
            None,
            Some("postgres://localhost/foo".into()),
            2,
        )
        .unwrap();
        assert_eq!(cfg.database_type(), DatabaseType::Postgres);
    }
}
