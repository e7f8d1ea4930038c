use thiserror::Error;

#[derive(Debug, Error)]
pub enum FooStoreError {
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    PostgresError(#[from] tokio_postgres::Error),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[cfg(feature = "postgres")]
    #[error(transparent)]
    PoolErrorPostgres(#[from] deadpool_postgres::PoolError),

    /// A filter field could not be decoded from external input.
    #[error("Filter decode error for `{key}`: {message}")]
    DecodeError { key: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    /// A returned row could not be mapped onto a record.
    #[error("Row conversion error: {0}")]
    ConversionError(String),
}

impl FooStoreError {
    pub(crate) fn decode(key: impl Into<String>, message: impl Into<String>) -> Self {
        FooStoreError::DecodeError {
            key: key.into(),
            message: message.into(),
        }
    }

    /// True when the error came from decoding caller input rather than from the database.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, FooStoreError::DecodeError { .. })
    }
}

#[cfg(feature = "sqlite")]
impl From<bb8::RunError<FooStoreError>> for FooStoreError {
    fn from(err: bb8::RunError<FooStoreError>) -> Self {
        match err {
            bb8::RunError::User(inner) => inner,
            bb8::RunError::TimedOut => {
                FooStoreError::ConnectionError("SQLite pool checkout timed out".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_flagged() {
        let err = FooStoreError::decode("page", "invalid digit found in string");
        assert!(err.is_decode_error());
        assert_eq!(
            err.to_string(),
            "Filter decode error for `page`: invalid digit found in string"
        );
        assert!(!FooStoreError::ExecutionError("boom".into()).is_decode_error());
    }
}
