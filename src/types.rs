use chrono::NaiveDateTime;
use clap::ValueEnum;

/// Values that can be bound as query parameters or read back from a row.
///
/// The same enum is used by every backend so the query builder never has to know which driver
/// will eventually bind its parameters:
/// ```rust
/// use foo_store::prelude::*;
///
/// let params = vec![RowValues::Int(3), RowValues::Text("hello".into())];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// NULL value
    Null,
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RowValues::Bool(value) => Some(*value),
            RowValues::Int(1) => Some(true),
            RowValues::Int(0) => Some(false),
            _ => None,
        }
    }

    /// Timestamps arrive natively from Postgres and as text from `SQLite`.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // CURRENT_TIMESTAMP: "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // strftime('%Y-%m-%d %H:%M:%f'): "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

impl From<i64> for RowValues {
    fn from(value: i64) -> Self {
        RowValues::Int(value)
    }
}

impl From<&str> for RowValues {
    fn from(value: &str) -> Self {
        RowValues::Text(value.to_string())
    }
}

impl From<String> for RowValues {
    fn from(value: String) -> Self {
        RowValues::Text(value)
    }
}

/// The database backends compiled into this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DatabaseType {
    /// `PostgreSQL` database
    #[cfg(feature = "postgres")]
    Postgres,
    /// `SQLite` database
    #[cfg(feature = "sqlite")]
    Sqlite,
}

impl DatabaseType {
    /// DDL for the `foo` table in this dialect.
    #[must_use]
    pub fn foo_table_ddl(self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => {
                "CREATE TABLE IF NOT EXISTS foo (
                    id BIGSERIAL PRIMARY KEY,
                    value TEXT,
                    timestamp TIMESTAMP
                )"
            }
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => {
                "CREATE TABLE IF NOT EXISTS foo (
                    id INTEGER PRIMARY KEY,
                    value TEXT,
                    timestamp DATETIME
                )"
            }
        }
    }

    /// Expression yielding the current UTC time as stored in `foo.timestamp`.
    #[must_use]
    pub fn now_expr(self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => "(now() AT TIME ZONE 'utc')",
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => "CURRENT_TIMESTAMP",
        }
    }
}
