//! Convenient imports for common functionality.
//!
//! Re-exports what most callers need to open a backend, build filters, and read records.

pub use crate::config::StoreConfig;
pub use crate::error::FooStoreError;
pub use crate::filter::{FooListOptions, ListFilter, decode_pairs, decode_query};
pub use crate::model::Foo;
pub use crate::query_builder::{Page, Wheres, build_statement};
pub use crate::queryer::{AnyQueryer, Queryer};
pub use crate::results::{DbRow, ResultSet};
pub use crate::store::FooStore;
pub use crate::translation::{PlaceholderStyle, rebind};
pub use crate::types::{DatabaseType, RowValues};

#[cfg(feature = "postgres")]
pub use crate::postgres::{PostgresOptions, PostgresQueryer};

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteOptions, SqliteOptionsBuilder, SqliteQueryer};
