//! A small record store for `foo` rows over `PostgreSQL` or `SQLite`.
//!
//! Listing goes through a filter-to-SQL builder: a [`filter::FooListOptions`] (usually decoded
//! from a URL query string) appends its conditions to a [`query_builder::Wheres`], the statement
//! is assembled with `?` placeholders, and the chosen [`queryer::Queryer`] rebinds them into its
//! own convention before running it.
//!
//! ```rust,no_run
//! use foo_store::prelude::*;
//!
//! # async fn run() -> Result<(), FooStoreError> {
//! let db = SqliteQueryer::connect(SqliteOptions::new(":memory:".into())).await?;
//! let store = FooStore::new(db);
//! store.create_table().await?;
//! let id = store.insert("hello world").await?;
//!
//! let opts = decode_query(&format!("id={id}&page_size=10"))?;
//! let found = store.list(&opts).await?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("enable at least one of the `sqlite` or `postgres` features");

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod prelude;
pub mod query_builder;
pub mod queryer;
pub mod results;
pub mod store;
pub mod translation;
pub mod types;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "server")]
pub mod api;

pub use config::StoreConfig;
pub use error::FooStoreError;
pub use filter::{FooListOptions, ListFilter, decode_query};
pub use model::Foo;
pub use queryer::{AnyQueryer, Queryer};
pub use store::FooStore;
pub use types::{DatabaseType, RowValues};
