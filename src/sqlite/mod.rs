// SQLite backend
//
// - config: options, builder, and the bb8 connection manager
// - params: parameter conversion from `RowValues`
// - query: result set extraction
// - executor: the `Queryer` implementation

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::{SharedSqliteConnection, SqliteManager, SqliteOptions, SqliteOptionsBuilder};
pub use executor::SqliteQueryer;
pub use query::build_result_set;
