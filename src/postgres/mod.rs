// Postgres backend
//
// - config: pool options and validation
// - params: `ToSql` for `RowValues`
// - query: result set extraction
// - executor: the `Queryer` implementation

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::PostgresOptions;
pub use executor::PostgresQueryer;
pub use params::Params;
pub use query::build_result_set;
