use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use foo_store::{DatabaseType, FooStoreError, StoreConfig};

#[derive(Debug, Parser)]
#[command(
    name = "foo-server",
    about = "Serve and explore filtered listings of foo records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend to store records in
    #[arg(
        long,
        global = true,
        value_enum,
        env = "FOO_STORE_DATABASE",
        default_value = "sqlite"
    )]
    pub database: DatabaseType,

    /// SQLite database file; in-memory when omitted
    #[arg(long, global = true, env = "FOO_STORE_SQLITE_PATH")]
    pub sqlite_path: Option<String>,

    /// PostgreSQL connection URL
    #[arg(long, global = true, env = "FOO_STORE_POSTGRES_URL")]
    pub postgres_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, global = true, env = "FOO_STORE_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed ten records and serve `GET /foo`
    Serve {
        /// Address to bind the HTTP server to
        #[arg(long, env = "FOO_STORE_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
    /// Insert, list, and fetch a record, logging each step
    Demo,
}

impl Cli {
    pub fn store_config(&self) -> Result<StoreConfig, FooStoreError> {
        StoreConfig::from_settings(
            self.database,
            self.sqlite_path.clone(),
            self.postgres_url.clone(),
            self.pool_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_with_defaults() {
        let cli = Cli::try_parse_from(["foo-server", "serve"]).unwrap();
        assert_eq!(cli.pool_size, 4);
        assert!(matches!(cli.command, Command::Serve { addr } if addr.port() == 8080));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let argv = ["foo-server", "demo", "--sqlite-path", "foo.db", "--pool-size", "2"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert!(matches!(cli.command, Command::Demo));
        assert_eq!(cli.sqlite_path.as_deref(), Some("foo.db"));
        assert_eq!(cli.pool_size, 2);
    }
}
