//! Usage:
//! ```bash
//! # Seed ten records into an in-memory SQLite database and serve them
//! foo-server serve --addr 127.0.0.1:8080
//! curl 'http://127.0.0.1:8080/foo?id=2&id=4'
//!
//! # Same against PostgreSQL
//! FOO_STORE_POSTGRES_URL=postgres://localhost/foo foo-server --database postgres serve
//!
//! # Insert, list, and fetch once, then exit
//! foo-server demo
//! ```

mod args;

use clap::Parser;
use foo_store::prelude::*;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};

const SEED_ROWS: usize = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.store_config()?;
    info!(database = ?config.database_type(), "connecting");
    let store = FooStore::new(config.connect().await?);
    store.create_table().await?;

    match cli.command {
        Command::Serve { addr } => serve(store, addr).await,
        Command::Demo => demo(&store).await,
    }
}

async fn serve(
    store: FooStore<AnyQueryer>,
    addr: std::net::SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    for i in 0..SEED_ROWS {
        let id = store.insert(&format!("hello world {i}")).await?;
        info!(id, "inserted foo record");
    }

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting http server");
    axum::serve(listener, foo_store::api::router(store)).await?;
    Ok(())
}

async fn demo(store: &FooStore<AnyQueryer>) -> Result<(), Box<dyn std::error::Error>> {
    let id = store.insert("hello world").await?;
    info!(id, "inserted foo record");

    let all = store.list_all().await?;
    info!(records = %serde_json::to_string(&all)?, "listed every foo record");

    match store.get(id).await? {
        Some(foo) => info!(record = %serde_json::to_string(&foo)?, "fetched foo record"),
        None => info!(id, "foo record vanished"),
    }
    Ok(())
}
