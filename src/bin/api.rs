//! Movies API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use movies::api::{self, ApiError, Config};
use movies::db::{Database, DbError, SqliteDatabase};
use movies::paths::get_db_path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(movies::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(movies::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(movies::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "movies-api")]
#[command(author, version, about = "Movie catalogue API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: MOVIES_HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: MOVIES_PORT, default: 8080]
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (defaults to XDG data directory: ~/.local/share/movies/movies.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Maximum number of pooled database connections
    #[arg(long, default_value = "5")]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    // Precedence: CLI flag > env var > default
    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db_path = cli.db.unwrap_or_else(get_db_path);
    info!("Opening database at {:?}", db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path, cli.max_connections).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
