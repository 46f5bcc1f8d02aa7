mod commands;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facevault_core::{
    DEFAULT_EMBEDDING_SERVICE_URL, DEFAULT_EMBEDDING_TIMEOUT_SECS, DEFAULT_UPLOAD_TIMEOUT_SECS,
    DatabaseConfig, MatchConfig, env_parse_with_default, env_string,
};
use facevault_embeddings::RemoteEmbedder;
use facevault_service::RecognitionService;
use facevault_storage::{StorageBackend, ensure_database};
use facevault_upload::UploadClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "facevault")]
#[command(about = "Face enrollment and identification service backed by pgvector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep embeddings in process memory instead of PostgreSQL
        #[arg(long)]
        memory: bool,
    },
    /// Create the database, extension and table if missing
    Migrate,
    /// Truncate every table in the database
    Reset {
        /// Confirm the irreversible truncation
        #[arg(long)]
        yes: bool,
    },
    /// Print the enrollment records of a person as JSON
    Records { person_id: String },
}

/// Create the database if needed, then connect and apply the schema.
pub(crate) async fn connect_postgres() -> Result<StorageBackend> {
    let config = DatabaseConfig::from_env();
    if let Some(maintenance_url) = config.maintenance_url() {
        ensure_database(&maintenance_url, &config.name)
            .await
            .with_context(|| format!("failed to ensure database '{}' exists", config.name))?;
    }
    StorageBackend::new_postgres(&config.database_url())
        .await
        .context("failed to connect to PostgreSQL")
}

pub(crate) fn build_service(storage: StorageBackend) -> Result<RecognitionService> {
    let embedding_url = env_string(&["EMBEDDING_SERVICE_URL"])
        .unwrap_or_else(|| DEFAULT_EMBEDDING_SERVICE_URL.to_owned());
    let embedding_timeout =
        env_parse_with_default("EMBEDDING_TIMEOUT_SECS", DEFAULT_EMBEDDING_TIMEOUT_SECS);
    let embedder = RemoteEmbedder::new(&embedding_url, Duration::from_secs(embedding_timeout))?;

    let upload_url = env_string(&["UPLOAD_API_URL", "API_UPLOAD"]);
    if upload_url.is_none() {
        tracing::warn!("UPLOAD_API_URL not set, /create-user will fail");
    }
    let upload_timeout = env_parse_with_default("UPLOAD_TIMEOUT_SECS", DEFAULT_UPLOAD_TIMEOUT_SECS);
    let uploader = UploadClient::new(upload_url, Duration::from_secs(upload_timeout))?;

    tracing::info!(embedding_url = %embedder.base_url(), "using remote face model");
    Ok(RecognitionService::new(
        Arc::new(storage),
        Arc::new(embedder),
        Arc::new(uploader),
        MatchConfig::from_env(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await,
        Commands::Migrate => commands::migrate::run().await,
        Commands::Reset { yes } => commands::reset::run(yes).await,
        Commands::Records { person_id } => commands::records::run(&person_id).await,
    }
}
