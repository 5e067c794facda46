//! CLI entry point for the vector store diagnostic

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vectordb_doctor::settings::{
    DEFAULT_COLLECTION, DEFAULT_HOST, DEFAULT_PERSIST_DIRECTORY, DEFAULT_PORT,
};
use vectordb_doctor::{Doctor, DoctorConfig, LibraryConnector};

#[derive(Parser)]
#[command(name = "vectordb-doctor")]
#[command(about = "Check which vector store client configuration works", long_about = None)]
struct Cli {
    /// Server host for the remote and REST-settings probes
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server HTTP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Persistence directory for the embedded store
    #[arg(long, default_value = DEFAULT_PERSIST_DIRECTORY)]
    persist_dir: PathBuf,

    /// Collection to get or create
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    collection: String,

    /// Exit with status 1 when every probe fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = DoctorConfig {
        host: cli.host,
        port: cli.port,
        persist_directory: cli.persist_dir,
        collection: cli.collection,
    };

    let doctor = Doctor::new(config, LibraryConnector);
    let outcomes = doctor.run(&mut std::io::stdout()).await?;

    if cli.strict && outcomes.all_failed() {
        std::process::exit(1);
    }
    Ok(())
}
