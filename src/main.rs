use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::load_config;
use database::DbRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use web_server::{resolve_cutoff, run_server, AppState};

/// Read-only JSON API over the Hawaii climate observations store.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML settings file. Missing is fine; defaults apply.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the store and serve the API (the default).
    Serve,
    /// Open the store, verify its schema, report what it holds, and exit.
    Check,
}

/// The main entry point. Requests are handled one at a time on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error; it only supplies CLIMATE__* overrides.
    dotenvy::dotenv().ok();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let settings = load_config(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    // Fatal if the store is missing or malformed; no listener is bound.
    let db_repo = DbRepository::open(&settings.database.url)
        .await
        .context("opening the climate store")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let cutoff_date = resolve_cutoff(&settings.observations, &db_repo).await?;
            let state = Arc::new(AppState {
                db_repo,
                cutoff_date,
            });
            run_server(&settings.server.address(), state).await?;
        }
        Commands::Check => {
            let stations = db_repo.station_count().await?;
            let latest = db_repo.latest_observation_date().await?;
            tracing::info!(
                stations,
                latest = latest.as_deref().unwrap_or("none"),
                "Climate store looks healthy."
            );
        }
    }

    Ok(())
}
