//! Main entry point for CLI command to start the API server.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::configuration::Configuration;
use crate::configuration::generate_config_schema;
use crate::schema::build_schema;
use crate::server;
use crate::store::DocumentStore;
use crate::store::InMemoryStore;
use crate::store::MongoStore;

/// Options for the API server
#[derive(Parser, Debug)]
#[command(name = "energuide-api", about = "EnerGuide evaluations GraphQL API", version)]
pub(crate) struct Opt {
    /// Log level (off|error|warn|info|debug|trace).
    #[arg(long = "log", default_value = "info", env = "ENERGUIDE_LOG")]
    log_level: String,

    /// Configuration file location.
    #[arg(short, long = "config", env = "ENERGUIDE_CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Serve evaluations from a JSON file instead of MongoDB.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Prints the configuration schema.
    #[arg(long)]
    config_schema: bool,

    /// Prints the GraphQL schema.
    #[arg(long)]
    sdl: bool,
}

/// This is the main API server entrypoint.
pub fn main() -> Result<()> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(nb) = std::env::var("ENERGUIDE_NUM_CORES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
    {
        builder.worker_threads(nb);
    }
    let runtime = builder.build()?;
    runtime.block_on(Executable::start())
}

/// Entry point into creating an API server executable.
pub struct Executable {}

impl Executable {
    /// Parses the command line, sets up logging and serves until interrupted.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start() -> Result<()> {
        let opt = Opt::parse();

        if opt.config_schema {
            let schema = generate_config_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            return Ok(());
        }

        let builder = tracing_subscriber::fmt().with_env_filter(
            EnvFilter::try_new(&opt.log_level).context("could not parse log configuration")?,
        );
        let installed = if std::io::stdout().is_terminal() {
            builder.try_init()
        } else {
            builder.json().try_init()
        };
        installed.map_err(|err| anyhow!(err))?;

        let configuration = Configuration::load(opt.config_path.as_deref())?;

        if opt.sdl {
            let schema = build_schema(Arc::new(InMemoryStore::default()), &configuration.graphql);
            println!("{}", schema.sdl());
            return Ok(());
        }

        tracing::info!("EnerGuide API v{}", std::env!("CARGO_PKG_VERSION"));
        let store: Arc<dyn DocumentStore> = match &opt.fixtures {
            Some(path) => {
                let fixtures = InMemoryStore::from_json_file(path)?;
                if fixtures.is_empty() {
                    tracing::warn!(path = %path.display(), "no evaluations in the fixtures file");
                } else {
                    tracing::info!(
                        path = %path.display(),
                        records = fixtures.len(),
                        "loaded evaluation fixtures"
                    );
                }
                Arc::new(fixtures)
            }
            None => Arc::new(MongoStore::connect(&configuration.database).await?),
        };
        let schema = build_schema(store, &configuration.graphql);

        if let Err(err) = server::serve(schema, &configuration.server, shutdown_signal()).await {
            tracing::error!("{}", err);
            return Err(err.into());
        }
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "could not listen for the shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
