mod application;
mod config;
mod domain;
mod infrastructure;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use application::agent::{Agent, SYSTEM_PROMPT};
use application::shell;
use config::AppConfig;
use domain::Conversation;
use infrastructure::model::OpenAiClient;
use infrastructure::store::TodoStore;

#[derive(Parser, Debug)]
#[command(
    name = "talio",
    version,
    about = "Natural-language todo assistant for the terminal"
)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// SQLite database file holding the todos.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Chat model used to drive the assistant.
    #[arg(long)]
    model: Option<String>,
    /// Maximum model round-trips per user turn.
    #[arg(long)]
    max_steps: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_tracing();
    info!("Starting talio");

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }
    debug!(
        model = %config.model,
        db = %config.db_path.display(),
        max_steps = config.max_steps,
        "Configuration resolved"
    );

    let provider = Arc::new(OpenAiClient::from_env()?);
    let store = Arc::new(TodoStore::open(&config.db_path)?);
    let agent = Agent::new(provider, store, config.model.clone(), config.max_steps);

    // Seeded once for the life of the process; every turn appends to it.
    let mut conversation = Conversation::seeded(SYSTEM_PROMPT);

    shell::run(&agent, &mut conversation).await?;
    info!("Session ended");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
