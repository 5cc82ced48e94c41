//! gifbot CLI: run the Telegram bot or list stored entries for a keyword.
//! Config from env (.env supported); token can be overridden on the command
//! line.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gifbot_core::{init_tracing, Bot as CoreBot, HandlerChain};
use gifbot_handlers::{GifCommandHandler, HelpHandler};
use gifbot_telegram::{run_repl, TelegramBotAdapter, TelegramConfig};
use gifstore::{create_keyword_store, StoreConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "gifbot")]
#[command(about = "Keyword-to-gif chat bot: run, list", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// List the entries stored under a keyword (admin; uses the configured
    /// store directly).
    List { keyword: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => handle_run(token).await,
        Commands::List { keyword } => handle_list(&keyword).await,
    }
}

/// Builds the store and handler chain from env config and starts the REPL.
async fn handle_run(token: Option<String>) -> Result<()> {
    let telegram_config = match token {
        Some(token) => TelegramConfig::with_token(token),
        None => TelegramConfig::from_env().context("Load Telegram config (BOT_TOKEN)")?,
    };
    init_tracing(telegram_config.log_file.as_deref())?;

    let store_config = StoreConfig::from_env().context("Load store config (STORE_BACKEND)")?;
    info!(
        backend = %store_config.backend.as_str(),
        "Initializing gifbot"
    );
    let store = create_keyword_store(&store_config)
        .await
        .context("Initialize keyword store")?;

    let chain = HandlerChain::new()
        .add_handler(Arc::new(GifCommandHandler::new(store)))
        .add_handler(Arc::new(HelpHandler::new()));

    let bot = telegram_config.build_bot()?;
    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    info!("Starting Telegram REPL");
    run_repl(bot, chain, sender).await
}

/// Prints every entry stored under the keyword, oldest first.
async fn handle_list(keyword: &str) -> Result<()> {
    let store_config = StoreConfig::from_env().context("Load store config (STORE_BACKEND)")?;
    let store = create_keyword_store(&store_config)
        .await
        .context("Initialize keyword store")?;

    let entries = store
        .entries(keyword)
        .await
        .with_context(|| format!("List entries for keyword '{keyword}'"))?;

    if entries.is_empty() {
        println!("No entries stored for '{keyword}'");
        return Ok(());
    }
    for entry in entries {
        println!("{}\t{}\t{}", entry.url, entry.creator, entry.stored_at);
    }
    Ok(())
}
