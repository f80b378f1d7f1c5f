//! Newsdesk application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the HTTP content API client
//! 4. Wire the scope stores, orchestrators and command router
//! 5. Run a line-oriented REPL over stdin, replying on stdout

use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use newsdesk_api::{ContentApi, HttpContentApi};
use newsdesk_chat::{
    ChatError, CommandRouter, MessageContext, QueryLog, ReferenceStore, Replier, ScopeStore,
    SearchOrchestrator, TracingQueryLog, ZeitgeistOrchestrator,
};
use newsdesk_core::config::NewsdeskConfig;
use newsdesk_core::types::{Story, Topic};

mod cli;

use cli::CliArgs;

/// Replier that prints to stdout, one reply per line block.
struct StdoutReplier;

#[async_trait]
impl Replier for StdoutReplier {
    async fn send(&self, _ctx: &MessageContext, text: &str) -> Result<(), ChatError> {
        println!("{}\n", text);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = NewsdeskConfig::load_or_default(&config_file);
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(level) = args.log_level {
        config.general.log_level = level;
    }

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.general.log_level.clone())
            }),
        )
        .init();

    tracing::info!("Starting Newsdesk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Remote API client.
    let api: Arc<dyn ContentApi> = Arc::new(HttpContentApi::new(&config.api)?);
    tracing::info!(base_url = %config.api.base_url, "Content API client ready");

    // Per-conversation reference stores.
    let stories: Arc<dyn ReferenceStore<Story>> = Arc::new(ScopeStore::new());
    let topics: Arc<dyn ReferenceStore<Topic>> = Arc::new(ScopeStore::new());
    let query_log: Arc<dyn QueryLog> = Arc::new(TracingQueryLog);

    // Pipelines and routing.
    let search = Arc::new(SearchOrchestrator::new(
        Arc::clone(&api),
        Arc::clone(&stories),
        Arc::clone(&topics),
        Arc::clone(&query_log),
        &config.chat,
    ));
    let zeitgeist = Arc::new(ZeitgeistOrchestrator::new(
        Arc::clone(&api),
        Arc::clone(&topics),
        Arc::clone(&query_log),
    ));
    let router = CommandRouter::new(search, zeitgeist, query_log);

    // REPL. Every line is a message from the local user in one fixed room.
    let replier = StdoutReplier;
    let user = std::env::var("USER").unwrap_or_else(|_| "local".to_string());
    println!("newsdesk ready. Try `search bear market`, `zeitgeist`, or Ctrl-D to quit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "quit" || text == "exit" {
            break;
        }
        let ctx = MessageContext::new("console", user.clone(), text);
        match router.dispatch(&replier, &ctx).await {
            Ok(true) => {}
            Ok(false) => println!(
                "Sorry, I didn't understand that. Try `search <term>`, `topics <term>`, \
                 `article A2`, `topic T3`, or `zeitgeist`.\n"
            ),
            Err(e) => tracing::error!(error = %e, "reply delivery failed"),
        }
    }

    tracing::info!("Newsdesk shutting down");
    Ok(())
}
