use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::time::interval;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use thesaurus_cli::{
    config::Config,
    console::{Command, ConsoleGame, HELP, clue_ticker},
    session_store::SessionStore,
    words_api::WordsApiClient,
};
use thesaurus_core::{
    LoggingHandler, RoundController, RoundEventBus, SessionCleanup, TokioSpawner, WordCache,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so game output stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Thesaurus Game...");

    let config = Config::new();
    if config.words_api_key.is_empty() {
        warn!("WORDS_API_KEY is not set, word requests will likely be rejected");
    }

    let source = Arc::new(
        WordsApiClient::from_config(&config).context("Failed to build word service client")?,
    );
    let cache = Arc::new(WordCache::new(
        source,
        Arc::new(TokioSpawner::current()),
        config.cache_settings(),
    ));

    // Prime the cache so the first round does not wait on the network
    if let Err(e) = cache
        .ensure_supply(config.low_water_mark, config.refill_batch)
        .await
    {
        warn!("Could not prime the word cache: {}", e);
    }

    let mut event_bus = RoundEventBus::new();
    event_bus.add_handler(Box::new(LoggingHandler));
    let controller = Arc::new(
        RoundController::new(cache.clone(), config.low_water_mark, config.refill_batch)
            .with_event_bus(event_bus),
    );

    let sessions = Arc::new(SessionStore::new());
    let game = ConsoleGame::new(controller, sessions.clone());
    let cleanup = SessionCleanup::new(config.session_idle_timeout());
    info!("Playing as session {}", game.session_id());

    println!("{}", HELP);
    println!("{}", game.execute(Command::NewRound).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clue_tick = clue_ticker(config.clue_interval());
    let mut cleanup_tick = interval(Duration::from_secs(60));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::NewRound) => {
                        println!("{}", game.execute(Command::NewRound).await);
                        // First clue of the new round comes a full period later
                        clue_tick.reset();
                    }
                    Some(command) => println!("{}", game.execute(command).await),
                    None => {}
                }
            }
            _ = clue_tick.tick() => {
                if let Some(text) = game.tick().await {
                    println!("{}", text);
                }
            }
            _ = cleanup_tick.tick() => {
                sessions.cleanup_expired(&cleanup);
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    println!("{}", game.execute(Command::Quit).await);
    info!("Shutdown complete. {} words still cached.", cache.len().await);
    Ok(())
}
