//! Hazard intake console runner.
//!
//! Wires the intake handler to a stdin-driven turn loop: every line the
//! user types is one turn's raw input. This is a thin stand-in for a real
//! channel adapter; the engine itself lives in the library.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hazard_intake::adapters::{ConsoleMessenger, FileRecordStore, InMemoryRecordStore};
use hazard_intake::application::handlers::{AdvanceTurnCommand, AdvanceTurnHandler, TurnOutcome};
use hazard_intake::config::{AppConfig, StorageBackend};
use hazard_intake::domain::foundation::ConversationId;
use hazard_intake::ports::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter.clone()))
        .init();

    // validate() rejects the file backend without a root, so the fallback
    // arm is never taken on a validated config.
    let store: Arc<dyn RecordStore> = match (config.storage.backend, &config.storage.file_root) {
        (StorageBackend::File, Some(root)) => Arc::new(FileRecordStore::new(root)),
        _ => Arc::new(InMemoryRecordStore::new()),
    };
    let messenger = Arc::new(ConsoleMessenger::new());
    let handler = AdvanceTurnHandler::new(store, messenger);

    let conversation_id = ConversationId::new(format!("console-{}", std::process::id()))?;
    info!(conversation = %conversation_id, "starting intake session");

    let mut outcome = handler
        .handle(AdvanceTurnCommand::open(conversation_id.clone()))
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !matches!(
        outcome,
        TurnOutcome::Completed { .. } | TurnOutcome::AlreadyClosed
    ) {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        outcome = handler
            .handle(AdvanceTurnCommand::reply(conversation_id.clone(), line))
            .await?;
    }

    Ok(())
}
