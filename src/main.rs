use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use quorum::{
    cli::options_from_args,
    config::Config,
    gateway::build_default_backends,
    logging::init_tracing,
    observation::JsonFileStore,
    orchestrator::Orchestrator,
    types::{AgentContext, EventKind, InputEvent},
};

/// Stdin line shape for a full event with optional agent context. Plain text
/// lines (and unparseable JSON) fall back to a bare text event.
#[derive(Debug, Deserialize)]
struct EventEnvelope {
    event: InputEvent,
    #[serde(default)]
    context: Option<AgentContext>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = options_from_args()?;
    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "failed to load config from {}",
            options.config_path.display()
        )
    })?;
    let logging_guard = init_tracing(&config.logging)?;
    tracing::info!(
        target: "quorum",
        run_id = %logging_guard.run_id(),
        backends = config.gateway.active_backends.len(),
        "starting"
    );

    let store = Arc::new(JsonFileStore::new(config.observation.store_path.clone()));
    let orchestrator = Orchestrator::from_config(&config, build_default_backends(), store);

    if let Some(prompt) = options.once {
        let event = InputEvent::new(EventKind::Text, prompt, "cli");
        let outcome = orchestrator.handle(event, None).await?;
        println!("{}", serde_json::to_string(&outcome.packet)?);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(target: "quorum", "shutdown_signal_received");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read event line from stdin")? else {
                    break;
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let (event, context) = parse_event_line(trimmed);
                let outcome = orchestrator.handle(event, context).await?;
                println!("{}", serde_json::to_string(&outcome.packet)?);
            }
        }
    }

    Ok(())
}

fn parse_event_line(line: &str) -> (InputEvent, Option<AgentContext>) {
    if line.starts_with('{') {
        if let Ok(envelope) = serde_json::from_str::<EventEnvelope>(line) {
            return (envelope.event, envelope.context);
        }
        if let Ok(event) = serde_json::from_str::<InputEvent>(line) {
            return (event, None);
        }
        tracing::warn!(target: "quorum", "unparseable_event_line_treated_as_text");
    }
    (InputEvent::new(EventKind::Text, line, "stdin"), None)
}
