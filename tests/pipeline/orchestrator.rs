use std::{collections::HashMap, path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use quorum::{
    gateway::{
        AdapterGateway, BackendPort,
        testing::{slow_backend, static_backend},
    },
    observation::{
        JsonFileStore, ObservationError, ObservationRecord, ObservationStorePort, RecordId,
        error::io_error,
    },
    orchestrator::Orchestrator,
    reflection::ReflectionGenerator,
    synthesis::Intent,
    types::{AgentContext, BackendId, EventKind, InputEvent, Opinion},
};
use uuid::Uuid;

fn temp_store_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("quorum-orchestrator-test-{}", Uuid::now_v7()))
        .join("observations.json")
}

fn registry(
    backends: Vec<Arc<dyn BackendPort>>,
) -> HashMap<BackendId, Arc<dyn BackendPort>> {
    backends
        .into_iter()
        .map(|backend| (backend.id().to_string(), backend))
        .collect()
}

fn orchestrator_with(
    backends: Vec<Arc<dyn BackendPort>>,
    active: &[&str],
    depth: usize,
    store: Arc<dyn ObservationStorePort>,
) -> Orchestrator {
    Orchestrator::new(
        AdapterGateway::new(registry(backends), Duration::from_millis(50)),
        active.iter().map(|id| (*id).to_string()).collect(),
        ReflectionGenerator::new(depth),
        store,
    )
}

struct FailingStore;

#[async_trait]
impl ObservationStorePort for FailingStore {
    async fn append(
        &self,
        _event: &InputEvent,
        _opinions: &[Opinion],
    ) -> Result<RecordId, ObservationError> {
        Err(io_error("scripted append failure"))
    }

    async fn query(
        &self,
        _tag: &str,
        _limit: usize,
    ) -> Result<Vec<ObservationRecord>, ObservationError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn all_backends_timing_out_still_yields_a_packet() {
    let store = Arc::new(JsonFileStore::new(temp_store_path()));
    let orchestrator = orchestrator_with(
        vec![
            slow_backend("alpha", "Too late", Duration::from_secs(5)),
            slow_backend("beta", "Also late", Duration::from_secs(5)),
        ],
        &["alpha", "beta"],
        2,
        store.clone(),
    );

    let outcome = orchestrator
        .handle(InputEvent::new(EventKind::Text, "anyone home?", "user"), None)
        .await
        .expect("empty fan-out is not a pipeline failure");

    assert!(outcome.packet.supporting.is_empty());
    assert!(outcome.packet.opposing.is_empty());
    assert_eq!(outcome.packet.intent, Intent::Inform);
    assert!(outcome.packet.conflict.severity.abs() < 1e-9);
    assert!(outcome.packet.dialectic.contradictions.is_empty());
    assert!(outcome.observation.is_ok(), "append still happens");

    let records = store.query("text", 10).await.expect("query succeeds");
    assert_eq!(records.len(), 1);
    assert!(records[0].opinions.is_empty());
}

#[tokio::test]
async fn each_run_appends_exactly_one_observation() {
    let store = Arc::new(JsonFileStore::new(temp_store_path()));
    let orchestrator = orchestrator_with(
        vec![
            static_backend("alpha", "A steady first reading of the situation", 0.7),
            static_backend("beta", "A rather different second reading entirely", 0.6),
        ],
        &["alpha", "beta"],
        1,
        store.clone(),
    );

    for round in 0..2 {
        orchestrator
            .handle(
                InputEvent::new(EventKind::Text, format!("round {round}"), "user"),
                None,
            )
            .await
            .expect("pipeline run succeeds");
    }

    let records = store.query("user", 10).await.expect("query succeeds");
    assert_eq!(records.len(), 2);
    // Base opinions plus depth 1 reflections, in arrival order.
    assert_eq!(records[0].opinions.len(), 4);
    assert_eq!(records[0].opinions[0].source_id, "alpha");
    assert_eq!(records[0].opinions[2].source_id, "reflect:0:alpha");
}

#[tokio::test]
async fn store_failure_is_reported_without_losing_the_packet() {
    let orchestrator = orchestrator_with(
        vec![static_backend(
            "alpha",
            "A steady first reading of the situation",
            0.7,
        )],
        &["alpha"],
        1,
        Arc::new(FailingStore),
    );

    let outcome = orchestrator
        .handle(InputEvent::new(EventKind::Text, "persist me", "user"), None)
        .await
        .expect("store failure must not fail the run");

    let err = outcome.observation.expect_err("append failed");
    assert_eq!(err.message, "scripted append failure");
    assert!(!outcome.packet.meta.sources.is_empty());
    assert!(outcome.packet.text.starts_with("Prompt: persist me"));
}

#[tokio::test]
async fn context_weights_override_the_resolved_intent() {
    let context = AgentContext {
        weights: [("seek_safety".to_string(), 0.9), ("eat".to_string(), 0.1)]
            .into_iter()
            .collect(),
        ..Default::default()
    };
    let orchestrator = orchestrator_with(
        vec![
            static_backend("alpha", "The method is not the problem here", 0.7),
            static_backend("beta", "Our duty is to question the approach", 0.6),
        ],
        &["alpha", "beta"],
        2,
        Arc::new(JsonFileStore::new(temp_store_path())),
    );

    let outcome = orchestrator
        .handle(
            InputEvent::new(EventKind::Text, "what matters most?", "user"),
            Some(context.clone()),
        )
        .await
        .expect("pipeline run succeeds");

    assert_eq!(outcome.packet.intent, Intent::SafetyFirst);
    assert!(outcome.packet.text.contains("Top weights: seek_safety=0.90, eat=0.10"));
    assert_eq!(outcome.packet.meta.context, Some(context));
}

#[tokio::test]
async fn meta_sources_follow_arrival_order_through_reflection() {
    let orchestrator = orchestrator_with(
        vec![
            static_backend("alpha", "A steady first reading of the situation", 0.7),
            static_backend("beta", "A rather different second reading entirely", 0.6),
        ],
        &["alpha", "beta"],
        2,
        Arc::new(JsonFileStore::new(temp_store_path())),
    );

    let outcome = orchestrator
        .handle(InputEvent::new(EventKind::Text, "order?", "user"), None)
        .await
        .expect("pipeline run succeeds");

    assert_eq!(
        outcome.packet.meta.sources,
        vec![
            "alpha",
            "beta",
            "reflect:0:alpha",
            "reflect:0:beta",
            "reflect:1:alpha",
            "reflect:1:beta"
        ]
    );
}
