use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use crate::{
    analysis::{BiasDetector, ConflictAnalyzer, DialecticAnalyzer},
    config::Config,
    gateway::{AdapterGateway, BackendPort},
    observation::{ObservationError, ObservationStorePort, RecordId},
    reflection::ReflectionGenerator,
    synthesis::{IntentResolver, ResponsePacket, ResponseSynthesizer},
    types::{AgentContext, BackendId, InputEvent},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineErrorKind {
    Internal,
}

/// The single fatal error a pipeline run can surface. Backend failures never
/// reach this: they are absorbed at the gateway, and callers only ever see
/// their aggregate absence from the opinion set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineError {
    pub kind: PipelineErrorKind,
    pub message: String,
}

impl PipelineError {
    pub fn new(kind: PipelineErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PipelineError {}

pub fn internal_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(PipelineErrorKind::Internal, message)
}

/// Result of one pipeline run: the packet, plus the append outcome so a
/// persistence failure reaches the caller without invalidating the packet.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub packet: ResponsePacket,
    pub observation: Result<RecordId, ObservationError>,
}

/// Sequences the stages for one event: fan-out, reflection, the three
/// read-only analysis passes, intent resolution, synthesis, then exactly one
/// observation append. Atomic from the caller's perspective: one complete
/// packet or one pipeline-level error, never a partial packet.
pub struct Orchestrator {
    gateway: AdapterGateway,
    active_backends: Vec<BackendId>,
    reflection: ReflectionGenerator,
    dialectic: DialecticAnalyzer,
    bias: BiasDetector,
    conflict: ConflictAnalyzer,
    intent: IntentResolver,
    synthesizer: ResponseSynthesizer,
    store: Arc<dyn ObservationStorePort>,
}

impl Orchestrator {
    pub fn new(
        gateway: AdapterGateway,
        active_backends: Vec<BackendId>,
        reflection: ReflectionGenerator,
        store: Arc<dyn ObservationStorePort>,
    ) -> Self {
        Self {
            gateway,
            active_backends,
            reflection,
            dialectic: DialecticAnalyzer,
            bias: BiasDetector,
            conflict: ConflictAnalyzer,
            intent: IntentResolver,
            synthesizer: ResponseSynthesizer,
            store,
        }
    }

    pub fn from_config(
        config: &Config,
        registry: HashMap<BackendId, Arc<dyn BackendPort>>,
        store: Arc<dyn ObservationStorePort>,
    ) -> Self {
        Self::new(
            AdapterGateway::new(
                registry,
                Duration::from_millis(config.gateway.reply_timeout_ms),
            ),
            config.gateway.active_backends.clone(),
            ReflectionGenerator::new(config.reflection.depth),
            store,
        )
    }

    pub async fn handle(
        &self,
        event: InputEvent,
        context: Option<AgentContext>,
    ) -> Result<PipelineOutcome, PipelineError> {
        let prompt = event.value.clone();
        tracing::debug!(
            target: "orchestrator",
            kind = %event.kind,
            source = %event.source,
            "pipeline_run_started"
        );

        let base = self.gateway.gather(&prompt, &self.active_backends).await;
        let reflections = self.reflection.reflect(&prompt, &base);
        let mut combined = base;
        combined.extend(reflections);

        // Independent read-only passes over the immutable combined sequence.
        let dialectic = self.dialectic.analyze(&combined);
        let bias = self.bias.evaluate(&combined);
        let conflict = self.conflict.analyze(&combined);

        let intent = self
            .intent
            .resolve(event.kind, &dialectic, &conflict, context.as_ref());
        let packet = self.synthesizer.synthesize(
            &prompt,
            intent,
            &combined,
            &dialectic,
            &bias,
            &conflict,
            context.as_ref(),
        );

        // Best-effort: the packet is already decided; an append failure is
        // reported alongside it, never instead of it.
        let observation = self.store.append(&event, &combined).await;
        match &observation {
            Ok(record_id) => {
                tracing::info!(
                    target: "orchestrator",
                    intent = %packet.intent,
                    opinions = combined.len(),
                    record_id = %record_id,
                    "pipeline_run_completed"
                );
            }
            Err(err) => {
                tracing::warn!(
                    target: "orchestrator",
                    intent = %packet.intent,
                    opinions = combined.len(),
                    error = %err,
                    "observation_append_failed"
                );
            }
        }

        Ok(PipelineOutcome {
            packet,
            observation,
        })
    }
}
