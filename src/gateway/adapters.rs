use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    gateway::{
        error::BackendError,
        ports::{BackendPort, BackendReply},
    },
    types::{BackendId, SharedContext, char_prefix},
};

const PROMPT_EXCERPT_CHARS: usize = 80;

/// In-process reasoning backend with a fixed persona. Each answer opens with
/// the persona's framing, echoes the leading slice of the prompt, and carries
/// a stable confidence, after a short simulated latency.
pub struct ScriptedBackend {
    id: BackendId,
    opener: String,
    rationale: String,
    confidence: f64,
    latency: Duration,
}

impl ScriptedBackend {
    pub fn new(
        id: impl Into<BackendId>,
        opener: impl Into<String>,
        rationale: impl Into<String>,
        confidence: f64,
        latency: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            opener: opener.into(),
            rationale: rationale.into(),
            confidence,
            latency,
        }
    }
}

#[async_trait]
impl BackendPort for ScriptedBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn ask(
        &self,
        prompt: &str,
        _shared: &SharedContext,
    ) -> Result<BackendReply, BackendError> {
        tokio::time::sleep(self.latency).await;
        Ok(BackendReply {
            text: format!("{} {}", self.opener, char_prefix(prompt, PROMPT_EXCERPT_CHARS)),
            rationale: Some(self.rationale.clone()),
            confidence: self.confidence,
        })
    }
}

/// The stock registry: four scripted reasoners keyed by their configuration
/// ids. The ids are configuration values; the pipeline works with any
/// `BackendPort` registry the caller provides instead.
pub fn build_default_backends() -> HashMap<BackendId, Arc<dyn BackendPort>> {
    let stock: [ScriptedBackend; 4] = [
        ScriptedBackend::new(
            "gpt",
            "GPT reflection on:",
            "Emphasizes probabilistic reasoning and human-aligned values.",
            0.7,
            Duration::from_millis(50),
        ),
        ScriptedBackend::new(
            "deepseek",
            "DeepSeek analytical view:",
            "Focuses on deep analysis and alternative trajectories.",
            0.65,
            Duration::from_millis(60),
        ),
        ScriptedBackend::new(
            "gemini",
            "Gemini multimodal insight:",
            "Balances creative exploration with factual grounding.",
            0.6,
            Duration::from_millis(50),
        ),
        ScriptedBackend::new(
            "copilot",
            "Copilot pragmatic answer:",
            "Targets actionable steps and developer pragmatics.",
            0.55,
            Duration::from_millis(40),
        ),
    ];

    let mut registry: HashMap<BackendId, Arc<dyn BackendPort>> = HashMap::new();
    for backend in stock {
        registry.insert(backend.id.clone(), Arc::new(backend));
    }
    registry
}
