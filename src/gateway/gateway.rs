use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::time::timeout;

use crate::{
    gateway::ports::BackendPort,
    types::{BackendId, Opinion, SharedContext},
};

/// Fans a prompt out to every configured backend concurrently and collects
/// whatever settled successfully. Partial results are the normal case: a
/// timed-out, failing, or unknown backend contributes nothing and is only
/// logged, never raised.
pub struct AdapterGateway {
    registry: HashMap<BackendId, Arc<dyn BackendPort>>,
    reply_timeout: Duration,
}

impl AdapterGateway {
    /// The registry is caller-provided; there is no process-wide adapter
    /// singleton.
    pub fn new(registry: HashMap<BackendId, Arc<dyn BackendPort>>, reply_timeout: Duration) -> Self {
        Self {
            registry,
            reply_timeout,
        }
    }

    pub fn reply_timeout(&self) -> Duration {
        self.reply_timeout
    }

    /// One spawned task per configured backend, each under its own timeout.
    /// Returns only after every task has settled, in `backend_ids` order, so
    /// the opinion sequence is deterministic for a given outcome set.
    pub async fn gather(&self, prompt: &str, backend_ids: &[BackendId]) -> Vec<Opinion> {
        let mut shared = SharedContext::new();
        shared.insert(
            "prompt".to_string(),
            serde_json::Value::String(prompt.to_string()),
        );
        let shared = Arc::new(shared);

        let mut handles = Vec::with_capacity(backend_ids.len());
        for backend_id in backend_ids {
            let Some(backend) = self.registry.get(backend_id) else {
                tracing::debug!(
                    target: "gateway",
                    backend_id = %backend_id,
                    "unknown_backend_skipped"
                );
                continue;
            };

            let backend = Arc::clone(backend);
            let prompt = prompt.to_string();
            let shared = Arc::clone(&shared);
            let reply_timeout = self.reply_timeout;
            handles.push(tokio::spawn(async move {
                let declared_id = backend.id().to_string();
                match timeout(reply_timeout, backend.ask(&prompt, shared.as_ref())).await {
                    Ok(Ok(reply)) => Some(Opinion {
                        source_id: declared_id,
                        text: reply.text,
                        rationale: reply.rationale,
                        confidence: reply.confidence.clamp(0.0, 1.0),
                        bias_flags: Vec::new(),
                    }),
                    Ok(Err(err)) => {
                        tracing::warn!(
                            target: "gateway",
                            backend_id = %declared_id,
                            error = %err,
                            "backend_failed"
                        );
                        None
                    }
                    Err(_) => {
                        tracing::warn!(
                            target: "gateway",
                            backend_id = %declared_id,
                            timeout_ms = reply_timeout.as_millis() as u64,
                            "backend_timed_out"
                        );
                        None
                    }
                }
            }));
        }

        let mut opinions = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(Some(opinion)) => opinions.push(opinion),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(target: "gateway", error = %err, "backend_task_aborted");
                }
            }
        }

        tracing::debug!(
            target: "gateway",
            requested = backend_ids.len(),
            answered = opinions.len(),
            "fan_out_settled"
        );
        opinions
    }
}
