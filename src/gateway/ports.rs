use async_trait::async_trait;

use crate::{gateway::error::BackendError, types::SharedContext};

/// Raw answer produced by a reasoning backend for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub text: String,
    pub rationale: Option<String>,
    pub confidence: f64,
}

/// Capability contract every reasoning backend satisfies. Implementations
/// must stay cancellation-safe: the gateway drops the in-flight future when
/// the per-backend timeout fires.
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// Identifier stamped onto every opinion this backend produces.
    fn id(&self) -> &str;

    async fn ask(&self, prompt: &str, shared: &SharedContext)
    -> Result<BackendReply, BackendError>;
}
