//! Closure-backed backend doubles for tests and embedders.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::{
    gateway::{
        error::{BackendError, internal_error},
        ports::{BackendPort, BackendReply},
    },
    types::SharedContext,
};

pub type AskHook = Arc<
    dyn Fn(String, SharedContext) -> BoxFuture<'static, Result<BackendReply, BackendError>>
        + Send
        + Sync,
>;

pub struct HookBackend {
    id: String,
    hook: AskHook,
}

impl HookBackend {
    pub fn new(id: impl Into<String>, hook: AskHook) -> Self {
        Self {
            id: id.into(),
            hook,
        }
    }
}

#[async_trait]
impl BackendPort for HookBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn ask(
        &self,
        prompt: &str,
        shared: &SharedContext,
    ) -> Result<BackendReply, BackendError> {
        (self.hook)(prompt.to_string(), shared.clone()).await
    }
}

/// Replies immediately with a fixed text and confidence.
pub fn static_backend(
    id: impl Into<String>,
    text: impl Into<String>,
    confidence: f64,
) -> Arc<dyn BackendPort> {
    let text = text.into();
    let hook: AskHook = Arc::new(move |_prompt, _shared| {
        let text = text.clone();
        Box::pin(async move {
            Ok(BackendReply {
                text,
                rationale: None,
                confidence,
            })
        })
    });
    Arc::new(HookBackend::new(id, hook))
}

/// Fails every call with an internal backend error.
pub fn failing_backend(id: impl Into<String>) -> Arc<dyn BackendPort> {
    let id = id.into();
    let error_id = id.clone();
    let hook: AskHook = Arc::new(move |_prompt, _shared| {
        let error_id = error_id.clone();
        Box::pin(async move { Err(internal_error(error_id, "scripted failure")) })
    });
    Arc::new(HookBackend::new(id, hook))
}

/// Sleeps for `delay` before answering; pair with a shorter gateway timeout
/// to exercise the timeout path.
pub fn slow_backend(
    id: impl Into<String>,
    text: impl Into<String>,
    delay: Duration,
) -> Arc<dyn BackendPort> {
    let text = text.into();
    let hook: AskHook = Arc::new(move |_prompt, _shared| {
        let text = text.clone();
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(BackendReply {
                text,
                rationale: None,
                confidence: 0.5,
            })
        })
    });
    Arc::new(HookBackend::new(id, hook))
}
