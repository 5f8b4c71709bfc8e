use std::fmt;

use crate::types::BackendId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    Timeout,
    Internal,
}

/// Failure of a single backend call. Recovered locally at the gateway; the
/// affected backend is simply absent from the run's opinion set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub backend_id: BackendId,
    pub message: String,
}

impl BackendError {
    pub fn new(
        kind: BackendErrorKind,
        backend_id: impl Into<BackendId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            backend_id: backend_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (backend={})", self.message, self.backend_id)
    }
}

impl std::error::Error for BackendError {}

pub fn timed_out(backend_id: impl Into<BackendId>, message: impl Into<String>) -> BackendError {
    BackendError::new(BackendErrorKind::Timeout, backend_id, message)
}

pub fn internal_error(backend_id: impl Into<BackendId>, message: impl Into<String>) -> BackendError {
    BackendError::new(BackendErrorKind::Internal, backend_id, message)
}
