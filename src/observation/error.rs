use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationErrorKind {
    Io,
    Corrupt,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationError {
    pub kind: ObservationErrorKind,
    pub message: String,
}

impl ObservationError {
    pub fn new(kind: ObservationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ObservationError {}

pub fn io_error(message: impl Into<String>) -> ObservationError {
    ObservationError::new(ObservationErrorKind::Io, message)
}

pub fn corrupt(message: impl Into<String>) -> ObservationError {
    ObservationError::new(ObservationErrorKind::Corrupt, message)
}

pub fn internal_error(message: impl Into<String>) -> ObservationError {
    ObservationError::new(ObservationErrorKind::Internal, message)
}
