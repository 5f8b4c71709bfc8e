use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use crate::{
    analysis::{BiasReport, ConflictReport, DialecticSummary},
    synthesis::{Intent, ResponsePacket},
};

pub type SourceId = String;
pub type BackendId = String;

/// Free-form key/value context handed to every backend alongside the prompt.
pub type SharedContext = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Audio,
    Visual,
    Text,
    System,
    Environment,
    Touch,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Audio => "audio",
            EventKind::Visual => "visual",
            EventKind::Text => "text",
            EventKind::System => "system",
            EventKind::Environment => "environment",
            EventKind::Touch => "touch",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work for the pipeline. The `value` is the prompt fanned out to
/// the backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub kind: EventKind,
    pub value: String,
    pub source: String,
    #[serde(default = "current_unix_timestamp")]
    pub timestamp: i64,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl InputEvent {
    pub fn new(kind: EventKind, value: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            source: source.into(),
            timestamp: current_unix_timestamp(),
            metadata: None,
        }
    }
}

fn current_unix_timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// A backend's or reflection's answer. Never mutated after creation; the
/// analyzers only read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    pub source_id: SourceId,
    pub text: String,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub bias_flags: Vec<String>,
}

fn default_confidence() -> f64 {
    0.5
}

/// Affective/priority state computed by an external simulation and passed
/// opaquely into intent resolution and synthesis. The weight map keeps the
/// caller's key order; ties between equal weights resolve to the earlier key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AgentContext {
    #[serde(default)]
    pub weights: IndexMap<String, f64>,
    #[serde(default)]
    pub mood: Option<MoodState>,
    #[serde(default)]
    pub heart: Option<HeartReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodState {
    pub label: String,
    pub valence: f64,
    pub arousal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartReading {
    pub bpm: f64,
    pub hrv: f64,
    #[serde(default)]
    pub beat: bool,
}

/// First `max_chars` Unicode scalars of `text`. Excerpting and prefix
/// comparison count characters, not bytes, so multi-byte text never splits.
pub(crate) fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
