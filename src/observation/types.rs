use serde::{Deserialize, Serialize};

use crate::types::{InputEvent, Opinion};

pub type RecordId = String;

/// One appended observation: the triggering event plus the full combined
/// opinion sequence of that run. Tagged with the event kind and source for
/// later lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub id: RecordId,
    pub recorded_at: String,
    pub tags: Vec<String>,
    pub event: InputEvent,
    pub opinions: Vec<Opinion>,
}
