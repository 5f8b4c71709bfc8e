use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::SourceId;

/// Per-source accumulation of own claims and contradicted sources, in the
/// order claims appeared in the opinion sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArgumentEntry {
    #[serde(default)]
    pub claims: Vec<String>,
    #[serde(default)]
    pub contradicts: Vec<SourceId>,
}

/// Agreement/contradiction structure across the full opinion set. Map keys
/// keep first-seen order; the sequences keep pair-scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DialecticSummary {
    #[serde(default)]
    pub agreements: Vec<String>,
    #[serde(default)]
    pub contradictions: Vec<String>,
    #[serde(default)]
    pub argument_map: IndexMap<SourceId, ArgumentEntry>,
    #[serde(default)]
    pub narrative: String,
}

/// Heuristic bias flags per source. Sources with zero flags are absent from
/// the map, not present with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BiasReport {
    #[serde(default)]
    pub model_biases: IndexMap<SourceId, Vec<String>>,
    #[serde(default)]
    pub overall_notes: String,
}

/// Topical clash classification. Only non-empty categories are kept;
/// severity is a purely structural score over the category count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConflictReport {
    #[serde(default)]
    pub categories: IndexMap<String, Vec<SourceId>>,
    #[serde(default)]
    pub severity: f64,
    #[serde(default)]
    pub description: String,
}
