use indexmap::IndexMap;

use crate::{
    analysis::types::{ArgumentEntry, DialecticSummary},
    types::{Opinion, SourceId, char_prefix},
};

/// Two texts agree when this many leading characters are identical.
const AGREEMENT_PREFIX_CHARS: usize = 40;
/// Contradiction notes embed excerpts of this length from both texts.
const EXCERPT_CHARS: usize = 30;

/// All-pairs agreement/contradiction scan over the opinion sequence. Pure and
/// order-sensitive: pair (i, j) is considered exactly once with i < j, and
/// map/sequence ordering follows the input, so repeated runs over the same
/// sequence yield identical summaries.
#[derive(Debug, Clone, Default)]
pub struct DialecticAnalyzer;

impl DialecticAnalyzer {
    pub fn analyze(&self, opinions: &[Opinion]) -> DialecticSummary {
        let mut agreements: Vec<String> = Vec::new();
        let mut contradictions: Vec<String> = Vec::new();
        let mut argument_map: IndexMap<SourceId, ArgumentEntry> = IndexMap::new();

        for (i, base) in opinions.iter().enumerate() {
            argument_map
                .entry(base.source_id.clone())
                .or_default()
                .claims
                .push(base.text.clone());

            for other in &opinions[i + 1..] {
                if char_prefix(&base.text, AGREEMENT_PREFIX_CHARS)
                    == char_prefix(&other.text, AGREEMENT_PREFIX_CHARS)
                {
                    // Prefix equality counts as convergence even within one
                    // source (a reflection echoing its base, for instance).
                    agreements.push(format!(
                        "{} aligns with {} on opening perspective.",
                        base.source_id, other.source_id
                    ));
                } else if base.source_id != other.source_id {
                    contradictions.push(format!(
                        "{} diverges from {}: '{}...' vs '{}...'",
                        base.source_id,
                        other.source_id,
                        char_prefix(&base.text, EXCERPT_CHARS),
                        char_prefix(&other.text, EXCERPT_CHARS)
                    ));
                    if let Some(entry) = argument_map.get_mut(&base.source_id) {
                        entry.contradicts.push(other.source_id.clone());
                    }
                }
            }
        }

        let narrative = build_narrative(&agreements, &contradictions);
        DialecticSummary {
            agreements,
            contradictions,
            argument_map,
            narrative,
        }
    }
}

fn build_narrative(agreements: &[String], contradictions: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !agreements.is_empty() {
        parts.push(format!(
            "Convergence detected on {} key points.",
            agreements.len()
        ));
    }
    if !contradictions.is_empty() {
        parts.push(format!(
            "Identified {} active contradictions requiring synthesis.",
            contradictions.len()
        ));
    }
    if parts.is_empty() {
        "Minimal dialectic tension observed.".to_string()
    } else {
        parts.join(" ")
    }
}
