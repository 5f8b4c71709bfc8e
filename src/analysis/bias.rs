use indexmap::IndexMap;

use crate::{
    analysis::types::BiasReport,
    types::{Opinion, SourceId},
};

const ABSOLUTIST_TERMS: [&str; 3] = ["always", "never", "must"];
const HEDGING_TERM: &str = "perhaps";
const MIN_DELIBERATE_CHARS: usize = 40;

const FLAG_OVERGENERALIZATION: &str = "overgeneralization";
const FLAG_NORMATIVE_BIAS: &str = "normative_bias";
const FLAG_INSUFFICIENT_DELIBERATION: &str = "insufficient_deliberation";

const NOTES_BALANCED: &str = "Balanced perspectives detected.";
const NOTES_FLAGGED: &str = "Bias indicators flagged; review recommended.";

/// Fixed keyword heuristics over each opinion in isolation. Pure; a source
/// appearing several times accumulates flags across its opinions.
#[derive(Debug, Clone, Default)]
pub struct BiasDetector;

impl BiasDetector {
    pub fn evaluate(&self, opinions: &[Opinion]) -> BiasReport {
        let mut model_biases: IndexMap<SourceId, Vec<String>> = IndexMap::new();

        for opinion in opinions {
            let lowered = opinion.text.to_lowercase();
            let mut flags: Vec<String> = Vec::new();
            if ABSOLUTIST_TERMS.iter().any(|term| lowered.contains(term)) {
                flags.push(FLAG_OVERGENERALIZATION.to_string());
            }
            if lowered.contains("should") && !lowered.contains(HEDGING_TERM) {
                flags.push(FLAG_NORMATIVE_BIAS.to_string());
            }
            if opinion.text.chars().count() < MIN_DELIBERATE_CHARS {
                flags.push(FLAG_INSUFFICIENT_DELIBERATION.to_string());
            }
            if !flags.is_empty() {
                model_biases
                    .entry(opinion.source_id.clone())
                    .or_default()
                    .extend(flags);
            }
        }

        let overall_notes = if model_biases.is_empty() {
            NOTES_BALANCED
        } else {
            NOTES_FLAGGED
        }
        .to_string();

        BiasReport {
            model_biases,
            overall_notes,
        }
    }
}
