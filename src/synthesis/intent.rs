use indexmap::IndexMap;

use crate::{
    analysis::{ConflictReport, DialecticSummary},
    synthesis::types::Intent,
    types::{AgentContext, EventKind},
};

const CONFLICT_SEVERITY_GATE: f64 = 0.5;
const EAT_WEIGHT_GATE: f64 = 0.5;
const SAFETY_SUPPRESSION_GATE: f64 = 0.4;
const EXPLORE_WEIGHT_GATE: f64 = 0.5;

/// Deterministic priority chain over event kind and analysis outputs, with an
/// optional override driven by the caller's drive weights. First chain match
/// wins; the override, when its conditions hold, replaces whatever the chain
/// produced.
#[derive(Debug, Clone, Default)]
pub struct IntentResolver;

impl IntentResolver {
    pub fn resolve(
        &self,
        kind: EventKind,
        dialectic: &DialecticSummary,
        conflict: &ConflictReport,
        context: Option<&AgentContext>,
    ) -> Intent {
        let chain = if kind == EventKind::Audio {
            Intent::ReportSound
        } else if conflict.severity > CONFLICT_SEVERITY_GATE {
            Intent::HighlightConflict
        } else if !dialectic.contradictions.is_empty() {
            Intent::MediateContradiction
        } else {
            Intent::Inform
        };

        let Some(context) = context else {
            return chain;
        };
        let Some(top_key) = max_weight_key(&context.weights) else {
            return chain;
        };
        let weight_of = |key: &str| context.weights.get(key).copied().unwrap_or(0.0);

        match top_key {
            "seek_safety" => Intent::SafetyFirst,
            "eat" if weight_of("eat") > EAT_WEIGHT_GATE
                && weight_of("seek_safety") < SAFETY_SUPPRESSION_GATE =>
            {
                Intent::PrioritizeNutrition
            }
            "explore" if weight_of("explore") > EXPLORE_WEIGHT_GATE => Intent::ExploreEnvironment,
            _ => chain,
        }
    }
}

/// Maximum-weight key; ties keep the earlier (first-seen) key because only a
/// strictly greater weight displaces the current best.
fn max_weight_key(weights: &IndexMap<String, f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (key, weight) in weights {
        match best {
            Some((_, best_weight)) if *weight <= best_weight => {}
            _ => best = Some((key.as_str(), *weight)),
        }
    }
    best.map(|(key, _)| key)
}
