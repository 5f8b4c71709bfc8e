use crate::{
    analysis::{BiasReport, ConflictReport, DialecticSummary},
    synthesis::types::{Intent, PacketMeta, ResponsePacket},
    types::{AgentContext, Opinion},
};

const NEGATION_MARKERS: [&str; 2] = ["not", "however"];
const TOP_WEIGHTS_SHOWN: usize = 2;

/// Composes the final textual answer and partitions opinions into supporting
/// and opposing. Total: empty opinion sets, empty reports, and missing
/// context all degrade to omitting the corresponding fragment.
#[derive(Debug, Clone, Default)]
pub struct ResponseSynthesizer;

impl ResponseSynthesizer {
    #[allow(clippy::too_many_arguments)]
    pub fn synthesize(
        &self,
        prompt: &str,
        intent: Intent,
        opinions: &[Opinion],
        dialectic: &DialecticSummary,
        bias: &BiasReport,
        conflict: &ConflictReport,
        context: Option<&AgentContext>,
    ) -> ResponsePacket {
        let mut supporting: Vec<String> = Vec::new();
        let mut opposing: Vec<String> = Vec::new();
        for opinion in opinions {
            let line = format!("{}: {}", opinion.source_id, opinion.text);
            let lowered = opinion.text.to_lowercase();
            if NEGATION_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker))
            {
                opposing.push(line);
            } else {
                supporting.push(line);
            }
        }

        ResponsePacket {
            text: compose_text(prompt, dialectic, conflict, context),
            intent,
            supporting,
            opposing,
            bias: bias.clone(),
            dialectic: dialectic.clone(),
            conflict: conflict.clone(),
            meta: PacketMeta {
                prompt: prompt.to_string(),
                sources: opinions
                    .iter()
                    .map(|opinion| opinion.source_id.clone())
                    .collect(),
                context: context.cloned(),
            },
        }
    }
}

fn compose_text(
    prompt: &str,
    dialectic: &DialecticSummary,
    conflict: &ConflictReport,
    context: Option<&AgentContext>,
) -> String {
    let mut parts = vec![format!("Prompt: {prompt}")];
    if !dialectic.narrative.is_empty() {
        parts.push(dialectic.narrative.clone());
    }
    if !conflict.description.is_empty() {
        parts.push(conflict.description.clone());
    }

    if let Some(context) = context {
        if !context.weights.is_empty() {
            let mut ranked: Vec<(&str, f64)> = context
                .weights
                .iter()
                .map(|(key, weight)| (key.as_str(), *weight))
                .collect();
            // Stable sort: equal weights keep the caller's key order.
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            let top = ranked
                .iter()
                .take(TOP_WEIGHTS_SHOWN)
                .map(|(key, weight)| format!("{key}={weight:.2}"))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("Top weights: {top}"));
        }
        if let Some(mood) = &context.mood {
            parts.push(format!(
                "Mood: {} v={:.2} a={:.2}",
                mood.label, mood.valence, mood.arousal
            ));
        }
        if let Some(heart) = &context.heart {
            parts.push(format!("Physio: {:.1} bpm, hrv={:.2}", heart.bpm, heart.hrv));
        }
    }

    parts.join(" ")
}
