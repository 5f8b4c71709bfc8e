use crate::types::{Opinion, char_prefix};

/// Framing templates applied cyclically by reflection level.
const FRAMINGS: [&str; 4] = ["What if", "Consider", "Suppose", "Is it possible"];

const CONFIDENCE_DECAY_PER_LEVEL: f64 = 0.05;
const CONFIDENCE_FLOOR: f64 = 0.3;
const BASE_EXCERPT_CHARS: usize = 80;

/// Produces self-critical counter-statements for each successful backend
/// answer. Pure: output depends only on the base opinions and the configured
/// depth, ordered level-major then base-order, exactly `depth * base.len()`
/// opinions long.
#[derive(Debug, Clone)]
pub struct ReflectionGenerator {
    depth: usize,
}

impl ReflectionGenerator {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn reflect(&self, prompt: &str, base: &[Opinion]) -> Vec<Opinion> {
        let mut reflections = Vec::with_capacity(self.depth * base.len());
        for level in 0..self.depth {
            let framing = FRAMINGS[level % FRAMINGS.len()];
            for opinion in base {
                reflections.push(Opinion {
                    // Level precedes the base id so the encoding stays
                    // injective even when base ids contain the delimiter.
                    source_id: format!("reflect:{level}:{}", opinion.source_id),
                    text: format!(
                        "{framing} the opposite holds? Re-evaluate: {}",
                        char_prefix(&opinion.text, BASE_EXCERPT_CHARS)
                    ),
                    rationale: Some("Self-directed challenge to the parent claim".to_string()),
                    confidence: (opinion.confidence
                        - CONFIDENCE_DECAY_PER_LEVEL * (level as f64 + 1.0))
                        .max(CONFIDENCE_FLOOR),
                    bias_flags: Vec::new(),
                });
            }
        }

        tracing::debug!(
            target: "reflection",
            prompt_chars = prompt.chars().count(),
            base = base.len(),
            depth = self.depth,
            generated = reflections.len(),
            "reflections_generated"
        );
        reflections
    }
}
