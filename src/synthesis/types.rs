use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    analysis::{BiasReport, ConflictReport, DialecticSummary},
    types::{AgentContext, SourceId},
};

/// Coarse label describing how the final answer should be framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ReportSound,
    HighlightConflict,
    MediateContradiction,
    Inform,
    SafetyFirst,
    PrioritizeNutrition,
    ExploreEnvironment,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ReportSound => "report_sound",
            Intent::HighlightConflict => "highlight_conflict",
            Intent::MediateContradiction => "mediate_contradiction",
            Intent::Inform => "inform",
            Intent::SafetyFirst => "safety_first",
            Intent::PrioritizeNutrition => "prioritize_nutrition",
            Intent::ExploreEnvironment => "explore_environment",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketMeta {
    pub prompt: String,
    /// Contributing source ids in arrival order, one per opinion.
    pub sources: Vec<SourceId>,
    #[serde(default)]
    pub context: Option<AgentContext>,
}

/// The final artifact of one pipeline run. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePacket {
    pub text: String,
    pub intent: Intent,
    pub supporting: Vec<String>,
    pub opposing: Vec<String>,
    pub bias: BiasReport,
    pub dialectic: DialecticSummary,
    pub conflict: ConflictReport,
    pub meta: PacketMeta,
}
