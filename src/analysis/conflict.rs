use indexmap::IndexMap;

use crate::{
    analysis::types::ConflictReport,
    types::{Opinion, SourceId},
};

/// Fixed topical categories and their keyword sets, in output order.
const CATEGORY_KEYWORDS: [(&str, [&str; 3]); 3] = [
    ("methodological", ["method", "approach", "process"]),
    ("ethical", ["ethic", "moral", "duty"]),
    ("semantic", ["definition", "term", "meaning"]),
];

const SEVERITY_PER_CATEGORY: f64 = 0.35;

const DESCRIPTION_CONFLICTED: &str = "Conflicts span multiple dimensions.";
const DESCRIPTION_QUIET: &str = "Minor divergence detected.";

/// Keyword classification of opinions into topical clash categories. Pure.
/// An opinion may land in zero, one, or several categories; categories with
/// no matches are dropped, and severity is `0.35 * non_empty`, capped at 1.
#[derive(Debug, Clone, Default)]
pub struct ConflictAnalyzer;

impl ConflictAnalyzer {
    pub fn analyze(&self, opinions: &[Opinion]) -> ConflictReport {
        let lowered: Vec<(String, &str)> = opinions
            .iter()
            .map(|opinion| (opinion.text.to_lowercase(), opinion.source_id.as_str()))
            .collect();

        let mut categories: IndexMap<String, Vec<SourceId>> = IndexMap::new();
        for (category, keywords) in CATEGORY_KEYWORDS {
            let matched: Vec<SourceId> = lowered
                .iter()
                .filter(|(text, _)| keywords.iter().any(|keyword| text.contains(keyword)))
                .map(|(_, source_id)| (*source_id).to_string())
                .collect();
            if !matched.is_empty() {
                categories.insert(category.to_string(), matched);
            }
        }

        let severity = (SEVERITY_PER_CATEGORY * categories.len() as f64).min(1.0);
        let description = if categories.is_empty() {
            DESCRIPTION_QUIET
        } else {
            DESCRIPTION_CONFLICTED
        }
        .to_string();

        ConflictReport {
            categories,
            severity,
            description,
        }
    }
}
