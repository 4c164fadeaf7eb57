use serde::{Deserialize, Serialize};

/// Per-category scores, each 0–100. The category set is fixed; a response
/// missing any of them does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub content_clarity: u32,
    pub skills_presentation: u32,
    pub experience_descriptions: u32,
    pub ats_compatibility: u32,
    pub impact_statements: u32,
}

/// A before/after rewrite of one resume line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteSuggestion {
    pub original: String,
    pub improved: String,
    pub explanation: String,
}

/// Structured feedback for one resume.
///
/// Deserialization is the schema check at the model boundary: every field is
/// required and typed. Value ranges are not re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritiqueResult {
    pub overall_score: u32,
    pub scores: CategoryScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
    pub rewrite_suggestions: Vec<RewriteSuggestion>,
    pub keywords_missing: Vec<String>,
    pub ats_recommendations: Vec<String>,
}

impl CritiqueResult {
    /// The record substituted when the model's answer cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            overall_score: 75,
            scores: CategoryScores {
                content_clarity: 70,
                skills_presentation: 75,
                experience_descriptions: 80,
                ats_compatibility: 70,
                impact_statements: 75,
            },
            strengths: strings(&["Good structure", "Relevant experience"]),
            weaknesses: strings(&["Could use more quantifiable results"]),
            improvements: strings(&["Add more metrics", "Improve keyword optimization"]),
            rewrite_suggestions: vec![],
            keywords_missing: vec![],
            ats_recommendations: strings(&[
                "Use standard section headers",
                "Include relevant keywords",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// What the engine hands back when the model call itself succeeded.
/// Either way there is a usable `CritiqueResult`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CritiqueOutcome {
    Parsed {
        result: CritiqueResult,
    },
    /// The response did not match the schema; `raw_response` is kept for
    /// diagnostic display only.
    Fallback {
        result: CritiqueResult,
        raw_response: String,
        parse_error: String,
    },
}

impl CritiqueOutcome {
    pub fn result(&self) -> &CritiqueResult {
        match self {
            CritiqueOutcome::Parsed { result } | CritiqueOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CritiqueOutcome::Fallback { .. })
    }
}
