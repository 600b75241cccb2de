use crate::types::scoring::Score;
use chrono::Utc;
use serde::Serialize;

/// One qualifying career match, ready for display. Allocated fresh per
/// scoring run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRecommendation {
    pub career: String,
    pub score: Score,
    pub description: String,
    pub top_skills: Vec<String>,
    pub average_salary: String,
    pub job_outlook: String,
    pub match_reasons: Vec<String>,
}

/// Envelope around a scoring run. The scorer itself is pure; run metadata
/// such as the timestamp lives here, at the report layer.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub student: Option<String>,
    pub generated_at: String,
    pub recommendations: Vec<CareerRecommendation>,
}

impl MatchReport {
    pub fn new(student: Option<String>, recommendations: Vec<CareerRecommendation>) -> Self {
        Self {
            student,
            generated_at: Utc::now().to_rfc3339(),
            recommendations,
        }
    }
}
