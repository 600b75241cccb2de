/// Final match score as shown to the user, 0-100 for marks within range.
pub type Score = u32;

/// Knobs for the scoring run. Defaults reproduce the reference behaviour:
/// subjects carry 60% of the score, interests 40%, careers scoring 20 or
/// below are dropped, and at most five recommendations are returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub subject_weight: f64,
    pub interest_weight: f64,
    pub score_floor: Score,
    pub max_results: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            subject_weight: 0.6,
            interest_weight: 0.4,
            score_floor: 20,
            max_results: 5,
        }
    }
}
