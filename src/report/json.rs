use crate::types::report::MatchReport;

pub fn to_json(report: &MatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::CareerRecommendation;

    #[test]
    fn json_report_contains_scores_and_reasons() {
        let report = MatchReport::new(
            Some("Asha".to_string()),
            vec![CareerRecommendation {
                career: "Software Engineering".to_string(),
                score: 85,
                description: "desc".to_string(),
                top_skills: vec!["Programming".to_string()],
                average_salary: "$1".to_string(),
                job_outlook: "Flat".to_string(),
                match_reasons: vec!["Interest in Technology".to_string()],
            }],
        );

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"score\": 85"));
        assert!(rendered.contains("\"Interest in Technology\""));
        assert!(rendered.contains("\"generated_at\""));
    }
}
