use crate::types::report::MatchReport;

pub fn to_text(report: &MatchReport) -> String {
    let mut output = String::new();
    match &report.student {
        Some(student) => output.push_str(&format!("Career matches for {student}:\n")),
        None => output.push_str("Career matches:\n"),
    }

    if report.recommendations.is_empty() {
        output.push_str("  none above the match threshold\n");
        return output;
    }

    for (rank, recommendation) in report.recommendations.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}%]\n",
            rank + 1,
            recommendation.career,
            recommendation.score
        ));
        output.push_str(&format!(
            "   {} | {}\n",
            recommendation.average_salary, recommendation.job_outlook
        ));
        for reason in &recommendation.match_reasons {
            output.push_str(&format!("   - {reason}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::CareerRecommendation;

    #[test]
    fn text_report_lists_matches_with_reasons() {
        let report = MatchReport::new(
            Some("Asha".to_string()),
            vec![CareerRecommendation {
                career: "Financial Services".to_string(),
                score: 42,
                description: "desc".to_string(),
                top_skills: vec![],
                average_salary: "$1".to_string(),
                job_outlook: "Good".to_string(),
                match_reasons: vec!["Interest in Finance".to_string()],
            }],
        );

        let rendered = to_text(&report);
        assert!(rendered.contains("Career matches for Asha:"));
        assert!(rendered.contains("1. Financial Services [42%]"));
        assert!(rendered.contains("   - Interest in Finance"));
    }

    #[test]
    fn empty_text_report_says_none() {
        let rendered = to_text(&MatchReport::new(None, vec![]));
        assert!(rendered.contains("none above the match threshold"));
    }
}
