use crate::types::report::MatchReport;

pub fn to_markdown(report: &MatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Career Matches\n\n");
    if let Some(student) = &report.student {
        output.push_str(&format!("Student: {student}\n\n"));
    }

    if report.recommendations.is_empty() {
        output.push_str("No careers scored above the match threshold.\n");
        return output;
    }

    for (rank, recommendation) in report.recommendations.iter().enumerate() {
        output.push_str(&format!(
            "## {}. {} ({}% match)\n\n",
            rank + 1,
            recommendation.career,
            recommendation.score
        ));
        output.push_str(&format!("{}\n\n", recommendation.description));
        output.push_str(&format!(
            "- Salary: {}\n- Outlook: {}\n- Top skills: {}\n",
            recommendation.average_salary,
            recommendation.job_outlook,
            recommendation.top_skills.join(", ")
        ));
        output.push_str("\nWhy this matches:\n\n");
        for reason in &recommendation.match_reasons {
            output.push_str(&format!("- {reason}\n"));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::CareerRecommendation;

    fn sample() -> MatchReport {
        MatchReport::new(
            None,
            vec![CareerRecommendation {
                career: "Medical Doctor".to_string(),
                score: 77,
                description: "desc".to_string(),
                top_skills: vec!["Diagnosis".to_string()],
                average_salary: "$1".to_string(),
                job_outlook: "Strong".to_string(),
                match_reasons: vec!["Interest in Healthcare".to_string()],
            }],
        )
    }

    #[test]
    fn markdown_report_contains_ranked_sections() {
        let rendered = to_markdown(&sample());
        assert!(rendered.contains("# Career Matches"));
        assert!(rendered.contains("## 1. Medical Doctor (77% match)"));
        assert!(rendered.contains("- Interest in Healthcare"));
    }

    #[test]
    fn empty_report_states_no_matches() {
        let report = MatchReport::new(None, vec![]);
        assert!(to_markdown(&report).contains("No careers scored above"));
    }
}
