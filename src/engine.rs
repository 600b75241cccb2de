use crate::catalog::CareerProfile;
use crate::types::input::SubjectMark;
use crate::types::report::CareerRecommendation;
use crate::types::scoring::{Score, ScoringPolicy};

/// Raw mark at or above this adds a "Strong performance" reason.
const STRONG_MARK: u32 = 70;

/// Two or more matched interests add an alignment bonus reason.
const ALIGNED_INTEREST_MIN: usize = 2;

/// Score every catalog profile against the student's marks and interests,
/// drop profiles at or below the score floor, and return the top matches
/// sorted by score descending. Ties keep catalog order (stable sort).
///
/// Pure function: reads the catalog and inputs, allocates fresh output,
/// touches no shared state. Missing marks count as 0; marks outside 0-100
/// are used as-is.
pub fn recommend(
    marks: &[SubjectMark],
    interests: &[String],
    catalog: &[CareerProfile],
    policy: &ScoringPolicy,
) -> Vec<CareerRecommendation> {
    let mut recommendations: Vec<CareerRecommendation> = catalog
        .iter()
        .filter_map(|profile| score_profile(profile, marks, interests, policy))
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score));
    recommendations.truncate(policy.max_results);

    tracing::debug!(
        candidates = catalog.len(),
        qualified = recommendations.len(),
        "scoring run complete"
    );
    recommendations
}

fn score_profile(
    profile: &CareerProfile,
    marks: &[SubjectMark],
    interests: &[String],
    policy: &ScoringPolicy,
) -> Option<CareerRecommendation> {
    let mut reasons = Vec::new();

    // Subject component, renormalized over the profile's own weights.
    let mut subject_sum = 0.0;
    let mut subject_weight_total = 0.0;
    for (subject, weight) in &profile.subject_weights {
        let mark = marks
            .iter()
            .find(|entry| &entry.subject == subject)
            .map(|entry| entry.marks)
            .unwrap_or(0);
        subject_sum += f64::from(mark) / 100.0 * weight;
        subject_weight_total += weight;

        if mark >= STRONG_MARK {
            reasons.push(format!("Strong performance in {subject} ({mark}%)"));
        }
    }
    let subject_component = if subject_weight_total > 0.0 {
        subject_sum / subject_weight_total * policy.subject_weight
    } else {
        0.0
    };

    // Interest component: matched weight over total weight.
    let mut interest_sum = 0.0;
    let mut interest_weight_total = 0.0;
    let mut matched_interests = 0;
    for (interest, weight) in &profile.interest_weights {
        if interests.iter().any(|selected| selected == interest) {
            interest_sum += weight;
            matched_interests += 1;
            reasons.push(format!("Interest in {interest}"));
        }
        interest_weight_total += weight;
    }
    let interest_component = if interest_weight_total > 0.0 {
        interest_sum / interest_weight_total * policy.interest_weight
    } else {
        0.0
    };

    if matched_interests >= ALIGNED_INTEREST_MIN {
        reasons.push(format!(
            "Multiple aligned interests ({matched_interests} matches)"
        ));
    }

    // Round half away from zero; components are never negative here.
    let score = ((subject_component + interest_component) * 100.0).round() as Score;
    if score <= policy.score_floor {
        return None;
    }

    Some(CareerRecommendation {
        career: profile.name.clone(),
        score,
        description: profile.description.clone(),
        top_skills: profile.top_skills.clone(),
        average_salary: profile.average_salary.clone(),
        job_outlook: profile.job_outlook.clone(),
        match_reasons: reasons,
    })
}
