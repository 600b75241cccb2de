pub mod extended;

use std::sync::OnceLock;

/// Subjects the input form knows about. Marks for other names still score
/// (the engine is permissive); these drive listings and input lint.
pub const SUBJECTS: [&str; 10] = [
    "Mathematics",
    "Science",
    "English",
    "History",
    "Geography",
    "Computer Science",
    "Physics",
    "Chemistry",
    "Biology",
    "Economics",
];

/// Interests selectable in the input form.
pub const INTERESTS: [&str; 15] = [
    "Problem Solving",
    "Creative Arts",
    "Management",
    "Technology",
    "Healthcare",
    "Teaching",
    "Research",
    "Finance",
    "Communication",
    "Social Work",
    "Engineering",
    "Sports & Fitness",
    "Environment",
    "Law & Justice",
    "Entertainment",
];

/// One career's scoring weights and descriptive metadata. Weight maps are
/// ordered pairs, not hash maps: renormalization and reason order must be
/// deterministic. Weights need not sum to 1; the engine renormalizes.
#[derive(Debug, Clone)]
pub struct CareerProfile {
    pub name: String,
    pub description: String,
    pub subject_weights: Vec<(String, f64)>,
    pub interest_weights: Vec<(String, f64)>,
    pub top_skills: Vec<String>,
    pub average_salary: String,
    pub job_outlook: String,
}

fn weights(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The built-in career catalog. Constructed once, shared read-only for the
/// life of the process; never mutated after that.
pub fn catalog() -> &'static [CareerProfile] {
    static CATALOG: OnceLock<Vec<CareerProfile>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> Vec<CareerProfile> {
    vec![
        CareerProfile {
            name: "Software Engineering".to_string(),
            description: "Design, develop, and maintain software applications and systems. \
                          Work with cutting-edge technologies to solve complex problems."
                .to_string(),
            subject_weights: weights(&[
                ("Mathematics", 0.3),
                ("Computer Science", 0.4),
                ("Physics", 0.2),
                ("Science", 0.1),
            ]),
            interest_weights: weights(&[
                ("Technology", 0.4),
                ("Problem Solving", 0.3),
                ("Engineering", 0.2),
                ("Research", 0.1),
            ]),
            top_skills: strings(&[
                "Programming",
                "System Design",
                "Problem Solving",
                "Technical Communication",
            ]),
            average_salary: "$85,000 - $150,000".to_string(),
            job_outlook: "Excellent growth (22% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Medical Doctor".to_string(),
            description: "Diagnose and treat patients, promoting health and wellness. \
                          Make a direct impact on people's lives through medical care."
                .to_string(),
            subject_weights: weights(&[
                ("Biology", 0.35),
                ("Chemistry", 0.25),
                ("Science", 0.25),
                ("Mathematics", 0.15),
            ]),
            interest_weights: weights(&[
                ("Healthcare", 0.4),
                ("Social Work", 0.3),
                ("Research", 0.2),
                ("Problem Solving", 0.1),
            ]),
            top_skills: strings(&[
                "Medical Knowledge",
                "Diagnosis",
                "Patient Care",
                "Critical Thinking",
            ]),
            average_salary: "$200,000 - $400,000".to_string(),
            job_outlook: "Strong growth (4% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Business Management".to_string(),
            description: "Lead organizations and teams to achieve business objectives. \
                          Develop strategies and oversee operations across various industries."
                .to_string(),
            subject_weights: weights(&[
                ("Mathematics", 0.25),
                ("Economics", 0.35),
                ("English", 0.25),
                ("History", 0.15),
            ]),
            interest_weights: weights(&[
                ("Management", 0.4),
                ("Finance", 0.3),
                ("Communication", 0.2),
                ("Problem Solving", 0.1),
            ]),
            top_skills: strings(&[
                "Leadership",
                "Strategic Planning",
                "Communication",
                "Financial Analysis",
            ]),
            average_salary: "$75,000 - $180,000".to_string(),
            job_outlook: "Average growth (8% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Creative Arts & Design".to_string(),
            description: "Express creativity through visual arts, graphic design, or multimedia. \
                          Create compelling visual content for various media."
                .to_string(),
            subject_weights: weights(&[
                ("English", 0.3),
                ("History", 0.2),
                ("Computer Science", 0.3),
                ("Mathematics", 0.2),
            ]),
            interest_weights: weights(&[
                ("Creative Arts", 0.5),
                ("Technology", 0.2),
                ("Entertainment", 0.2),
                ("Communication", 0.1),
            ]),
            top_skills: strings(&[
                "Design Software",
                "Creativity",
                "Visual Communication",
                "Project Management",
            ]),
            average_salary: "$45,000 - $90,000".to_string(),
            job_outlook: "Good growth (13% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Teaching & Education".to_string(),
            description: "Educate and inspire the next generation. Share knowledge and help \
                          students develop critical thinking skills."
                .to_string(),
            subject_weights: weights(&[
                ("English", 0.3),
                ("Mathematics", 0.25),
                ("Science", 0.25),
                ("History", 0.2),
            ]),
            interest_weights: weights(&[
                ("Teaching", 0.4),
                ("Social Work", 0.3),
                ("Communication", 0.2),
                ("Research", 0.1),
            ]),
            top_skills: strings(&[
                "Curriculum Development",
                "Communication",
                "Mentoring",
                "Assessment",
            ]),
            average_salary: "$40,000 - $70,000".to_string(),
            job_outlook: "Average growth (8% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Environmental Science".to_string(),
            description: "Study and protect the environment. Work on sustainability projects \
                          and environmental conservation initiatives."
                .to_string(),
            subject_weights: weights(&[
                ("Science", 0.3),
                ("Biology", 0.25),
                ("Chemistry", 0.25),
                ("Geography", 0.2),
            ]),
            interest_weights: weights(&[
                ("Environment", 0.4),
                ("Research", 0.3),
                ("Social Work", 0.2),
                ("Problem Solving", 0.1),
            ]),
            top_skills: strings(&[
                "Data Analysis",
                "Field Research",
                "Environmental Assessment",
                "Report Writing",
            ]),
            average_salary: "$55,000 - $95,000".to_string(),
            job_outlook: "Excellent growth (15% by 2030)".to_string(),
        },
        CareerProfile {
            name: "Financial Services".to_string(),
            description: "Manage investments, analyze markets, and provide financial advice. \
                          Help individuals and organizations make sound financial decisions."
                .to_string(),
            subject_weights: weights(&[
                ("Mathematics", 0.4),
                ("Economics", 0.4),
                ("English", 0.1),
                ("Computer Science", 0.1),
            ]),
            interest_weights: weights(&[
                ("Finance", 0.5),
                ("Management", 0.2),
                ("Problem Solving", 0.2),
                ("Technology", 0.1),
            ]),
            top_skills: strings(&[
                "Financial Analysis",
                "Risk Assessment",
                "Client Relations",
                "Data Interpretation",
            ]),
            average_salary: "$65,000 - $150,000".to_string(),
            job_outlook: "Good growth (6% by 2030)".to_string(),
        },
    ]
}

pub fn find(name: &str) -> Option<&'static CareerProfile> {
    catalog().iter().find(|profile| profile.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_careers_with_unique_names() {
        let names: HashSet<_> = catalog().iter().map(|profile| profile.name.as_str()).collect();
        assert_eq!(catalog().len(), 7);
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn catalog_weights_are_non_negative() {
        for profile in catalog() {
            for (_, weight) in profile
                .subject_weights
                .iter()
                .chain(profile.interest_weights.iter())
            {
                assert!(*weight >= 0.0, "{} has a negative weight", profile.name);
            }
        }
    }

    #[test]
    fn catalog_references_only_known_subjects_and_interests() {
        for profile in catalog() {
            for (subject, _) in &profile.subject_weights {
                assert!(
                    SUBJECTS.contains(&subject.as_str()),
                    "{} references unknown subject {subject}",
                    profile.name
                );
            }
            for (interest, _) in &profile.interest_weights {
                assert!(
                    INTERESTS.contains(&interest.as_str()),
                    "{} references unknown interest {interest}",
                    profile.name
                );
            }
        }
    }

    #[test]
    fn find_matches_exact_name_only() {
        assert!(find("Medical Doctor").is_some());
        assert!(find("medical doctor").is_none());
        assert!(find("Astronaut").is_none());
    }
}
