/// Display-only background for one career. This lookup is deliberately
/// decoupled from the scoring catalog; the two share only the career name.
#[derive(Debug, Clone)]
pub struct ExtendedInfo {
    pub work_environment: &'static str,
    pub typical_day: &'static str,
    pub education: &'static str,
    pub career_path: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub work_schedule: &'static str,
}

const FALLBACK: ExtendedInfo = ExtendedInfo {
    work_environment: "Varies by specific role and company",
    typical_day: "Professional responsibilities vary based on position",
    education: "Relevant degree and professional development",
    career_path: &["Entry Level", "Mid Level", "Senior Level", "Leadership"],
    industries: &["Various industries"],
    work_schedule: "Standard business hours",
};

/// Exact-name lookup with a generic fallback for unknown careers.
pub fn extended_info(career: &str) -> ExtendedInfo {
    match career {
        "Software Engineering" => ExtendedInfo {
            work_environment: "Office, Remote, or Hybrid environments",
            typical_day: "Writing code, debugging applications, collaborating with teams, \
                          attending meetings, code reviews",
            education: "Bachelor's degree in Computer Science, Software Engineering, or \
                        related field",
            career_path: &[
                "Junior Developer",
                "Software Engineer",
                "Senior Engineer",
                "Tech Lead",
                "Engineering Manager",
            ],
            industries: &["Technology", "Finance", "Healthcare", "E-commerce", "Gaming"],
            work_schedule: "Full-time, typically 40 hours/week with flexible schedules",
        },
        "Medical Doctor" => ExtendedInfo {
            work_environment: "Hospitals, clinics, private practices, emergency rooms",
            typical_day: "Patient consultations, diagnosis, treatment planning, surgeries, \
                          medical documentation",
            education: "Medical degree (MD), residency training, board certification",
            career_path: &[
                "Medical Student",
                "Resident",
                "Fellow",
                "Attending Physician",
                "Department Head",
            ],
            industries: &[
                "Healthcare",
                "Research",
                "Academia",
                "Public Health",
                "Pharmaceuticals",
            ],
            work_schedule: "Long hours, including nights and weekends, on-call duties",
        },
        "Business Management" => ExtendedInfo {
            work_environment: "Corporate offices, client sites, remote work options",
            typical_day: "Strategic planning, team meetings, project oversight, stakeholder \
                          communication, performance analysis",
            education: "Bachelor's degree in Business, MBA preferred for senior roles",
            career_path: &[
                "Analyst",
                "Manager",
                "Senior Manager",
                "Director",
                "VP",
                "C-Suite Executive",
            ],
            industries: &[
                "Consulting",
                "Manufacturing",
                "Retail",
                "Technology",
                "Finance",
            ],
            work_schedule: "Full-time, may require travel and extended hours during \
                            critical projects",
        },
        "Creative Arts & Design" => ExtendedInfo {
            work_environment: "Studios, agencies, freelance, remote work common",
            typical_day: "Concept development, designing, client presentations, revisions, \
                          collaboration with creative teams",
            education: "Bachelor's degree in Art, Design, or related field, portfolio essential",
            career_path: &[
                "Junior Designer",
                "Designer",
                "Senior Designer",
                "Art Director",
                "Creative Director",
            ],
            industries: &[
                "Advertising",
                "Media",
                "Gaming",
                "Publishing",
                "Entertainment",
            ],
            work_schedule: "Project-based deadlines, may include irregular hours",
        },
        "Teaching & Education" => ExtendedInfo {
            work_environment: "Schools, universities, online platforms, educational institutions",
            typical_day: "Lesson planning, teaching classes, grading, parent conferences, \
                          professional development",
            education: "Bachelor's degree in subject area, teaching certification required",
            career_path: &[
                "Student Teacher",
                "Teacher",
                "Lead Teacher",
                "Department Head",
                "Principal",
            ],
            industries: &[
                "Public Education",
                "Private Schools",
                "Higher Education",
                "Corporate Training",
            ],
            work_schedule: "School hours with evening and weekend work for planning and grading",
        },
        "Environmental Science" => ExtendedInfo {
            work_environment: "Field work, laboratories, offices, outdoor research sites",
            typical_day: "Data collection, analysis, report writing, environmental assessments, \
                          policy development",
            education: "Bachelor's degree in Environmental Science, advanced degrees for \
                        research roles",
            career_path: &[
                "Field Technician",
                "Environmental Scientist",
                "Senior Scientist",
                "Program Manager",
            ],
            industries: &[
                "Government",
                "Consulting",
                "Non-profits",
                "Energy",
                "Manufacturing",
            ],
            work_schedule: "Varies between office and field work, may include travel",
        },
        "Financial Services" => ExtendedInfo {
            work_environment: "Financial institutions, corporate offices, client meetings",
            typical_day: "Market analysis, client consultations, portfolio management, \
                          financial planning, compliance",
            education: "Bachelor's degree in Finance, Economics, or Business, certifications \
                        preferred",
            career_path: &[
                "Analyst",
                "Associate",
                "Vice President",
                "Senior VP",
                "Managing Director",
            ],
            industries: &[
                "Banking",
                "Investment Management",
                "Insurance",
                "Real Estate",
                "Consulting",
            ],
            work_schedule: "Full-time, may include long hours during market volatility",
        },
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_career_returns_specific_info() {
        let info = extended_info("Software Engineering");
        assert!(info.career_path.contains(&"Tech Lead"));
        assert!(info.industries.contains(&"Gaming"));
    }

    #[test]
    fn unknown_career_falls_back_to_generic_record() {
        let info = extended_info("Astronaut");
        assert_eq!(info.work_environment, "Varies by specific role and company");
        assert_eq!(info.career_path.len(), 4);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let info = extended_info("software engineering");
        assert_eq!(info.work_schedule, "Standard business hours");
    }

    #[test]
    fn every_catalog_career_has_specific_info() {
        for profile in crate::catalog::catalog() {
            let info = extended_info(&profile.name);
            assert_ne!(
                info.work_environment, FALLBACK.work_environment,
                "{} should not fall back",
                profile.name
            );
        }
    }
}
