use crate::error::CareerscopeError;
use crate::types::scoring::ScoringPolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerscopeConfig {
    pub output: Option<OutputConfig>,
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub subject_weight: Option<f64>,
    pub interest_weight: Option<f64>,
    pub score_floor: Option<u32>,
    pub max_results: Option<usize>,
}

impl CareerscopeConfig {
    pub fn scoring_policy(&self) -> ScoringPolicy {
        let defaults = ScoringPolicy::default();
        match &self.scoring {
            Some(scoring) => ScoringPolicy {
                subject_weight: scoring.subject_weight.unwrap_or(defaults.subject_weight),
                interest_weight: scoring.interest_weight.unwrap_or(defaults.interest_weight),
                score_floor: scoring.score_floor.unwrap_or(defaults.score_floor),
                max_results: scoring.max_results.unwrap_or(defaults.max_results),
            },
            None => defaults,
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), CareerscopeError> {
        let policy = self.scoring_policy();

        for (key, weight) in [
            ("scoring.subject_weight", policy.subject_weight),
            ("scoring.interest_weight", policy.interest_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(CareerscopeError::ConfigParse(format!(
                    "{key} must be between 0.0 and 1.0"
                )));
            }
        }

        let weight_sum = policy.subject_weight + policy.interest_weight;
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(CareerscopeError::ConfigParse(format!(
                "scoring weights must sum to 1.0 (found {weight_sum:.3})"
            )));
        }

        if policy.max_results == 0 {
            return Err(CareerscopeError::ConfigParse(
                "scoring.max_results must be at least 1".to_string(),
            ));
        }

        if let Some(format) = self.default_format() {
            if !matches!(format, "text" | "md" | "json") {
                return Err(CareerscopeError::ConfigParse(format!(
                    "output.format must be one of text, md, json (found {format})"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_default_policy() {
        let config = CareerscopeConfig::default();
        assert_eq!(config.scoring_policy(), ScoringPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_scoring_overrides_merge_with_defaults() {
        let config: CareerscopeConfig = toml::from_str(
            r#"
[scoring]
max_results = 3
"#,
        )
        .expect("config should parse");

        let policy = config.scoring_policy();
        assert_eq!(policy.max_results, 3);
        assert_eq!(policy.score_floor, 20);
        assert!((policy.subject_weight - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_weights_that_do_not_sum_to_one() {
        let config: CareerscopeConfig = toml::from_str(
            r#"
[scoring]
subject_weight = 0.8
interest_weight = 0.4
"#,
        )
        .expect("config should parse");

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_max_results_and_unknown_format() {
        let zero: CareerscopeConfig = toml::from_str("[scoring]\nmax_results = 0")
            .expect("config should parse");
        assert!(zero.validate().is_err());

        let format: CareerscopeConfig = toml::from_str("[output]\nformat = \"yaml\"")
            .expect("config should parse");
        assert!(format.validate().is_err());
    }
}
