use crate::catalog;
use crate::error::{CareerscopeError, Result};
use std::fs;
use std::path::Path;

/// Write a starter student profile listing every known subject at mark 0
/// and the full interest menu as comments. Refuses to overwrite unless
/// forced.
pub fn write_profile_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CareerscopeError::FileExists(path.display().to_string()));
    }

    fs::write(path, render_template())?;
    Ok(())
}

fn render_template() -> String {
    let mut output = String::new();
    output.push_str("# careerscope student profile\n");
    output.push_str("# Fill in your marks (0-100) and uncomment the interests that apply.\n\n");
    output.push_str("# name = \"Your Name\"\n\n");

    output.push_str("interests = [\n");
    for interest in catalog::INTERESTS {
        output.push_str(&format!("    # \"{interest}\",\n"));
    }
    output.push_str("]\n\n");

    output.push_str("[marks]\n");
    for subject in catalog::SUBJECTS {
        if subject.contains(' ') {
            output.push_str(&format!("\"{subject}\" = 0\n"));
        } else {
            output.push_str(&format!("{subject} = 0\n"));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::input::StudentProfile;
    use tempfile::TempDir;

    #[test]
    fn template_round_trips_through_the_profile_parser() {
        let profile: StudentProfile =
            toml::from_str(&render_template()).expect("template should parse");
        assert_eq!(profile.marks.len(), catalog::SUBJECTS.len());
        assert!(profile.interests.is_empty());
        assert!(!profile.has_scoring_input());
    }

    #[test]
    fn write_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("student.toml");

        write_profile_template(&path, false).expect("first write should succeed");
        let second = write_profile_template(&path, false);
        assert!(matches!(second, Err(CareerscopeError::FileExists(_))));

        write_profile_template(&path, true).expect("forced write should succeed");
    }
}
