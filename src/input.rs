use crate::catalog;
use crate::error::{CareerscopeError, Result};
use crate::types::input::StudentProfile;
use std::path::Path;

/// Read and parse a student profile file. Unknown subject or interest
/// names are reported as warnings, never as failures: the scorer is
/// permissive and unmatched names simply contribute nothing.
pub fn load_profile(path: &Path) -> Result<StudentProfile> {
    let content = std::fs::read_to_string(path)?;
    let profile: StudentProfile = toml::from_str(&content)
        .map_err(|e| CareerscopeError::InputParse(format!("{}: {}", path.display(), e)))?;

    for mark in &profile.marks {
        if !catalog::SUBJECTS.contains(&mark.subject.as_str()) {
            tracing::warn!(subject = %mark.subject, "unknown subject in profile");
        }
    }
    for interest in &profile.interests {
        if !catalog::INTERESTS.contains(&interest.as_str()) {
            tracing::warn!(%interest, "unknown interest in profile");
        }
    }

    Ok(profile)
}
