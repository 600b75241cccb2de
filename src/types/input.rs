use serde::Deserialize;

/// One self-reported mark. Marks are taken as entered; values outside
/// 0-100 are not clamped and flow into the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectMark {
    pub subject: String,
    pub marks: u32,
}

/// A student profile as parsed from TOML. Top-level keys come before the
/// marks table:
///
/// ```toml
/// name = "Asha"
/// interests = ["Technology", "Problem Solving"]
///
/// [marks]
/// Mathematics = 90
/// "Computer Science" = 95
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentProfile {
    pub name: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, with = "marks_as_pairs")]
    pub marks: Vec<SubjectMark>,
}

impl StudentProfile {
    pub fn has_scoring_input(&self) -> bool {
        self.marks.iter().any(|mark| mark.marks > 0) || !self.interests.is_empty()
    }
}

/// Deserialize the `[marks]` table into ordered pairs so file order is
/// preserved instead of being scrambled through a hash map.
mod marks_as_pairs {
    use super::SubjectMark;
    use serde::de::{Deserializer, MapAccess, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SubjectMark>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarksVisitor;

        impl<'de> Visitor<'de> for MarksVisitor {
            type Value = Vec<SubjectMark>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a table of subject name to integer mark")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut marks = Vec::new();
                while let Some((subject, value)) = map.next_entry::<String, u32>()? {
                    marks.push(SubjectMark {
                        subject,
                        marks: value,
                    });
                }
                Ok(marks)
            }
        }

        deserializer.deserialize_map(MarksVisitor)
    }
}
