use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entries::{Certification, Education, Language, Project, Skill, WorkExperience};
use super::levels::SkillCategory;

/// The root document a user edits.
///
/// `id` is assigned once in [`Resume::new`]; snapshots get a fresh one when
/// saved. `updated_at` is refreshed by the store on every persisted change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    /// Name given when the document was saved as a snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub personal_info: PersonalInfo,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: None,
            personal_info: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Skills grouped by category in declaration order. Empty groups are
    /// omitted; entry order inside a group is preserved.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        SkillCategory::ALL
            .iter()
            .filter_map(|&category| {
                let group: Vec<&Skill> = self
                    .skills
                    .iter()
                    .filter(|s| s.category == category)
                    .collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect()
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub summary: String,
    /// Opaque image bytes, stored as base64 on the wire.
    #[serde(skip_serializing_if = "Option::is_none", with = "base64_bytes")]
    pub profile_image: Option<Vec<u8>>,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The personal section counts as filled once a first name is present.
    pub fn is_filled(&self) -> bool {
        !self.first_name.trim().is_empty()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|e| STANDARD.decode(e).map_err(serde::de::Error::custom))
            .transpose()
    }
}
