use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Resume, Section};

const NEW_RESUME_NAME: &str = "New resume";
const UNTITLED: &str = "Untitled";
const CREATED_ON_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Filled,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionCount {
    pub section: String,
    pub entry_count: usize,
    pub status: SectionStatus,
}

/// Home-screen view of the current document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeOverview {
    pub display_name: String,
    pub position: Option<String>,
    pub personal_info_filled: bool,
    pub sections: Vec<SectionCount>,
    pub total_entries: usize,
    /// Filled sections, counting personal info as one.
    pub completed_sections: usize,
}

impl ResumeOverview {
    pub fn of(resume: &Resume) -> Self {
        let info = &resume.personal_info;
        let full_name = info.full_name();
        let display_name = if full_name.is_empty() {
            NEW_RESUME_NAME.to_string()
        } else {
            full_name
        };
        let position = (!info.position.trim().is_empty()).then(|| info.position.clone());

        let sections: Vec<SectionCount> = Section::ALL
            .iter()
            .map(|&section| {
                let entry_count = section.len_in(resume);
                SectionCount {
                    section: section.label().to_string(),
                    entry_count,
                    status: if entry_count == 0 {
                        SectionStatus::Empty
                    } else {
                        SectionStatus::Filled
                    },
                }
            })
            .collect();

        let total_entries = sections.iter().map(|s| s.entry_count).sum();
        let completed_sections = sections
            .iter()
            .filter(|s| s.status == SectionStatus::Filled)
            .count()
            + usize::from(info.is_filled());

        ResumeOverview {
            display_name,
            position,
            personal_info_filled: info.is_filled(),
            sections,
            total_entries,
            completed_sections,
        }
    }
}

/// One card in the saved-snapshots list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotSummary {
    pub id: Uuid,
    pub title: String,
    /// `dd.mm.yyyy`, UTC.
    pub created_on: String,
    pub experience_count: usize,
    pub education_count: usize,
    pub skill_count: usize,
    pub project_count: usize,
}

impl SnapshotSummary {
    /// Title falls back to the person's name, then to "Untitled".
    pub fn of(resume: &Resume) -> Self {
        let title = resume
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                let name = resume.personal_info.full_name();
                if name.is_empty() {
                    UNTITLED.to_string()
                } else {
                    name
                }
            });

        SnapshotSummary {
            id: resume.id,
            title,
            created_on: resume.created_at.format(CREATED_ON_FORMAT).to_string(),
            experience_count: resume.experience.len(),
            education_count: resume.education.len(),
            skill_count: resume.skills.len(),
            project_count: resume.projects.len(),
        }
    }
}
