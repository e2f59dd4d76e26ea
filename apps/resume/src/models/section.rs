use uuid::Uuid;

use super::entries::{Certification, Dated, Education, Language, Project, Skill, WorkExperience};
use super::resume::Resume;

/// The repeatable sections of a résumé, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Languages,
        Section::Projects,
        Section::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Experience => "Work Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Languages => "Languages",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
        }
    }

    pub fn len_in(self, resume: &Resume) -> usize {
        match self {
            Section::Experience => resume.experience.len(),
            Section::Education => resume.education.len(),
            Section::Skills => resume.skills.len(),
            Section::Languages => resume.languages.len(),
            Section::Projects => resume.projects.len(),
            Section::Certifications => resume.certifications.len(),
        }
    }
}

/// A record living in one of the résumé's ordered sections, identified by id.
pub trait Entry: Clone {
    const SECTION: Section;

    fn id(&self) -> Uuid;
    fn items(resume: &Resume) -> &[Self];
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self>;

    /// Normalization applied before the record is stored.
    fn prepare(&mut self) {}
}

pub fn find_by_id<T: Entry>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Replaces the entry sharing `entry`'s id in place. Returns `false` when no
/// entry matched and leaves `items` untouched.
pub fn replace_by_id<T: Entry>(items: &mut [T], entry: T) -> bool {
    match items.iter_mut().find(|item| item.id() == entry.id()) {
        Some(slot) => {
            *slot = entry;
            true
        }
        None => false,
    }
}

/// Removes every entry with `id`. Returns `true` if anything was removed.
pub fn remove_by_id<T: Entry>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

impl Entry for WorkExperience {
    const SECTION: Section = Section::Experience;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.experience
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.experience
    }
    fn prepare(&mut self) {
        self.normalize_period();
    }
}

impl Entry for Education {
    const SECTION: Section = Section::Education;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.education
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.education
    }
    fn prepare(&mut self) {
        self.normalize_period();
    }
}

impl Entry for Project {
    const SECTION: Section = Section::Projects;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.projects
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.projects
    }
    fn prepare(&mut self) {
        self.normalize_period();
    }
}

impl Entry for Skill {
    const SECTION: Section = Section::Skills;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.skills
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.skills
    }
}

impl Entry for Language {
    const SECTION: Section = Section::Languages;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.languages
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.languages
    }
}

impl Entry for Certification {
    const SECTION: Section = Section::Certifications;

    fn id(&self) -> Uuid {
        self.id
    }
    fn items(resume: &Resume) -> &[Self] {
        &resume.certifications
    }
    fn items_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.certifications
    }
}
