use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::levels::{LanguageLevel, SkillCategory, SkillLevel};

const PERIOD_FORMAT: &str = "%b %Y";

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Trims `raw` and appends it to `items` unless nothing is left.
fn push_trimmed(items: &mut Vec<String>, raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    items.push(trimmed.to_string());
    true
}

/// A record spanning a period that may still be running.
///
/// The ongoing flag is authoritative: while it is set the end date is
/// treated as absent, and a record stored through the store never keeps both.
pub trait Dated {
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> Option<NaiveDate>;
    fn is_ongoing(&self) -> bool;
    fn end_date_mut(&mut self) -> &mut Option<NaiveDate>;
    fn ongoing_mut(&mut self) -> &mut bool;

    /// End of the period, `None` while ongoing.
    fn effective_end(&self) -> Option<NaiveDate> {
        if self.is_ongoing() {
            None
        } else {
            self.end_date()
        }
    }

    /// Setting a concrete end date closes the period.
    fn set_end_date(&mut self, end: Option<NaiveDate>) {
        if end.is_some() {
            *self.ongoing_mut() = false;
        }
        *self.end_date_mut() = end;
    }

    fn set_ongoing(&mut self, ongoing: bool) {
        *self.ongoing_mut() = ongoing;
        if ongoing {
            *self.end_date_mut() = None;
        }
    }

    /// Drops a stale end date left behind on an ongoing record.
    fn normalize_period(&mut self) {
        if self.is_ongoing() {
            *self.end_date_mut() = None;
        }
    }

    /// e.g. `"Mar 2021 - Present"` or `"Jan 2019 - Feb 2021"`.
    fn period_label(&self) -> String {
        let start = self.start_date().format(PERIOD_FORMAT);
        if self.is_ongoing() {
            return format!("{start} - Present");
        }
        match self.end_date() {
            Some(end) => format!("{start} - {}", end.format(PERIOD_FORMAT)),
            None => start.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current_position: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

impl Default for WorkExperience {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            location: String::new(),
            start_date: today(),
            end_date: None,
            is_current_position: false,
            description: String::new(),
            achievements: Vec::new(),
        }
    }
}

impl WorkExperience {
    pub fn new(company: impl Into<String>, position: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            start_date,
            ..Self::default()
        }
    }

    /// Appends a trimmed achievement; blank input is ignored.
    pub fn add_achievement(&mut self, text: &str) -> bool {
        push_trimmed(&mut self.achievements, text)
    }

    pub fn remove_achievement(&mut self, index: usize) -> Option<String> {
        (index < self.achievements.len()).then(|| self.achievements.remove(index))
    }
}

impl Dated for WorkExperience {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
    fn is_ongoing(&self) -> bool {
        self.is_current_position
    }
    fn end_date_mut(&mut self) -> &mut Option<NaiveDate> {
        &mut self.end_date
    }
    fn ongoing_mut(&mut self) -> &mut bool {
        &mut self.is_current_position
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    /// Free text; grading scales vary too much to model numerically.
    pub gpa: String,
    pub description: String,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            location: String::new(),
            start_date: today(),
            end_date: None,
            is_current: false,
            gpa: String::new(),
            description: String::new(),
        }
    }
}

impl Education {
    pub fn new(institution: impl Into<String>, degree: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
            start_date,
            ..Self::default()
        }
    }
}

impl Dated for Education {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
    fn is_ongoing(&self) -> bool {
        self.is_current
    }
    fn end_date_mut(&mut self) -> &mut Option<NaiveDate> {
        &mut self.end_date
    }
    fn ongoing_mut(&mut self) -> &mut bool {
        &mut self.is_current
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: String::new(),
            start_date: today(),
            end_date: None,
            is_ongoing: false,
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start_date,
            ..Self::default()
        }
    }

    /// Appends a trimmed technology tag; blank input is ignored.
    pub fn add_technology(&mut self, tag: &str) -> bool {
        push_trimmed(&mut self.technologies, tag)
    }

    pub fn remove_technology(&mut self, index: usize) -> Option<String> {
        (index < self.technologies.len()).then(|| self.technologies.remove(index))
    }
}

impl Dated for Project {
    fn start_date(&self) -> NaiveDate {
        self.start_date
    }
    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
    fn is_ongoing(&self) -> bool {
        self.is_ongoing
    }
    fn end_date_mut(&mut self) -> &mut Option<NaiveDate> {
        &mut self.end_date
    }
    fn ongoing_mut(&mut self) -> &mut bool {
        &mut self.is_ongoing
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            level: SkillLevel::default(),
            category: SkillCategory::default(),
        }
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, category: SkillCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
            category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    pub level: LanguageLevel,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            level: LanguageLevel::default(),
        }
    }
}

impl Language {
    pub fn new(name: impl Into<String>, level: LanguageLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Certification {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            issuer: String::new(),
            date: today(),
            link: None,
            description: None,
        }
    }
}

impl Certification {
    pub fn new(name: impl Into<String>, issuer: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            issuer: issuer.into(),
            date,
            ..Self::default()
        }
    }
}
