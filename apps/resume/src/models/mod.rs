pub mod entries;
pub mod levels;
pub mod resume;
pub mod section;

pub use entries::{Certification, Dated, Education, Language, Project, Skill, WorkExperience};
pub use levels::{LanguageLevel, SkillCategory, SkillLevel};
pub use resume::{PersonalInfo, Resume};
pub use section::{Entry, Section};
