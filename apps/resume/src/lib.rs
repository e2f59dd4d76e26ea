//! Document model and on-device persistence for a résumé builder.
//!
//! The presentation layer holds a [`ResumeStore`], reads the current
//! document from it, edits through its entry operations and subscribes to
//! [`StoreEvent`]s to refresh.

pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod summary;
pub mod telemetry;

pub use config::Config;
pub use errors::StoreError;
pub use models::{
    Certification, Dated, Education, Entry, Language, LanguageLevel, PersonalInfo, Project,
    Resume, Section, Skill, SkillCategory, SkillLevel, WorkExperience,
};
pub use store::events::{ListenerId, StoreEvent};
pub use store::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use store::ResumeStore;
pub use summary::{ResumeOverview, SnapshotSummary};
