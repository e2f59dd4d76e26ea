//! The résumé store: one current document being edited plus an ordered list
//! of saved snapshots, each persisted under its own key.
//!
//! Reads are forgiving (anything unreadable becomes an empty document or an
//! empty list). Writes report failure to the caller; the in-memory state is
//! kept either way and the next successful write carries it to disk.

pub mod codec;
mod editing;
pub mod events;
pub mod kv;

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::StoreError;
use crate::models::Resume;
use crate::summary::{ResumeOverview, SnapshotSummary};
use codec::{CURRENT_RESUME_KEY, SAVED_RESUMES_KEY};
use events::{Listener, ListenerId, Listeners, StoreEvent};
use kv::{FileKeyValueStore, KeyValueStore};

pub struct ResumeStore {
    kv: Arc<dyn KeyValueStore>,
    current: Resume,
    saved: Vec<Resume>,
    listeners: Listeners,
}

impl ResumeStore {
    /// Reads both keys once. Missing or malformed data yields a fresh empty
    /// document and an empty snapshot list.
    pub fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        let current = codec::read_or_absent::<Resume>(kv.as_ref(), CURRENT_RESUME_KEY)
            .unwrap_or_else(Resume::new);
        let saved = codec::read_or_absent::<Vec<Resume>>(kv.as_ref(), SAVED_RESUMES_KEY)
            .unwrap_or_default();

        info!(
            "Resume store opened: current {} ({} saved snapshots)",
            current.id,
            saved.len()
        );

        Self {
            kv,
            current,
            saved,
            listeners: Listeners::default(),
        }
    }

    /// Opens a directory-backed store at `config.data_dir`.
    pub fn open_with_config(config: &Config) -> Result<Self, StoreError> {
        let kv = FileKeyValueStore::open(&config.data_dir)?;
        Ok(Self::open(Arc::new(kv)))
    }

    pub fn current(&self) -> &Resume {
        &self.current
    }

    /// A copy of the current document as loaded at open or last installed.
    pub fn load_current(&self) -> Resume {
        self.current.clone()
    }

    /// Installs `resume` as the current document with a fresh `updated_at`
    /// and writes it out.
    pub fn persist_current(&mut self, mut resume: Resume) -> Result<(), StoreError> {
        resume.touch();
        self.current = resume;
        self.commit_current()
    }

    /// Applies `edit` to the current document, then persists it.
    pub fn update_current<F>(&mut self, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Resume),
    {
        edit(&mut self.current);
        self.current.touch();
        self.commit_current()
    }

    /// Saves a copy of `resume` as a new snapshot titled `name` (trimmed).
    ///
    /// The copy always gets a new id and fresh timestamps, so the same
    /// content can be saved any number of times as distinct snapshots.
    pub fn save_as(&mut self, resume: &Resume, name: &str) -> Result<Resume, StoreError> {
        let title = name.trim();
        if title.is_empty() {
            return Err(StoreError::Validation(
                "snapshot name must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let mut snapshot = resume.clone();
        snapshot.id = Uuid::new_v4();
        snapshot.title = Some(title.to_string());
        snapshot.created_at = now;
        snapshot.updated_at = now;

        self.saved.push(snapshot.clone());
        info!("Saved snapshot {} as '{title}' from {}", snapshot.id, resume.id);
        self.commit_saved()?;
        Ok(snapshot)
    }

    pub fn list_saved(&self) -> &[Resume] {
        &self.saved
    }

    pub fn saved(&self, id: Uuid) -> Option<&Resume> {
        self.saved.iter().find(|r| r.id == id)
    }

    /// Replaces the current document with a copy of the snapshot and persists
    /// it. Whatever was being edited is overwritten.
    pub fn load(&mut self, snapshot_id: Uuid) -> Result<(), StoreError> {
        let snapshot = self
            .saved(snapshot_id)
            .cloned()
            .ok_or(StoreError::NotFound(snapshot_id))?;
        info!("Loading snapshot {snapshot_id} into the current document");
        self.persist_current(snapshot)
    }

    /// Removes the snapshot with `snapshot_id`. Returns `Ok(false)` without
    /// writing when no snapshot matched.
    pub fn delete(&mut self, snapshot_id: Uuid) -> Result<bool, StoreError> {
        let before = self.saved.len();
        self.saved.retain(|r| r.id != snapshot_id);
        if self.saved.len() == before {
            return Ok(false);
        }
        info!("Deleted snapshot {snapshot_id}");
        self.commit_saved()?;
        Ok(true)
    }

    pub fn overview(&self) -> ResumeOverview {
        ResumeOverview::of(&self.current)
    }

    pub fn saved_summaries(&self) -> Vec<SnapshotSummary> {
        self.saved.iter().map(SnapshotSummary::of).collect()
    }

    /// PDF rendering is not part of this crate yet.
    pub fn export_pdf(&self) -> Result<Vec<u8>, StoreError> {
        Err(StoreError::NotImplemented("PDF export"))
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn commit_current(&mut self) -> Result<(), StoreError> {
        let result = codec::write(self.kv.as_ref(), CURRENT_RESUME_KEY, &self.current);
        if let Err(e) = &result {
            error!("Failed to persist current resume {}: {e}", self.current.id);
        }
        self.listeners.notify(StoreEvent::CurrentChanged);
        result
    }

    fn commit_saved(&mut self) -> Result<(), StoreError> {
        let result = codec::write(self.kv.as_ref(), SAVED_RESUMES_KEY, &self.saved);
        if let Err(e) = &result {
            error!("Failed to persist {} saved resumes: {e}", self.saved.len());
        }
        self.listeners.notify(StoreEvent::SavedChanged);
        result
    }
}

impl std::fmt::Debug for ResumeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeStore")
            .field("current", &self.current.id)
            .field("saved", &self.saved.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Skill, SkillCategory, SkillLevel};
    use crate::store::kv::MemoryKeyValueStore;
    use std::io::{Error, ErrorKind};
    use std::sync::Mutex;

    /// Reads nothing and refuses every write.
    pub(crate) struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &[u8]) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: Error::new(ErrorKind::Other, "disk full"),
            })
        }
    }

    pub(crate) fn memory_store() -> (Arc<MemoryKeyValueStore>, ResumeStore) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = ResumeStore::open(kv.clone());
        (kv, store)
    }

    #[test]
    fn test_empty_store_starts_fresh() {
        let (_, store) = memory_store();
        let current = store.load_current();
        assert!(current.personal_info.first_name.is_empty());
        assert!(current.personal_info.last_name.is_empty());
        assert!(current.skills.is_empty());
        assert!(store.list_saved().is_empty());
    }

    #[test]
    fn test_scenario_add_save_delete() {
        let (_, mut store) = memory_store();

        let go = Skill::new("Go", SkillLevel::Advanced, SkillCategory::Technical);
        store.add_entry(go.clone()).unwrap();
        assert_eq!(store.current().skills, vec![go]);

        let current = store.load_current();
        let snapshot = store.save_as(&current, "v1").unwrap();
        assert_eq!(store.list_saved().len(), 1);
        assert_ne!(store.list_saved()[0].id, store.current().id);
        assert_eq!(snapshot.title.as_deref(), Some("v1"));

        assert!(store.delete(snapshot.id).unwrap());
        assert!(store.list_saved().is_empty());
    }

    #[test]
    fn test_save_as_always_new_ids() {
        let (_, mut store) = memory_store();
        let current = store.load_current();
        let a = store.save_as(&current, "a").unwrap();
        let b = store.save_as(&current, "a").unwrap();
        assert_ne!(a.id, current.id);
        assert_ne!(b.id, current.id);
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_saved().len(), 2);
    }

    #[test]
    fn test_save_as_rejects_blank_name() {
        let (kv, mut store) = memory_store();
        let current = store.load_current();
        let err = store.save_as(&current, "   ").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.list_saved().is_empty());
        assert!(kv.get(SAVED_RESUMES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_as_trims_name() {
        let (_, mut store) = memory_store();
        let current = store.load_current();
        let snapshot = store.save_as(&current, "  Backend roles \n").unwrap();
        assert_eq!(snapshot.title.as_deref(), Some("Backend roles"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (_, mut store) = memory_store();
        let current = store.load_current();
        store.save_as(&current, "keep").unwrap();
        let before = store.list_saved().to_vec();

        assert!(!store.delete(Uuid::new_v4()).unwrap());
        assert_eq!(store.list_saved(), before.as_slice());
    }

    #[test]
    fn test_current_survives_restart() {
        let (kv, mut store) = memory_store();
        let mut resume = store.load_current();
        resume.personal_info.first_name = "Grace".into();
        resume
            .skills
            .push(Skill::new("COBOL", SkillLevel::Expert, SkillCategory::ProgrammingLanguage));
        store.persist_current(resume).unwrap();
        let persisted = store.load_current();
        drop(store);

        let reopened = ResumeStore::open(kv);
        assert_eq!(reopened.load_current(), persisted);
    }

    #[test]
    fn test_saved_survive_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());
        let snapshot = {
            let mut store = ResumeStore::open_with_config(&config).unwrap();
            let current = store.load_current();
            store.save_as(&current, "disk").unwrap()
        };

        let reopened = ResumeStore::open_with_config(&config).unwrap();
        assert_eq!(reopened.list_saved(), &[snapshot]);
    }

    #[test]
    fn test_persist_refreshes_updated_at() {
        let (_, mut store) = memory_store();
        let resume = store.load_current();
        let before = resume.updated_at;
        store.persist_current(resume).unwrap();
        assert!(store.current().updated_at >= before);
        assert_eq!(store.current().created_at, before);
    }

    #[test]
    fn test_corrupt_current_starts_fresh_and_keeps_saved() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let snapshot = Resume::new();
        kv.set(CURRENT_RESUME_KEY, b"{ truncated").unwrap();
        kv.set(SAVED_RESUMES_KEY, &serde_json::to_vec(&vec![snapshot.clone()]).unwrap())
            .unwrap();

        let store = ResumeStore::open(kv);
        assert!(store.current().experience.is_empty());
        assert_eq!(store.list_saved(), &[snapshot]);
    }

    #[test]
    fn test_corrupt_saved_starts_empty() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(SAVED_RESUMES_KEY, b"42").unwrap();
        let store = ResumeStore::open(kv);
        assert!(store.list_saved().is_empty());
    }

    #[test]
    fn test_load_overwrites_current() {
        let (kv, mut store) = memory_store();
        let mut draft = store.load_current();
        draft.personal_info.first_name = "Snapshot".into();
        let snapshot = store.save_as(&draft, "v1").unwrap();

        store
            .update_current(|r| r.personal_info.first_name = "Draft".into())
            .unwrap();
        store.load(snapshot.id).unwrap();

        assert_eq!(store.current().personal_info.first_name, "Snapshot");
        assert_eq!(store.current().id, snapshot.id);
        let on_disk: Resume = codec::read_or_absent(kv.as_ref(), CURRENT_RESUME_KEY).unwrap();
        assert_eq!(&on_disk, store.current());
    }

    #[test]
    fn test_load_unknown_snapshot() {
        let (_, mut store) = memory_store();
        let id = Uuid::new_v4();
        assert!(matches!(store.load(id), Err(StoreError::NotFound(missing)) if missing == id));
    }

    #[test]
    fn test_write_failure_is_reported_not_fatal() {
        let mut store = ResumeStore::open(Arc::new(FailingStore));
        let err = store
            .update_current(|r| r.personal_info.first_name = "Kept".into())
            .unwrap_err();
        assert_eq!(err.code(), "STORAGE_ERROR");
        assert_eq!(store.current().personal_info.first_name, "Kept");

        let current = store.load_current();
        assert!(store.save_as(&current, "v1").is_err());
        assert_eq!(store.list_saved().len(), 1);
    }

    #[test]
    fn test_listeners_see_each_change() {
        let (_, mut store) = memory_store();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let id = store.subscribe(Box::new(move |e: StoreEvent| {
            sink.lock().unwrap().push(e)
        }));

        let current = store.load_current();
        store.persist_current(current.clone()).unwrap();
        let snapshot = store.save_as(&current, "v1").unwrap();
        store.delete(snapshot.id).unwrap();
        store.delete(snapshot.id).unwrap();

        assert!(store.unsubscribe(id));
        store.persist_current(current).unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                StoreEvent::CurrentChanged,
                StoreEvent::SavedChanged,
                StoreEvent::SavedChanged
            ]
        );
    }

    #[test]
    fn test_saved_summaries_follow_list_order() {
        let (_, mut store) = memory_store();
        let current = store.load_current();
        store.save_as(&current, "first").unwrap();
        store.save_as(&current, "second").unwrap();
        let titles: Vec<String> = store.saved_summaries().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(store.overview().display_name, "New resume");
    }

    #[test]
    fn test_export_pdf_not_implemented() {
        let (_, store) = memory_store();
        assert!(matches!(store.export_pdf(), Err(StoreError::NotImplemented(_))));
    }
}
