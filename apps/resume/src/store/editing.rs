//! Edit operations the forms call: locate by id in the current document's
//! section, append/replace/remove, then persist the current document.

use tracing::debug;
use uuid::Uuid;

use super::ResumeStore;
use crate::errors::StoreError;
use crate::models::section::{find_by_id, remove_by_id, replace_by_id};
use crate::models::{Entry, PersonalInfo};

impl ResumeStore {
    pub fn entry<T: Entry>(&self, id: Uuid) -> Option<&T> {
        find_by_id(T::items(&self.current), id)
    }

    /// Appends `entry` to its section, or replaces it in place when an entry
    /// with the same id already exists.
    pub fn add_entry<T: Entry>(&mut self, mut entry: T) -> Result<(), StoreError> {
        entry.prepare();
        let id = entry.id();
        let items = T::items_mut(&mut self.current);
        if !replace_by_id(items, entry.clone()) {
            items.push(entry);
        }
        debug!("Stored {:?} entry {id}", T::SECTION);
        self.current.touch();
        self.commit_current()
    }

    /// Replaces the entry with the same id, keeping its position. Returns
    /// `Ok(false)` without writing when nothing matched.
    pub fn update_entry<T: Entry>(&mut self, mut entry: T) -> Result<bool, StoreError> {
        entry.prepare();
        let id = entry.id();
        if !replace_by_id(T::items_mut(&mut self.current), entry) {
            debug!("No {:?} entry {id} to update", T::SECTION);
            return Ok(false);
        }
        self.current.touch();
        self.commit_current()?;
        Ok(true)
    }

    /// Removes the entry with `id`. Returns `Ok(false)` without writing when
    /// nothing matched.
    pub fn remove_entry<T: Entry>(&mut self, id: Uuid) -> Result<bool, StoreError> {
        if !remove_by_id(T::items_mut(&mut self.current), id) {
            return Ok(false);
        }
        debug!("Removed {:?} entry {id}", T::SECTION);
        self.current.touch();
        self.commit_current()?;
        Ok(true)
    }

    /// Replaces the personal section. The stored profile image is kept when
    /// `info` carries none; use [`ResumeStore::set_profile_image`] to clear it.
    pub fn update_personal_info(&mut self, mut info: PersonalInfo) -> Result<(), StoreError> {
        if info.profile_image.is_none() {
            info.profile_image = self.current.personal_info.profile_image.take();
        }
        self.current.personal_info = info;
        self.current.touch();
        self.commit_current()
    }

    /// Stores the picked profile image (or clears it) and persists at once.
    pub fn set_profile_image(&mut self, image: Option<Vec<u8>>) -> Result<(), StoreError> {
        debug!(
            "Setting profile image ({} bytes)",
            image.as_ref().map_or(0, Vec::len)
        );
        self.current.personal_info.profile_image = image;
        self.current.touch();
        self.commit_current()
    }
}
