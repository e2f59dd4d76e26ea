use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use super::kv::KeyValueStore;
use crate::errors::StoreError;

pub const CURRENT_RESUME_KEY: &str = "currentResume";
pub const SAVED_RESUMES_KEY: &str = "savedResumes";

pub fn encode<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Reads and decodes `key`. Missing, unreadable and malformed entries all
/// come back as `None`; only the latter two are logged.
pub fn read_or_absent<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Option<T> {
    let bytes = match kv.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read '{key}', starting from defaults: {e}");
            return None;
        }
    };
    match decode(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding undecodable '{key}' ({} bytes): {e}", bytes.len());
            None
        }
    }
}

/// Encodes `value` and writes it under `key`.
pub fn write<T: Serialize>(kv: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let bytes = encode(key, value)?;
    kv.set(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resume;
    use crate::store::kv::MemoryKeyValueStore;

    #[test]
    fn test_absent_key_reads_none() {
        let kv = MemoryKeyValueStore::new();
        assert!(read_or_absent::<Resume>(&kv, CURRENT_RESUME_KEY).is_none());
    }

    #[test]
    fn test_garbage_reads_none() {
        let kv = MemoryKeyValueStore::new();
        kv.set(CURRENT_RESUME_KEY, b"\x00not json").unwrap();
        assert!(read_or_absent::<Resume>(&kv, CURRENT_RESUME_KEY).is_none());
    }

    #[test]
    fn test_wrong_shape_reads_none() {
        let kv = MemoryKeyValueStore::new();
        kv.set(SAVED_RESUMES_KEY, br#"{"id": 5}"#).unwrap();
        assert!(read_or_absent::<Vec<Resume>>(&kv, SAVED_RESUMES_KEY).is_none());
    }

    #[test]
    fn test_write_then_read() {
        let kv = MemoryKeyValueStore::new();
        let resume = Resume::new();
        write(&kv, CURRENT_RESUME_KEY, &resume).unwrap();
        let read: Resume = read_or_absent(&kv, CURRENT_RESUME_KEY).unwrap();
        assert_eq!(read, resume);
    }
}
