use std::{collections::BTreeMap, fs, path::PathBuf, sync::Mutex};

use serde::{Deserialize, Serialize};

use showroom_core::{errors::Error, storage::KeyValueStore, Result};

const CURRENT_VERSION: u32 = 1;

/// Entry cap used by [`FileStore::new`].
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Key/value store persisted as a single JSON document.
///
/// The document is loaded once and served from memory afterwards. Every
/// write rewrites the whole file through a temporary sibling and a rename,
/// so a crash mid-write leaves the previous contents intact. At most
/// `max_entries` keys are kept; the least recently written go first.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    max_entries: usize,
    state: Mutex<Option<Entries>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    /// Write sequence number, used for eviction order
    seq: u64,
}

#[derive(Serialize, Deserialize, Default)]
struct StoreFile {
    version: u32,
    entries: BTreeMap<String, StoredEntry>,
}

#[derive(Debug, Default)]
struct Entries {
    map: BTreeMap<String, StoredEntry>,
    next_seq: u64,
}

impl Entries {
    fn insert(&mut self, key: &str, value: &str, max_entries: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.map.insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                seq,
            },
        );

        while self.map.len() > max_entries.max(1) {
            let oldest = self
                .map
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(oldest) => {
                    tracing::debug!("Evicting store entry {}", oldest);
                    self.map.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self::with_max_entries(path, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(path: PathBuf, max_entries: usize) -> Self {
        Self {
            path,
            max_entries,
            state: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn with_entries<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Entries) -> T,
    {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| Error::Storage("File store lock poisoned".into()))?;
        if guard.is_none() {
            *guard = Some(self.load()?);
        }
        match guard.as_mut() {
            Some(entries) => Ok(op(entries)),
            None => Err(Error::Storage("File store not loaded".into())),
        }
    }

    /// Reads the document from disk. A document that does not parse is set
    /// aside as `*.json.corrupt` and read as empty.
    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::default());
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(Entries::default());
        }

        match serde_json::from_slice::<StoreFile>(&raw) {
            Ok(file) => {
                let next_seq = file
                    .entries
                    .values()
                    .map(|e| e.seq + 1)
                    .max()
                    .unwrap_or(0);
                Ok(Entries {
                    map: file.entries,
                    next_seq,
                })
            }
            Err(e) => {
                let backup = self.path.with_extension("json.corrupt");
                tracing::warn!(
                    "Store file {} is unreadable ({}); starting empty, original kept at {}",
                    self.path.display(),
                    e,
                    backup.display()
                );
                if let Err(e) = fs::rename(&self.path, &backup) {
                    tracing::warn!("Failed to set aside corrupt store file: {}", e);
                }
                Ok(Entries::default())
            }
        }
    }

    fn persist(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = StoreFile {
            version: CURRENT_VERSION,
            entries: entries.map.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_entries(|entries| entries.map.get(key).map(|e| e.value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let max_entries = self.max_entries;
        self.with_entries(|entries| {
            entries.insert(key, value, max_entries);
            self.persist(entries)
        })?
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_entries(|entries| {
            if entries.map.remove(key).is_some() {
                self.persist(entries)
            } else {
                Ok(())
            }
        })?
    }
}
