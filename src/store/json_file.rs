//! Durable entry store backed by a single JSON document.
//!
//! The document lives at `<journal_dir>/entries.json`:
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "2025-05-22": { "mood": "Okay", "sentence": "Watched a movie.", "important": true }
//!   }
//! }
//! ```
//!
//! Writes take an exclusive lock on a sidecar file, reload the document,
//! apply the change and replace the document atomically.

use crate::constants::{
    DATE_FORMAT_ISO, STORE_FILE_NAME, STORE_FORMAT_VERSION, STORE_LOCK_FILE_NAME,
};
use crate::errors::{AppError, AppResult, StoreError};
use crate::model::{validate_sentence, Entry, EntryStore, Mood};
use crate::store::{EntryRepository, StoreLock};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, StoredEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    mood: String,
    sentence: String,
    #[serde(default)]
    important: bool,
}

/// Entry store persisted as JSON in the journal directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store in `journal_dir`, creating the directory if needed.
    ///
    /// The document itself is created on the first save.
    ///
    /// # Errors
    ///
    /// - `AppError::Journal` if `journal_dir` is not absolute
    /// - `AppError::Io` if the directory cannot be created
    pub fn open(journal_dir: &Path) -> AppResult<Self> {
        ensure_journal_directory_exists(journal_dir)?;
        Ok(JsonFileStore {
            path: journal_dir.join(STORE_FILE_NAME),
            lock_path: journal_dir.join(STORE_LOCK_FILE_NAME),
        })
    }

    /// Path of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry from disk. A missing document is an empty store.
    pub fn load(&self) -> AppResult<EntryStore> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No entry document at {:?}, starting empty", self.path);
                return Ok(EntryStore::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document: StoredDocument =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if document.version != STORE_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: document.version,
                expected: STORE_FORMAT_VERSION,
            }
            .into());
        }

        let entries = document
            .entries
            .into_iter()
            .map(|(key, stored)| decode_entry(key, stored).map(|e| (e.date, e)))
            .collect::<Result<EntryStore, StoreError>>()?;

        debug!("Loaded {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    /// Replaces the document with `entries`.
    ///
    /// The new content is written to a temporary file in the same directory
    /// and renamed over the document, so readers never see a partial write.
    /// Callers updating a single entry should use [`EntryRepository::set`],
    /// which holds the store lock around the whole update.
    pub fn save(&self, entries: &EntryStore) -> AppResult<()> {
        let document = StoredDocument {
            version: STORE_FORMAT_VERSION,
            entries: entries
                .iter()
                .map(|(date, entry)| (date.format(DATE_FORMAT_ISO).to_string(), encode_entry(entry)))
                .collect(),
        };
        let mut json = serde_json::to_vec_pretty(&document).map_err(StoreError::Serialize)?;
        json.push(b'\n');

        let dir = self
            .path
            .parent()
            .ok_or_else(|| AppError::Journal(format!("No parent directory for {:?}", self.path)))?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(&json)?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;
            fs::set_permissions(
                temp.path(),
                Permissions::from_mode(DEFAULT_FILE_PERMISSIONS),
            )?;
        }

        temp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        debug!("Wrote {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

impl EntryRepository for JsonFileStore {
    fn get(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        Ok(self.load()?.remove(&date))
    }

    fn set(&mut self, entry: Entry) -> AppResult<()> {
        let _lock = StoreLock::acquire(&self.lock_path)?;

        let mut entries = self.load()?;
        let date = entry.date;
        let replaced = entries.insert(date, entry).is_some();
        self.save(&entries)?;

        if replaced {
            info!("Replaced entry for {}", date);
        } else {
            info!("Created entry for {}", date);
        }
        Ok(())
    }

    fn list_all(&self) -> AppResult<EntryStore> {
        self.load()
    }
}

fn decode_entry(key: String, stored: StoredEntry) -> Result<Entry, StoreError> {
    // Only the canonical zero-padded form is a key, so two keys can never
    // name the same day.
    let date = NaiveDate::parse_from_str(&key, DATE_FORMAT_ISO)
        .ok()
        .filter(|date| date.format(DATE_FORMAT_ISO).to_string() == key)
        .ok_or_else(|| StoreError::InvalidDate { key: key.clone() })?;

    let mood = stored
        .mood
        .parse::<Mood>()
        .map_err(|e| StoreError::UnknownMood {
            date: key.clone(),
            label: e.label,
        })?;

    let sentence = validate_sentence(&stored.sentence)
        .map_err(|source| StoreError::InvalidEntry { date: key, source })?;

    Ok(Entry {
        date,
        mood,
        sentence,
        important: stored.important,
    })
}

fn encode_entry(entry: &Entry) -> StoredEntry {
    StoredEntry {
        mood: entry.mood.label().to_string(),
        sentence: entry.sentence.clone(),
        important: entry.important,
    }
}

/// Ensures the journal directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_journal_directory_exists(journal_dir: &Path) -> AppResult<()> {
    if !journal_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Journal directory path must be absolute: {}",
            journal_dir.display()
        )));
    }

    if !journal_dir.exists() {
        fs::create_dir_all(journal_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create journal directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_DIR_PERMISSIONS;
            fs::set_permissions(journal_dir, Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))
                .map_err(|e| {
                    AppError::Io(io::Error::new(
                        e.kind(),
                        format!(
                            "Failed to set secure permissions on journal directory: {}",
                            e
                        ),
                    ))
                })?;
            debug!("Set 0o700 permissions on journal directory");
        }
    }
    Ok(())
}
