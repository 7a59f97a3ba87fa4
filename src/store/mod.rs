//! Entry persistence.
//!
//! Screens never own the entries. They are handed an [`EntryRepository`] and
//! read or write through it, so the same mapping backs both the capture form
//! and the calendar.

mod json_file;
mod lock;

pub use json_file::{ensure_journal_directory_exists, JsonFileStore};
pub use lock::StoreLock;

use crate::errors::AppResult;
use crate::model::{Entry, EntryStore};
use chrono::NaiveDate;

/// The persistence collaborator shared by both screens.
///
/// Keys are calendar dates; `set` replaces any entry already stored for the
/// same date.
pub trait EntryRepository {
    /// Returns the entry for `date`, if one was saved.
    fn get(&self, date: NaiveDate) -> AppResult<Option<Entry>>;

    /// Stores `entry` under its date, replacing any previous entry.
    fn set(&mut self, entry: Entry) -> AppResult<()>;

    /// Returns every stored entry.
    fn list_all(&self) -> AppResult<EntryStore>;
}

/// Keeps entries in memory for the lifetime of the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: EntryStore,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing entries.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        MemoryStore {
            entries: entries.into_iter().map(|e| (e.date, e)).collect(),
        }
    }
}

impl EntryRepository for MemoryStore {
    fn get(&self, date: NaiveDate) -> AppResult<Option<Entry>> {
        Ok(self.entries.get(&date).cloned())
    }

    fn set(&mut self, entry: Entry) -> AppResult<()> {
        self.entries.insert(entry.date, entry);
        Ok(())
    }

    fn list_all(&self) -> AppResult<EntryStore> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;

    fn entry(day: u32, mood: Mood, sentence: &str) -> Entry {
        Entry {
            date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            mood,
            sentence: sentence.to_string(),
            important: false,
        }
    }

    #[test]
    fn test_memory_store_get_and_list() {
        let store = MemoryStore::with_entries(vec![
            entry(1, Mood::Good, "one"),
            entry(2, Mood::Bad, "two"),
        ]);

        let got = store.get(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap()).unwrap();
        assert_eq!(got.unwrap().sentence, "two");
        assert!(store
            .get(NaiveDate::from_ymd_opt(2025, 5, 3).unwrap())
            .unwrap()
            .is_none());
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set(entry(1, Mood::Bad, "first")).unwrap();
        store.set(entry(1, Mood::Great, "second")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        let only = all.values().next().unwrap();
        assert_eq!(only.mood, Mood::Great);
        assert_eq!(only.sentence, "second");
    }
}
