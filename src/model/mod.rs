//! Journal data model: moods, entries and form drafts.

mod entry;
mod mood;

pub use entry::{validate_sentence, Entry, EntryDraft, EntryStore};
pub use mood::{Mood, ParseMoodError};
