//! Journal entries and the form draft they are built from.

use crate::constants::MAX_SENTENCE_CHARS;
use crate::errors::ValidationError;
use crate::model::Mood;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One day's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub sentence: String,
    pub important: bool,
}

/// All entries keyed by date. At most one entry per date.
pub type EntryStore = BTreeMap<NaiveDate, Entry>;

/// Form fields as the user fills them in.
///
/// A draft may be incomplete; `validate` turns it into an [`Entry`] once the
/// sentence and mood are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub sentence: String,
    pub mood: Option<Mood>,
    pub important: bool,
}

impl EntryDraft {
    pub fn new(sentence: impl Into<String>, mood: Option<Mood>, important: bool) -> Self {
        EntryDraft {
            sentence: sentence.into(),
            mood,
            important,
        }
    }

    /// Builds the entry for `date`, or names the first missing field.
    ///
    /// The sentence is stored trimmed. Checks run in form order: sentence,
    /// then mood.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodcal::model::{EntryDraft, Mood};
    /// use moodcal::errors::ValidationError;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    ///
    /// let draft = EntryDraft::new("  Long walk.  ", Some(Mood::Good), false);
    /// assert_eq!(draft.validate(date).unwrap().sentence, "Long walk.");
    ///
    /// let draft = EntryDraft::new("", Some(Mood::Good), false);
    /// assert_eq!(draft.validate(date), Err(ValidationError::EmptySentence));
    /// ```
    pub fn validate(&self, date: NaiveDate) -> Result<Entry, ValidationError> {
        let sentence = validate_sentence(&self.sentence)?;
        let mood = self.mood.ok_or(ValidationError::MissingMood)?;

        Ok(Entry {
            date,
            mood,
            sentence,
            important: self.important,
        })
    }
}

/// Checks a sentence and returns it trimmed.
pub fn validate_sentence(sentence: &str) -> Result<String, ValidationError> {
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptySentence);
    }

    let len = trimmed.chars().count();
    if len > MAX_SENTENCE_CHARS {
        return Err(ValidationError::SentenceTooLong {
            len,
            max: MAX_SENTENCE_CHARS,
        });
    }

    Ok(trimmed.to_string())
}
