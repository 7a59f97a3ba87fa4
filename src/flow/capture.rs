//! The daily entry form.

use crate::errors::AppResult;
use crate::flow::{Navigator, Route};
use crate::model::{Entry, EntryDraft, Mood};
use crate::store::EntryRepository;
use chrono::NaiveDate;
use tracing::{debug, info};

/// State of the capture form for one target date.
///
/// The target date is fixed when the form is created; front ends pass today
/// unless the user asked for another day.
#[derive(Debug, Clone)]
pub struct CaptureScreen {
    date: NaiveDate,
    draft: EntryDraft,
}

impl CaptureScreen {
    pub fn new(date: NaiveDate) -> Self {
        CaptureScreen {
            date,
            draft: EntryDraft::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn set_sentence(&mut self, sentence: impl Into<String>) {
        self.draft.sentence = sentence.into();
    }

    /// Picks a mood. Picking again replaces the previous choice.
    pub fn select_mood(&mut self, mood: Mood) {
        self.draft.mood = Some(mood);
    }

    pub fn set_important(&mut self, important: bool) {
        self.draft.important = important;
    }

    /// Saves the entry and moves on to the calendar.
    ///
    /// An incomplete form is rejected with `AppError::Validation` and left as
    /// it was, nothing is written and no navigation happens. On success the
    /// form is cleared.
    pub fn submit(
        &mut self,
        store: &mut dyn EntryRepository,
        navigator: &mut dyn Navigator,
    ) -> AppResult<Entry> {
        let entry = self.draft.validate(self.date).map_err(|e| {
            debug!("Capture form rejected: {}", e);
            e
        })?;

        store.set(entry.clone())?;
        info!("Captured {} entry for {}", entry.mood, entry.date);

        self.draft = EntryDraft::default();
        navigator.go_to(Route::Calendar);
        Ok(entry)
    }
}
