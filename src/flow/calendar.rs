//! The calendar screen and its day form.
//!
//! Selecting a day opens a modal form. A day that already has an entry opens
//! read-only (`Viewing`); an empty day opens for input (`Editing`). Saving a
//! valid draft commits it and closes the form; dismissing closes it without
//! saving.

use crate::errors::{AppResult, FlowError};
use crate::flow::{Navigator, Route};
use crate::marking::{derive_marks, DayMarks};
use crate::model::{Entry, EntryDraft, Mood};
use crate::store::EntryRepository;
use chrono::NaiveDate;
use tracing::{debug, info};

/// State of the day form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayForm {
    /// No form open.
    Browsing,
    /// Read-only view of an existing entry.
    Viewing { date: NaiveDate, entry: Entry },
    /// Input form for a day without an entry.
    Editing { date: NaiveDate, draft: EntryDraft },
}

impl DayForm {
    /// Whether the form currently offers a save action.
    pub fn can_save(&self) -> bool {
        matches!(self, DayForm::Editing { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DayForm::Browsing)
    }
}

/// Calendar screen state: the selected day and the day form.
#[derive(Debug, Clone)]
pub struct CalendarScreen {
    selected: NaiveDate,
    form: DayForm,
}

impl CalendarScreen {
    /// Opens the calendar with `initial` selected and no form open.
    ///
    /// Front ends normally pass today.
    pub fn new(initial: NaiveDate) -> Self {
        CalendarScreen {
            selected: initial,
            form: DayForm::Browsing,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn form(&self) -> &DayForm {
        &self.form
    }

    /// Handles a tap on `date`.
    ///
    /// The day becomes the selection and the form opens for it, replacing any
    /// form that was already open. If the store cannot be read the screen is
    /// left as it was.
    pub fn select(&mut self, date: NaiveDate, store: &dyn EntryRepository) -> AppResult<&DayForm> {
        let existing = store.get(date)?;

        self.selected = date;
        self.form = match existing {
            Some(entry) => {
                debug!("Viewing entry for {}", date);
                DayForm::Viewing { date, entry }
            }
            None => {
                debug!("Editing new entry for {}", date);
                DayForm::Editing {
                    date,
                    draft: EntryDraft::default(),
                }
            }
        };
        Ok(&self.form)
    }

    pub fn set_sentence(&mut self, sentence: impl Into<String>) -> Result<(), FlowError> {
        self.draft_mut()?.sentence = sentence.into();
        Ok(())
    }

    pub fn select_mood(&mut self, mood: Mood) -> Result<(), FlowError> {
        self.draft_mut()?.mood = Some(mood);
        Ok(())
    }

    pub fn set_important(&mut self, important: bool) -> Result<(), FlowError> {
        self.draft_mut()?.important = important;
        Ok(())
    }

    /// Saves the open draft and closes the form.
    ///
    /// # Errors
    ///
    /// - `AppError::Flow(FlowError::NotEditing)` if no input form is open
    /// - `AppError::Validation` if the draft is incomplete; the form stays
    ///   open with the draft intact and nothing is written
    /// - any error from the store
    pub fn save(&mut self, store: &mut dyn EntryRepository) -> AppResult<Entry> {
        let entry = match &self.form {
            DayForm::Editing { date, draft } => draft.validate(*date)?,
            _ => return Err(FlowError::NotEditing.into()),
        };

        store.set(entry.clone())?;
        info!("Saved {} entry for {}", entry.mood, entry.date);

        self.form = DayForm::Browsing;
        Ok(entry)
    }

    /// Closes the form without saving.
    pub fn dismiss(&mut self) {
        if self.form.is_open() {
            debug!("Day form dismissed");
        }
        self.form = DayForm::Browsing;
    }

    /// Derives the marks for the current store and selection.
    pub fn marks(&self, store: &dyn EntryRepository) -> AppResult<DayMarks> {
        Ok(derive_marks(&store.list_all()?, self.selected))
    }

    /// Leaves the calendar for the entry form.
    pub fn back_to_entry(&mut self, navigator: &mut dyn Navigator) {
        self.dismiss();
        navigator.go_to(Route::Capture);
    }

    fn draft_mut(&mut self) -> Result<&mut EntryDraft, FlowError> {
        match &mut self.form {
            DayForm::Editing { draft, .. } => Ok(draft),
            _ => Err(FlowError::NotEditing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COLOR_NEUTRAL;
    use crate::errors::{AppError, ValidationError};
    use crate::flow::RecordingNavigator;
    use crate::model::EntryStore;
    use crate::store::MemoryStore;
    use std::io;

    /// Store whose every call fails, as a broken disk would.
    struct FailingStore;

    impl EntryRepository for FailingStore {
        fn get(&self, _date: NaiveDate) -> AppResult<Option<Entry>> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unavailable").into())
        }

        fn set(&mut self, _entry: Entry) -> AppResult<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unavailable").into())
        }

        fn list_all(&self) -> AppResult<EntryStore> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unavailable").into())
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_entries(vec![Entry {
            date: day(2025, 5, 22),
            mood: Mood::Okay,
            sentence: "Watched a movie.".to_string(),
            important: true,
        }])
    }

    #[test]
    fn test_starts_browsing_with_today_selected() {
        let screen = CalendarScreen::new(day(2025, 6, 1));
        assert_eq!(screen.selected(), day(2025, 6, 1));
        assert_eq!(screen.form(), &DayForm::Browsing);
        assert!(!screen.form().can_save());
    }

    #[test]
    fn test_selecting_entry_day_opens_read_only_view() {
        let store = seeded_store();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        let form = screen.select(day(2025, 5, 22), &store).unwrap();

        match form {
            DayForm::Viewing { date, entry } => {
                assert_eq!(*date, day(2025, 5, 22));
                assert_eq!(entry.sentence, "Watched a movie.");
            }
            other => panic!("Expected Viewing, got {:?}", other),
        }
        assert!(!screen.form().can_save());
        assert_eq!(screen.set_sentence("edit"), Err(FlowError::NotEditing));
    }

    #[test]
    fn test_selecting_empty_day_opens_editing() {
        let store = seeded_store();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 2), &store).unwrap();

        assert!(screen.form().can_save());
        assert_eq!(screen.selected(), day(2025, 6, 2));
    }

    #[test]
    fn test_save_commits_and_closes() {
        let mut store = seeded_store();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 2), &store).unwrap();
        screen.set_sentence("Long walk by the river.").unwrap();
        screen.select_mood(Mood::Good).unwrap();
        screen.set_important(true).unwrap();
        let saved = screen.save(&mut store).unwrap();

        assert_eq!(screen.form(), &DayForm::Browsing);
        assert_eq!(store.get(day(2025, 6, 2)).unwrap(), Some(saved));
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_save_with_empty_sentence_keeps_editing() {
        let mut store = seeded_store();
        let before = store.list_all().unwrap();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 2), &store).unwrap();
        screen.select_mood(Mood::Great).unwrap();
        let result = screen.save(&mut store);

        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptySentence))
        ));
        assert_eq!(store.list_all().unwrap(), before);
        match screen.form() {
            DayForm::Editing { draft, .. } => assert_eq!(draft.mood, Some(Mood::Great)),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_save_without_mood_keeps_editing() {
        let mut store = MemoryStore::new();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 1), &store).unwrap();
        screen.set_sentence("No mood chosen.").unwrap();

        assert!(matches!(
            screen.save(&mut store),
            Err(AppError::Validation(ValidationError::MissingMood))
        ));
        assert!(screen.form().can_save());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_outside_editing_is_rejected() {
        let mut store = seeded_store();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        assert!(matches!(
            screen.save(&mut store),
            Err(AppError::Flow(FlowError::NotEditing))
        ));

        screen.select(day(2025, 5, 22), &store).unwrap();
        assert!(matches!(
            screen.save(&mut store),
            Err(AppError::Flow(FlowError::NotEditing))
        ));
    }

    #[test]
    fn test_dismiss_discards_draft() {
        let mut store = MemoryStore::new();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 3), &store).unwrap();
        screen.set_sentence("Never mind.").unwrap();
        screen.select_mood(Mood::Bad).unwrap();
        screen.dismiss();

        assert_eq!(screen.form(), &DayForm::Browsing);
        assert!(store.list_all().unwrap().is_empty());
        assert!(screen.save(&mut store).is_err());
    }

    #[test]
    fn test_selecting_again_replaces_open_form() {
        let store = seeded_store();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        screen.select(day(2025, 6, 3), &store).unwrap();
        screen.set_sentence("draft").unwrap();
        screen.select(day(2025, 5, 22), &store).unwrap();

        assert!(matches!(screen.form(), DayForm::Viewing { .. }));
        screen.select(day(2025, 6, 3), &store).unwrap();
        match screen.form() {
            DayForm::Editing { draft, .. } => assert!(draft.sentence.is_empty()),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_select_leaves_screen_unchanged() {
        let store = MemoryStore::new();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));
        screen.select(day(2025, 6, 1), &store).unwrap();
        screen.set_sentence("Half written.").unwrap();
        let before = screen.form().clone();

        let result = screen.select(day(2025, 6, 2), &FailingStore);

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(screen.selected(), day(2025, 6, 1));
        assert_eq!(screen.form(), &before);
        match screen.form() {
            DayForm::Editing { date, .. } => assert_eq!(*date, screen.selected()),
            other => panic!("Expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn test_marks_follow_selection_and_saves() {
        let mut store = MemoryStore::new();
        let mut screen = CalendarScreen::new(day(2025, 6, 1));

        let marks = screen.marks(&store).unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[&day(2025, 6, 1)].background_color, COLOR_NEUTRAL);

        screen.select(day(2025, 6, 1), &store).unwrap();
        screen.set_sentence("Built a cool calendar app!").unwrap();
        screen.select_mood(Mood::Great).unwrap();
        screen.save(&mut store).unwrap();

        let marks = screen.marks(&store).unwrap();
        let mark = &marks[&day(2025, 6, 1)];
        assert_eq!(mark.background_color, Mood::Great.color());
        assert!(mark.is_selected);
    }

    #[test]
    fn test_back_to_entry_navigates_to_capture() {
        let store = MemoryStore::new();
        let mut nav = RecordingNavigator::new(Route::Calendar);
        let mut screen = CalendarScreen::new(day(2025, 6, 1));
        screen.select(day(2025, 6, 1), &store).unwrap();

        screen.back_to_entry(&mut nav);

        assert_eq!(nav.current(), Route::Capture);
        assert!(!screen.form().is_open());
    }
}
