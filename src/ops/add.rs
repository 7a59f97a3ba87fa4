//! Record a day's entry through the capture form.

use crate::errors::AppResult;
use crate::flow::{CalendarScreen, CaptureScreen, RecordingNavigator, Route};
use crate::model::{Entry, EntryDraft};
use crate::render::render_month;
use crate::store::EntryRepository;
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

/// Fills the capture form for `date` with `draft` and submits it.
///
/// On success the form hands over to the calendar, which is printed for the
/// month of `date` with that day selected.
///
/// # Errors
///
/// - `AppError::Validation` if the sentence is empty or too long, or no mood was given
/// - any store or output error
pub fn add_entry(
    store: &mut dyn EntryRepository,
    date: NaiveDate,
    draft: EntryDraft,
    out: &mut dyn Write,
) -> AppResult<Entry> {
    let mut navigator = RecordingNavigator::new(Route::Capture);
    let mut capture = CaptureScreen::new(date);

    capture.set_sentence(draft.sentence);
    if let Some(mood) = draft.mood {
        capture.select_mood(mood);
    }
    capture.set_important(draft.important);

    let entry = capture.submit(&mut *store, &mut navigator)?;
    writeln!(out, "Saved {} for {}.", entry.mood, entry.date)?;

    if navigator.current() == Route::Calendar {
        debug!("Showing calendar after capture");
        let calendar = CalendarScreen::new(date);
        let marks = calendar.marks(&*store)?;
        writeln!(out)?;
        write!(out, "{}", render_month(date, &marks))?;
    }

    Ok(entry)
}
