//! Open a single day from the calendar.

use crate::errors::AppResult;
use crate::flow::{CalendarScreen, DayForm};
use crate::journal_core::CalendarWindow;
use crate::model::{Entry, EntryDraft};
use crate::render::{render_entry, render_month};
use crate::store::EntryRepository;
use chrono::NaiveDate;
use std::io::Write;
use tracing::{info, warn};

/// What happened when a day was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    /// The day already had an entry and it was shown read-only.
    Viewed(Entry),
    /// The day had no entry and the given fields were saved.
    Saved(Entry),
    /// The day had no entry and nothing was given to save.
    Empty,
}

/// Selects `date` on the calendar, as if the user tapped it.
///
/// A day with an entry is printed read-only and `draft` is ignored. A day
/// without one is filled in from `draft` and saved; with no draft the form is
/// dismissed.
///
/// # Errors
///
/// - `AppError::Journal` if `date` lies outside the calendar's scroll range
/// - `AppError::Validation` if the draft is incomplete
/// - any store or output error
pub fn open_day(
    store: &mut dyn EntryRepository,
    today: NaiveDate,
    date: NaiveDate,
    draft: Option<EntryDraft>,
    out: &mut dyn Write,
) -> AppResult<DayOutcome> {
    CalendarWindow::around(today).check(date)?;

    let mut calendar = CalendarScreen::new(today);
    let form = calendar.select(date, &*store)?.clone();

    match form {
        DayForm::Viewing { entry, .. } => {
            if draft.is_some() {
                warn!("Ignoring new fields for {}: the day already has an entry", date);
                writeln!(
                    out,
                    "{} already has an entry; entries are read-only from the calendar.",
                    date
                )?;
            }
            write!(out, "{}", render_entry(&entry))?;
            calendar.dismiss();
            Ok(DayOutcome::Viewed(entry))
        }
        DayForm::Editing { .. } => match draft {
            None => {
                writeln!(
                    out,
                    "No entry for {}. Add one with --sentence and --mood.",
                    date
                )?;
                calendar.dismiss();
                Ok(DayOutcome::Empty)
            }
            Some(draft) => {
                calendar.set_sentence(draft.sentence)?;
                if let Some(mood) = draft.mood {
                    calendar.select_mood(mood)?;
                }
                calendar.set_important(draft.important)?;

                let entry = calendar.save(&mut *store)?;
                info!("Saved entry for {} from the calendar", date);

                writeln!(out, "Saved {} for {}.", entry.mood, entry.date)?;
                writeln!(out)?;
                write!(out, "{}", render_month(date, &calendar.marks(&*store)?))?;
                Ok(DayOutcome::Saved(entry))
            }
        },
        DayForm::Browsing => Ok(DayOutcome::Empty),
    }
}
