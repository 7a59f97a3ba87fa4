//! Show a month of the mood calendar.

use crate::constants::MONTH_FORMAT;
use crate::errors::{AppResult, StoreError};
use crate::flow::CalendarScreen;
use crate::journal_core::{month_start, CalendarWindow};
use crate::marking::DayMarks;
use crate::render::{render_legend, render_month};
use crate::store::EntryRepository;
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

/// Prints the calendar for `month` with `selected` highlighted.
///
/// `month` defaults to the month of `selected`. With `json` set the derived
/// marks are printed as a JSON object keyed by date instead of a grid; only
/// days that carry a mark appear in it.
///
/// # Errors
///
/// - `AppError::Journal` if the month lies outside the calendar's scroll range
/// - `AppError::Store` if the marks cannot be serialized
/// - any store or output error
pub fn show_calendar(
    store: &dyn EntryRepository,
    today: NaiveDate,
    selected: NaiveDate,
    month: Option<NaiveDate>,
    json: bool,
    out: &mut dyn Write,
) -> AppResult<DayMarks> {
    let month = CalendarWindow::around(today).check(month.unwrap_or(selected))?;
    debug!("Showing calendar for {}", month.format(MONTH_FORMAT));

    let screen = CalendarScreen::new(selected);
    let marks = screen.marks(store)?;

    if json {
        let visible: DayMarks = marks
            .iter()
            .filter(|(date, _)| month_start(**date) == month)
            .map(|(date, mark)| (*date, mark.clone()))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &visible).map_err(StoreError::Serialize)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_month(month, &marks))?;
        writeln!(out)?;
        write!(out, "{}", render_legend())?;
    }

    Ok(marks)
}
