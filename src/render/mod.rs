//! Plain-text rendering of the calendar and entries.
//!
//! The month grid only reads [`DayMarks`]; it has no access to the entries
//! themselves. Each cell shows the day number, the mood score (1 to 5) when
//! the day has a mood, `*` when flagged, and brackets around the selected
//! day.

use crate::constants::DATE_FORMAT_ISO;
use crate::marking::{CalendarDayMark, DayMarks};
use crate::model::{Entry, EntryStore, Mood};
use chrono::{Datelike, Months, NaiveDate};
use std::fmt::Write;

const CELL_WIDTH: usize = 7;
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Renders the month starting at `month` as a Monday-first grid.
///
/// # Examples
///
/// ```
/// use moodcal::marking::derive_marks;
/// use moodcal::model::EntryStore;
/// use moodcal::render::render_month;
/// use chrono::NaiveDate;
///
/// let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let grid = render_month(june, &derive_marks(&EntryStore::new(), june));
///
/// assert!(grid.contains("June 2025"));
/// assert!(grid.contains("[ 1   ]"));
/// ```
pub fn render_month(month: NaiveDate, marks: &DayMarks) -> String {
    let first = month.with_day(1).unwrap_or(month);
    let mut out = String::new();

    let title = first.format("%B %Y").to_string();
    let _ = writeln!(out, "{:^width$}", title, width = CELL_WIDTH * 7);
    for name in WEEKDAYS {
        let _ = write!(out, "{:^width$}", name, width = CELL_WIDTH);
    }
    out.push('\n');

    let leading = first.weekday().num_days_from_monday() as usize;
    out.push_str(&" ".repeat(leading * CELL_WIDTH));

    let mut column = leading;
    for date in days_of_month(first) {
        out.push_str(&render_cell(date, marks.get(&date)));
        column += 1;
        if column == 7 {
            out.truncate(out.trim_end_matches(' ').len());
            out.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');
    }

    out
}

fn render_cell(date: NaiveDate, mark: Option<&CalendarDayMark>) -> String {
    let selected = mark.is_some_and(|m| m.is_selected);
    let score = mark
        .and_then(|m| m.mood)
        .map(|mood| char::from(b'0' + mood.score()))
        .unwrap_or(' ');
    let flag = if mark.is_some_and(|m| m.is_flagged) {
        '*'
    } else {
        ' '
    };
    let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };

    format!("{}{:>2} {}{}{}", open, date.day(), score, flag, close)
}

fn days_of_month(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let next = first.checked_add_months(Months::new(1));
    first
        .iter_days()
        .take_while(move |date| next.map_or(true, |next| *date < next))
}

/// Renders the key explaining the grid's symbols and colors.
pub fn render_legend() -> String {
    let mut out = String::new();
    for mood in Mood::ALL {
        let _ = writeln!(out, "  {} {:<8} {}", mood.score(), mood.label(), mood.color());
    }
    out.push_str("  * important   [ ] selected\n");
    out
}

/// Renders one entry as shown in the read-only day view.
pub fn render_entry(entry: &Entry) -> String {
    format!(
        "{}  {} ({}/5){}\n  {}\n",
        entry.date.format(DATE_FORMAT_ISO),
        entry.mood,
        entry.mood.score(),
        if entry.important { "  * important" } else { "" },
        entry.sentence
    )
}

/// Renders every entry in date order.
pub fn render_list(entries: &EntryStore) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }
    entries.values().map(render_entry).collect()
}
