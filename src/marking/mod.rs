//! Calendar day marking.
//!
//! `derive_marks` turns the entry mapping and the currently selected day into
//! the per-day visual state a calendar widget consumes. It is recomputed from
//! scratch on every render; nothing here is persisted.

use crate::constants::{
    COLOR_DAY_TEXT, COLOR_FLAG_DOT, COLOR_NEUTRAL, COLOR_SELECTED, FLAG_GLYPH,
};
use crate::model::{EntryStore, Mood};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Visual state of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayMark {
    pub is_selected: bool,
    pub selected_color: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub is_flagged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_glyph: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Marks keyed by day, as handed to the calendar renderer.
pub type DayMarks = BTreeMap<NaiveDate, CalendarDayMark>;

impl CalendarDayMark {
    /// Mark for a day that has an entry.
    fn for_mood(mood: Mood, important: bool, is_selected: bool) -> Self {
        CalendarDayMark {
            is_selected,
            selected_color: COLOR_SELECTED,
            background_color: background_for(Some(mood)),
            text_color: COLOR_DAY_TEXT,
            is_flagged: important,
            dot_color: important.then_some(COLOR_FLAG_DOT),
            flag_glyph: important.then_some(FLAG_GLYPH),
            mood: Some(mood),
        }
    }

    /// Mark for the selected day when it has no entry yet.
    fn selection_only() -> Self {
        CalendarDayMark {
            is_selected: true,
            selected_color: COLOR_SELECTED,
            background_color: background_for(None),
            text_color: COLOR_DAY_TEXT,
            is_flagged: false,
            dot_color: None,
            flag_glyph: None,
            mood: None,
        }
    }
}

/// Cell color for a day; days without a recognized mood are gray.
fn background_for(mood: Option<Mood>) -> &'static str {
    mood.map_or(COLOR_NEUTRAL, Mood::color)
}

/// Derives the calendar marks for `entries` with `selected` highlighted.
///
/// The result has one mark per entry plus one for `selected` when it has no
/// entry, so the selection is always visible. Selection and mood coloring
/// compose on the same day.
///
/// # Examples
///
/// ```
/// use moodcal::marking::derive_marks;
/// use moodcal::model::EntryStore;
/// use chrono::NaiveDate;
///
/// let selected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let marks = derive_marks(&EntryStore::new(), selected);
///
/// assert_eq!(marks.len(), 1);
/// assert!(marks[&selected].is_selected);
/// assert_eq!(marks[&selected].background_color, "gray");
/// ```
pub fn derive_marks(entries: &EntryStore, selected: NaiveDate) -> DayMarks {
    let mut marks: DayMarks = entries
        .iter()
        .map(|(date, entry)| {
            (
                *date,
                CalendarDayMark::for_mood(entry.mood, entry.important, *date == selected),
            )
        })
        .collect();

    marks
        .entry(selected)
        .or_insert_with(CalendarDayMark::selection_only);

    marks
}
