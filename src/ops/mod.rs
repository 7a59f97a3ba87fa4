//! High-level operations behind the moodcal commands.
//!
//! Each operation drives the capture or calendar flow against an injected
//! entry store and writes its user-facing output to the given writer.

pub mod add;
pub mod calendar;
pub mod day;
pub mod list;

pub use add::add_entry;
pub use calendar::show_calendar;
pub use day::{open_day, DayOutcome};
pub use list::list_entries;
