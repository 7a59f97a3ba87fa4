/*!
# moodcal

moodcal is a one-sentence mood journal. Each day gets a short sentence, one of
five moods and an optional "important" flag, and the year is browsed as a
calendar whose days are colored by mood.

## Core Features

- Capture today's (or any day's) sentence and mood
- Browse a calendar window of twelve months back and forward
- Open a day read-only, or fill in a day that has no entry yet
- Derive per-day calendar marks: mood color, selection, importance flag

## Architecture

- `model`: moods, entries and the entry draft with its validation
- `store`: the injected `EntryRepository` and its JSON file implementation
- `marking`: pure derivation of calendar day marks
- `flow`: the capture and calendar screens and navigation between them
- `journal_core`: date parsing and the calendar scroll window
- `render`: plain-text month grid and entry listing
- `ops`: the operations behind each command
- `cli`, `config`, `errors`, `constants`: the ambient plumbing

## Usage Example

```rust,no_run
use moodcal::flow::{CaptureScreen, RecordingNavigator, Route};
use moodcal::model::Mood;
use moodcal::store::JsonFileStore;
use moodcal::Config;

fn main() -> moodcal::AppResult<()> {
    let config = Config::load()?;
    let mut store = JsonFileStore::open(&config.journal_dir)?;
    let mut navigator = RecordingNavigator::new(Route::Capture);

    let mut capture = CaptureScreen::new(chrono::Local::now().date_naive());
    capture.set_sentence("Built a cool calendar app!");
    capture.select_mood(Mood::Great);
    capture.submit(&mut store, &mut navigator)?;

    assert_eq!(navigator.current(), Route::Calendar);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Capture and calendar screens
pub mod flow;
/// Date handling without I/O
pub mod journal_core;
/// Calendar day marks
pub mod marking;
/// Moods and entries
pub mod model;
/// Operations behind each command
pub mod ops;
/// Text rendering of the calendar and entries
pub mod render;
/// Entry persistence
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::DateSpecifier;
pub use marking::{derive_marks, CalendarDayMark, DayMarks};
pub use model::{Entry, EntryDraft, EntryStore, Mood};
pub use store::{EntryRepository, JsonFileStore, MemoryStore};
