//! Screen state machines.
//!
//! These types hold the view state of the two journal screens without any
//! rendering. A front end forwards user input to them and draws whatever they
//! report back. Entries always go through an injected
//! [`EntryRepository`](crate::store::EntryRepository).

mod calendar;
mod capture;
mod navigation;

pub use calendar::{CalendarScreen, DayForm};
pub use capture::CaptureScreen;
pub use navigation::{Navigator, RecordingNavigator, Route};
