//! Screen routing.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// The two screens of the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    /// The daily entry form.
    Capture,
    /// The mood calendar.
    Calendar,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Capture => f.write_str("capture"),
            Route::Calendar => f.write_str("calendar"),
        }
    }
}

/// Moves the front end between screens.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// Navigator that remembers where it has been.
///
/// Every `go_to` replaces the current screen, like a router `replace`; the
/// history is kept for the caller to inspect.
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    current: Route,
    history: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new(start: Route) -> Self {
        RecordingNavigator {
            current: start,
            history: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        RecordingNavigator::new(Route::Capture)
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, route: Route) {
        debug!("Navigating {} -> {}", self.current, route);
        self.current = route;
        self.history.push(route);
    }
}
