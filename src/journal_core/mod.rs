//! Core date handling without I/O operations.
//!
//! This module contains pure logic for choosing the day an entry is recorded
//! for and the month the calendar shows. Nothing here touches the store or
//! the clock; callers pass "today" in.

use crate::constants::{
    DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, FUTURE_SCROLL_MONTHS, MONTH_FORMAT,
    PAST_SCROLL_MONTHS,
};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

/// Which day an operation applies to.
///
/// # Examples
///
/// ```
/// use moodcal::journal_core::DateSpecifier;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// let spec = DateSpecifier::from_cli_arg(None).unwrap();
/// assert_eq!(spec.resolve(today), today);
///
/// let spec = DateSpecifier::from_cli_arg(Some("20250522")).unwrap();
/// assert_eq!(spec.resolve(today), NaiveDate::from_ymd_opt(2025, 5, 22).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DateSpecifier {
    /// The current local day.
    Today,

    /// A specific day given by the user.
    Specific(NaiveDate),
}

impl DateSpecifier {
    /// Creates a DateSpecifier from an optional `--date` argument.
    ///
    /// # Errors
    ///
    /// Returns `chrono::ParseError` if the date string is in neither
    /// YYYY-MM-DD nor YYYYMMDD format.
    pub fn from_cli_arg(date_str: Option<&str>) -> Result<Self, chrono::ParseError> {
        match date_str {
            Some(date_str) => parse_date_string(date_str).map(DateSpecifier::Specific),
            None => Ok(DateSpecifier::Today),
        }
    }

    /// The day this specifier names, given today's date.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateSpecifier::Today => today,
            DateSpecifier::Specific(date) => *date,
        }
    }
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format
pub fn parse_date_string(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

/// Parse a `YYYY-MM` month into the first day of that month.
///
/// Only the zero-padded form is accepted, so `2025-5` is rejected.
pub fn parse_month_string(month_str: &str) -> AppResult<NaiveDate> {
    let month_str = month_str.trim();
    NaiveDate::parse_from_str(&format!("{}-01", month_str), DATE_FORMAT_ISO)
        .ok()
        .filter(|first| first.format(MONTH_FORMAT).to_string() == month_str)
        .ok_or_else(|| {
            AppError::Journal(format!(
                "Invalid month format: {} (expected YYYY-MM)",
                month_str
            ))
        })
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The range of months the calendar can scroll through.
///
/// The window spans `PAST_SCROLL_MONTHS` before and `FUTURE_SCROLL_MONTHS`
/// after the month containing today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    first: NaiveDate,
    last: NaiveDate,
}

impl CalendarWindow {
    pub fn around(today: NaiveDate) -> Self {
        let current = month_start(today);
        CalendarWindow {
            first: current
                .checked_sub_months(Months::new(PAST_SCROLL_MONTHS))
                .unwrap_or(NaiveDate::MIN),
            last: current
                .checked_add_months(Months::new(FUTURE_SCROLL_MONTHS))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// First day of the earliest reachable month.
    pub fn first_month(&self) -> NaiveDate {
        self.first
    }

    /// First day of the latest reachable month.
    pub fn last_month(&self) -> NaiveDate {
        self.last
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let month = month_start(date);
        month >= self.first && month <= self.last
    }

    /// Returns the first day of `date`'s month if it is inside the window.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` naming the reachable range otherwise.
    pub fn check(&self, date: NaiveDate) -> AppResult<NaiveDate> {
        if self.contains(date) {
            Ok(month_start(date))
        } else {
            Err(AppError::Journal(format!(
                "Month {} is outside the calendar range {} to {}",
                date.format(MONTH_FORMAT),
                self.first.format(MONTH_FORMAT),
                self.last.format(MONTH_FORMAT)
            )))
        }
    }
}
