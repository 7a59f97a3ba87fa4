use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::model::{EntryDraft, Mood};
use clap::{Args, Parser, Subcommand};

/// A one-sentence mood journal with a calendar view
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record how your day went (defaults to today)
    Add(AddArgs),

    /// Open a day on the calendar: show its entry, or fill one in
    Day(DayArgs),

    /// Show a month of the mood calendar
    Calendar(CalendarArgs),

    /// List every entry
    List(ListArgs),
}

/// The entry form fields shared by `add` and `day`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryFields {
    /// One sentence about the day
    #[clap(short = 's', long)]
    pub sentence: Option<String>,

    /// Mood: terrible, bad, okay, good or great
    #[clap(short = 'm', long)]
    pub mood: Option<Mood>,

    /// Mark the day as important
    #[clap(short = 'i', long)]
    pub important: bool,
}

impl EntryFields {
    /// Whether any field was given on the command line.
    pub fn is_empty(&self) -> bool {
        self.sentence.is_none() && self.mood.is_none() && !self.important
    }

    /// Turns the flags into a form draft; a missing sentence becomes empty.
    pub fn into_draft(self) -> EntryDraft {
        EntryDraft::new(self.sentence.unwrap_or_default(), self.mood, self.important)
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[clap(flatten)]
    pub fields: EntryFields,

    /// Day to record (format: YYYY-MM-DD or YYYYMMDD; defaults to today)
    #[clap(short = 'd', long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct DayArgs {
    /// Day to open (format: YYYY-MM-DD or YYYYMMDD)
    pub date: String,

    #[clap(flatten)]
    pub fields: EntryFields,
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Month to show (format: YYYY-MM; defaults to the selected day's month)
    #[clap(long)]
    pub month: Option<String>,

    /// Day to highlight (format: YYYY-MM-DD or YYYYMMDD; defaults to today)
    #[clap(long)]
    pub select: Option<String>,

    /// Print the day marks as JSON instead of a grid
    #[clap(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print entries as JSON
    #[clap(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args() {
        let args = CliArgs::parse_from(vec![
            "moodcal", "add", "-s", "Watched a movie.", "-m", "okay", "--important",
        ]);
        match args.command {
            Commands::Add(add) => {
                assert_eq!(add.fields.sentence.as_deref(), Some("Watched a movie."));
                assert_eq!(add.fields.mood, Some(Mood::Okay));
                assert!(add.fields.important);
                assert!(add.date.is_none());
            }
            other => panic!("Expected Add, got {:?}", other),
        }
        assert!(!args.verbose);
        assert!(args.log_format.is_none());
    }

    #[test]
    fn test_add_with_date() {
        let args = CliArgs::parse_from(vec!["moodcal", "add", "--date", "20250522"]);
        match args.command {
            Commands::Add(add) => {
                assert_eq!(add.date.as_deref(), Some("20250522"));
                assert!(add.fields.is_empty());
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mood_is_rejected() {
        let result = CliArgs::try_parse_from(vec!["moodcal", "add", "--mood", "meh"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_args() {
        let args = CliArgs::parse_from(vec!["moodcal", "day", "2025-06-02", "--mood", "GOOD"]);
        match args.command {
            Commands::Day(day) => {
                assert_eq!(day.date, "2025-06-02");
                assert_eq!(day.fields.mood, Some(Mood::Good));
                assert!(!day.fields.is_empty());
            }
            other => panic!("Expected Day, got {:?}", other),
        }
    }

    #[test]
    fn test_fields_into_draft() {
        let fields = EntryFields {
            sentence: None,
            mood: Some(Mood::Bad),
            important: true,
        };
        let draft = fields.into_draft();
        assert!(draft.sentence.is_empty());
        assert_eq!(draft.mood, Some(Mood::Bad));
        assert!(draft.important);
    }

    #[test]
    fn test_calendar_args_and_global_flags() {
        let args = CliArgs::parse_from(vec![
            "moodcal",
            "calendar",
            "--month",
            "2025-05",
            "--json",
            "--verbose",
            "--log-format",
            "json",
        ]);
        assert!(args.verbose);
        assert_eq!(args.log_format.as_deref(), Some("json"));
        match args.command {
            Commands::Calendar(cal) => {
                assert_eq!(cal.month.as_deref(), Some("2025-05"));
                assert!(cal.select.is_none());
                assert!(cal.json);
            }
            other => panic!("Expected Calendar, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let result = CliArgs::try_parse_from(vec!["moodcal", "--log-format", "xml", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(CliArgs::try_parse_from(vec!["moodcal"]).is_err());
    }
}
