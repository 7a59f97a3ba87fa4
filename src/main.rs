/*!
# moodcal - A One-Sentence Mood Journal

moodcal records one sentence and one mood per day and shows the year as a
colored calendar.

## Usage

```text
moodcal [OPTIONS] <COMMAND>

Commands:
  add       Record how your day went (defaults to today)
  day       Open a day on the calendar: show its entry, or fill one in
  calendar  Show a month of the mood calendar
  list      List every entry

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [possible values: text, json]
```

## Configuration

- `MOODCAL_DIR`: directory holding `entries.json` (defaults to `~/Documents/moodcal`)
- `MOODCAL_LOG_FORMAT`: `text` or `json`; `--log-format` takes precedence
- `RUST_LOG`: overrides the log filter
*/

use chrono::{Local, NaiveDate};
use clap::Parser;
use moodcal::cli::{CliArgs, Commands};
use moodcal::config::Config;
use moodcal::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use moodcal::errors::{AppError, AppResult};
use moodcal::journal_core::{parse_date_string, parse_month_string, DateSpecifier};
use moodcal::ops;
use moodcal::store::JsonFileStore;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Logging depends on the configuration, so it is loaded first and its
    // errors are reported without a subscriber.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_format, args.verbose);

    let span = tracing::info_span!(
        "app_invocation",
        service = TRACING_SERVICE_NAME,
        correlation_id = %Uuid::new_v4()
    );
    let _guard = span.enter();

    // Read the clock once so every step agrees on "today".
    let today = Local::now().date_naive();

    match run(args, config, today) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the environment configuration with `--log-format` applied on top.
fn load_config(args: &CliArgs) -> AppResult<Config> {
    let config = Config::load()?.with_log_format(args.log_format.as_deref());
    config.validate()?;
    Ok(config)
}

/// Installs the global subscriber writing to stderr.
///
/// `RUST_LOG` wins over `--verbose`.
fn init_tracing(log_format: &str, verbose: bool) {
    let level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == LOG_FORMAT_JSON {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn run(args: CliArgs, config: Config, today: NaiveDate) -> AppResult<()> {
    info!("Starting moodcal");
    debug!("CLI arguments: {:?}", args);
    debug!("Configuration: {:?}", config);

    let mut store = JsonFileStore::open(&config.journal_dir)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Add(add) => {
            let date = DateSpecifier::from_cli_arg(add.date.as_deref())
                .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))?
                .resolve(today);
            ops::add_entry(&mut store, date, add.fields.into_draft(), &mut out)?;
        }
        Commands::Day(day) => {
            let date = parse_date(&day.date)?;
            let draft = if day.fields.is_empty() {
                None
            } else {
                Some(day.fields.into_draft())
            };
            ops::open_day(&mut store, today, date, draft, &mut out)?;
        }
        Commands::Calendar(calendar) => {
            let selected = match calendar.select.as_deref() {
                Some(value) => parse_date(value)?,
                None => today,
            };
            let month = calendar
                .month
                .as_deref()
                .map(parse_month_string)
                .transpose()?;
            ops::show_calendar(&store, today, selected, month, calendar.json, &mut out)?;
        }
        Commands::List(list) => {
            ops::list_entries(&store, list.json, &mut out)?;
        }
    }

    info!("Done");
    Ok(())
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    parse_date_string(value)
        .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))
}
