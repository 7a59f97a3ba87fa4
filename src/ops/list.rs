//! List every stored entry.

use crate::errors::{AppResult, StoreError};
use crate::model::Entry;
use crate::render::render_list;
use crate::store::EntryRepository;
use std::io::Write;

/// Prints all entries in date order, as text or as a JSON array.
pub fn list_entries(
    store: &dyn EntryRepository,
    json: bool,
    out: &mut dyn Write,
) -> AppResult<Vec<Entry>> {
    let entries = store.list_all()?;

    if json {
        let all: Vec<&Entry> = entries.values().collect();
        serde_json::to_writer_pretty(&mut *out, &all).map_err(StoreError::Serialize)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_list(&entries))?;
    }

    Ok(entries.into_values().collect())
}
