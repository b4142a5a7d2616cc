//! Tolerant CSV ingestion: `user_id,YYYY-MM-DD,HH:MM:SS,HH:MM:SS`.
//!
//! The file is opened, fully read, and dropped within one call. A failed open
//! is fatal; malformed rows are skipped with a warning so a dirty export does
//! not break the whole load.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{DayPresence, PresenceIndex, UserId};

/// Result type for dataset loads.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type for dataset loads.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The CSV file could not be opened.
    #[error("cannot open presence data file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One raw CSV row; the file carries no header, fields are positional.
#[derive(Debug, Deserialize)]
struct RawEntry {
    user_id: i64,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

/// Load the presence CSV into the two-level user/date index.
///
/// Rows that fail to parse (wrong field count, unparsable id, date, or time)
/// are skipped and counted; the load continues with the remaining rows. When
/// the same user+date pair appears twice, the last occurrence wins.
pub fn get_data<P: AsRef<Path>>(path: P) -> LoadResult<PresenceIndex> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut index = PresenceIndex::new();
    let mut skipped = 0usize;

    for (line, result) in reader.deserialize::<RawEntry>().enumerate() {
        match result {
            Ok(entry) => {
                index
                    .entry(UserId::new(entry.user_id))
                    .or_default()
                    .insert(
                        entry.date,
                        DayPresence {
                            start: entry.start,
                            end: entry.end,
                        },
                    );
            }
            Err(err) => {
                skipped += 1;
                log::warn!("skipping malformed presence row {}: {}", line + 1, err);
            }
        }
    }

    if skipped > 0 {
        log::info!(
            "loaded {} users from {} ({} malformed rows skipped)",
            index.len(),
            path.display(),
            skipped
        );
    }

    Ok(index)
}
