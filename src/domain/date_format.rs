//! Human-readable `date` strings stored alongside each document.
//!
//! Both formats follow the ja-JP numeric style: year, month and day
//! separated by `/` with no zero padding. Comments additionally carry a
//! zero-padded `HH:MM` time.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// Formats a post date, e.g. `2026/1/5`.
#[must_use]
pub fn post_date(now: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = now.with_timezone(&offset);
    format!("{}/{}/{}", local.year(), local.month(), local.day())
}

/// Formats a comment date and time, e.g. `2026/1/5 09:07`.
#[must_use]
pub fn comment_date(now: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = now.with_timezone(&offset);
    format!(
        "{}/{}/{} {:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute()
    )
}
