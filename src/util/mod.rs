use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use chrono_tz::Tz::America__New_York;

pub mod game_info;
pub mod officials;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod statsapi;

/// The league's official dates roll over on eastern time.
pub const TIMEZONE: Tz = America__New_York;

pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&TIMEZONE).date_naive()
}

pub fn hyphenate(s: &str) -> String {
    s.replace(' ', "-")
}

/// Rendered width in characters, which is what `{:<n$}` padding counts.
pub fn width(s: &str) -> usize {
    s.chars().count()
}
