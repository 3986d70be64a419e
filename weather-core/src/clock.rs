//! Date/time strings shown next to a weather result.
//!
//! Everything is rendered in the serving process's local zone, not the
//! queried location's. Formatting functions take the zone explicitly so
//! tests can pin one.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::model::{DateInfo, DayStatus};

const DATE_FORMAT: &str = "%B %-d, %Y";
const WEEKDAY_TIME_FORMAT: &str = "%A, %-I:%M %p";
const CLOCK_FORMAT: &str = "%-I:%M %p";

/// Date block for the current instant on the server clock.
pub fn date_info_now() -> DateInfo {
    date_info_at(&Local::now())
}

pub fn date_info_at<Tz>(now: &DateTime<Tz>) -> DateInfo
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateInfo {
        date: now.format(DATE_FORMAT).to_string(),
        time: now.format(WEEKDAY_TIME_FORMAT).to_string(),
        day_status: day_status(now.hour()),
    }
}

/// `Day` for hours in [6, 18), `Night` otherwise.
pub fn day_status(hour: u32) -> DayStatus {
    if (6..18).contains(&hour) {
        DayStatus::Day
    } else {
        DayStatus::Night
    }
}

/// Format epoch seconds as `H:MM AM/PM` in `tz`.
///
/// Returns `None` when the timestamp is outside chrono's representable range.
pub fn clock_time<Tz>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(tz).format(CLOCK_FORMAT).to_string())
}
