/// Relative time formatting for server-rendered timestamps.
///
/// The server emits naive UTC timestamps like `2024-01-01 23:58:00.123456`.
/// These are turned into phrases such as "about 2 minutes ago", falling back
/// to an absolute date once more than a day has passed.
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use thiserror::Error;

/// Marker rendered in place of a date when the input could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Layout of the absolute date, e.g. `01 Jan 2024, 12:00 AM`.
const ABSOLUTE_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// `YYYY-MM-DDTHH:MM:SS.mmm`, anything beyond millisecond precision is dropped.
const MILLIS_PRECISION_LEN: usize = 23;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("invalid timestamp '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Parse a naive `YYYY-MM-DD HH:MM:SS[.ffffff]` timestamp as a UTC instant.
pub fn parse_naive_utc(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let iso: String = input
        .replacen(' ', "T", 1)
        .chars()
        .take(MILLIS_PRECISION_LEN)
        .collect();

    NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|e| TimestampError::Invalid {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Format an instant as the absolute fallback date, in UTC.
pub fn format_absolute(datetime: DateTime<Utc>) -> String {
    datetime.format(ABSOLUTE_FORMAT).to_string()
}

/// Describe an elapsed duration, or `None` once it reaches a full day.
///
/// Negative durations (timestamps in the future) report "less than a minute ago".
pub fn describe_elapsed(elapsed: Duration) -> Option<String> {
    if elapsed.num_seconds() < 60 {
        return Some("less than a minute ago".to_string());
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return Some(format!("about {} {} ago", minutes, plural(minutes, "minute")));
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return Some(format!("about {} {} ago", hours, plural(hours, "hour")));
    }

    None
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// Format `input` relative to `now`, failing on unparsable input.
pub fn try_time_ago_at(input: &str, now: DateTime<Utc>) -> Result<String, TimestampError> {
    let then = parse_naive_utc(input)?;
    let phrase = describe_elapsed(now.signed_duration_since(then))
        .unwrap_or_else(|| format!("on {}", format_absolute(then)));
    Ok(phrase)
}

/// Format `input` relative to `now`.
///
/// Unparsable input never fails: it renders as `on Invalid Date`.
pub fn time_ago_at(input: &str, now: DateTime<Utc>) -> String {
    match try_time_ago_at(input, now) {
        Ok(phrase) => phrase,
        Err(e) => {
            tracing::debug!("{}", e);
            format!("on {}", INVALID_DATE)
        }
    }
}

/// Format `input` relative to the current wall-clock time.
pub fn time_ago(input: &str) -> String {
    time_ago_at(input, Utc::now())
}
