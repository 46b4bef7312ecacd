// ABOUTME: Flexible datetime parsing for mf2 published/updated values.
// ABOUTME: Tries the microformats2 datetime shapes with chrono, then falls back to dateparser.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// `+1 day`, `-2 hours`, `3 weeks ago`.
static RELATIVE_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?\d+)\s*(sec|second|min|minute|hour|day|week|fortnight)s?(\s+ago)?$").unwrap()
});

/// Parses a datetime string as found in `dt-published` / `dt-updated`.
/// Returns UTC datetime if successful, None if nothing recognises it.
///
/// An empty string names the current instant, so it parses to `Utc::now()`.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return Some(Utc::now());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = parse_mf2_datetime(s) {
        return Some(dt);
    }

    if let Some(dt) = parse_relative(s) {
        return Some(dt);
    }

    // Last resort for the free-form values authors actually write.
    dateparser::parse(s).ok()
}

/// Returns true if `s` parses as a datetime.
///
/// Accepts absolute datetimes, the keywords `now`, `today`, `midnight`,
/// `yesterday` and `tomorrow`, and fixed-unit offsets from now such as
/// `+1 day` or `2 weeks ago`. Offsets in months or years and phrases like
/// `next monday` are not recognised.
pub fn is_valid_datetime(s: &str) -> bool {
    parse_datetime(s).is_some()
}

/// Handles the value-class-pattern shapes: `T` or space separator, optional
/// seconds, and a `Z`, `±hh:mm` or `±hhmm` offset.
fn parse_mf2_datetime(s: &str) -> Option<DateTime<Utc>> {
    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(base) => format!("{}+0000", base),
        None => s.to_string(),
    };

    let formats_with_tz = [
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M%z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M:%S%z",
        "%Y-%m-%d %H:%M:%S%:z",
        "%Y-%m-%d %H:%M%z",
        "%Y-%m-%d %H:%M%:z",
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%d %H:%M %z",
    ];

    for fmt in &formats_with_tz {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let formats_naive = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in &formats_naive {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    // Calendar date, then ordinal date ("2013-340").
    for fmt in ["%Y-%m-%d", "%Y-%j"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            let naive_dt = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive_dt));
        }
    }

    None
}

/// Relative forms, resolved against the current instant.
fn parse_relative(s: &str) -> Option<DateTime<Utc>> {
    let lower = s.to_ascii_lowercase();
    let now = Utc::now();
    let midnight = Utc.from_utc_datetime(&now.date_naive().and_hms_opt(0, 0, 0)?);

    match lower.as_str() {
        "now" => return Some(now),
        "today" | "midnight" => return Some(midnight),
        "yesterday" => return midnight.checked_sub_signed(TimeDelta::try_days(1)?),
        "tomorrow" => return midnight.checked_add_signed(TimeDelta::try_days(1)?),
        _ => {}
    }

    let caps = RELATIVE_OFFSET.captures(&lower)?;
    let count: i64 = caps[1].parse().ok()?;
    let unit_secs: i64 = match &caps[2] {
        "sec" | "second" => 1,
        "min" | "minute" => 60,
        "hour" => 3_600,
        "day" => 86_400,
        "week" => 604_800,
        _ => 1_209_600,
    };
    let mut secs = count.checked_mul(unit_secs)?;
    if caps.get(3).is_some() {
        secs = secs.checked_neg()?;
    }
    now.checked_add_signed(TimeDelta::try_seconds(secs)?)
}
