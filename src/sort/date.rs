//! Heuristic parsing of date-like category labels into calendar points.
//!
//! Structural forms are tried in a fixed order and the first match wins.
//! Labels nothing understands degrade to the start of `today`, so
//! chronological comparisons stay total.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static YEAR: LazyLock<Regex> = LazyLock::new(|| re(r"^(\d{4})$"));
static QUARTER: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)^q([1-4])\s+(\d{4})$"));
static MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)^([a-z]{3,})\.?\s+(\d{4})$"));
static WEEK: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)^week\s+(\d{1,4})$"));
static MONTH_SLASH_YEAR: LazyLock<Regex> = LazyLock::new(|| re(r"^(\d{1,2})/(\d{4})$"));
static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| re(r"^(\d{4})-(\d{1,2})$"));
static YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| re(r"^(\d{4})-(\d{1,2})-(\d{1,2})$"));
static MONTH_SHORT_YEAR: LazyLock<Regex> = LazyLock::new(|| re(r"(?i)^([a-z]{3,})\.?\s+(\d{2})$"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid date pattern")
}

/// English month abbreviations and full names → month number (1-based).
pub fn month_from_name(name: &str) -> Option<u32> {
    let m = match name.to_ascii_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(m)
}

fn num<T: std::str::FromStr>(caps: &regex::Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx)?.as_str().parse().ok()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parse a category label into a calendar point, falling back to the
/// start of `today` when no heuristic applies.
pub fn parse_time_string(label: &str, today: NaiveDate) -> NaiveDateTime {
    parse_structural(label.trim(), today)
        .or_else(|| parse_generic(label.trim()))
        .unwrap_or_else(|| midnight(today))
}

/// Structural forms only; `None` when the label has none of them or names
/// an impossible date.
pub fn parse_structural(label: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    if let Some(c) = YEAR.captures(label) {
        return NaiveDate::from_ymd_opt(num(&c, 1)?, 1, 1).map(midnight);
    }
    if let Some(c) = QUARTER.captures(label) {
        let quarter: u32 = num(&c, 1)?;
        return NaiveDate::from_ymd_opt(num(&c, 2)?, (quarter - 1) * 3 + 1, 1).map(midnight);
    }
    if let Some(c) = MONTH_YEAR.captures(label)
        && let Some(month) = month_from_name(&c[1])
    {
        return NaiveDate::from_ymd_opt(num(&c, 2)?, month, 1).map(midnight);
    }
    if let Some(c) = WEEK.captures(label) {
        // Approximation: Jan 1 + (N-1) weeks, not ISO week numbering.
        let week: i64 = num(&c, 1)?;
        let jan1 = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
        return jan1
            .checked_add_signed(Duration::days((week - 1) * 7))
            .map(midnight);
    }
    if let Some(c) = MONTH_SLASH_YEAR.captures(label) {
        return NaiveDate::from_ymd_opt(num(&c, 2)?, num(&c, 1)?, 1).map(midnight);
    }
    if let Some(c) = YEAR_MONTH.captures(label) {
        return NaiveDate::from_ymd_opt(num(&c, 1)?, num(&c, 2)?, 1).map(midnight);
    }
    if let Some(c) = YEAR_MONTH_DAY.captures(label) {
        return NaiveDate::from_ymd_opt(num(&c, 1)?, num(&c, 2)?, num(&c, 3)?).map(midnight);
    }
    None
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 8] = [
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%a, %d %b %Y",
    "%Y.%m.%d",
];

/// Best-effort parse of free-form date strings.
pub fn parse_generic(label: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(label) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(label, f).ok())
    {
        return Some(dt);
    }
    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(label, f).ok())
    {
        return Some(midnight(d));
    }
    // "Jan 24" style month + two-digit year, read as 20YY.
    if let Some(c) = MONTH_SHORT_YEAR.captures(label)
        && let Some(month) = month_from_name(&c[1])
    {
        let yy: i32 = num(&c, 2)?;
        return NaiveDate::from_ymd_opt(2000 + yy, month, 1).map(midnight);
    }
    None
}
