//! Dates as they appear in prompts: day headings and trip durations.

use chrono::{Datelike, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Weekday names, Sunday first.
pub const WEEKDAYS: [char; 7] = ['日', '月', '火', '水', '木', '金', '土'];

/// Parse an ISO `YYYY-MM-DD` date, tolerating surrounding whitespace.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

/// `2025-08-02` → `2025/8/2・土`. `None` for missing or invalid dates.
pub fn heading_date(iso: &str) -> Option<String> {
    let date = parse_iso(iso)?;
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    Some(format!(
        "{}/{}/{}・{weekday}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Extract the date from a day heading such as `1日目（2025/8/2・土）` and
/// return it as a zero-padded ISO date. Every `（` group is tried, so text
/// before the date group (`1日目（札幌）（2025/8/2・土）`) is skipped.
pub fn date_from_heading(title: &str) -> Option<String> {
    title.split('（').skip(1).find_map(slash_date)
}

/// `2025/8/2・土）...` → `2025-08-02`.
fn slash_date(group: &str) -> Option<String> {
    let (date, _) = group.split_once('・')?;

    let mut parts = date.trim().split('/');
    let year = numeric(parts.next()?, 4, 4)?;
    let month = numeric(parts.next()?, 1, 2)?;
    let day = numeric(parts.next()?, 1, 2)?;
    if parts.next().is_some() {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)?;
    Some(date.format(ISO_FORMAT).to_string())
}

fn numeric(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Human-readable trip length for suggestion mode.
///
/// `"2泊3日 (2025-10-01 ～ 2025-10-03)"`, or `"日帰り (2025-10-01)"` when both
/// dates fall on the same day. Empty when either date is missing or invalid.
pub fn duration_text(start: &str, end: &str) -> String {
    let (Some(start), Some(end)) = (parse_iso(start), parse_iso(end)) else {
        return String::new();
    };
    let nights = (end - start).num_days().abs();
    if nights == 0 {
        format!("日帰り ({})", start.format(ISO_FORMAT))
    } else {
        format!(
            "{nights}泊{}日 ({} ～ {})",
            nights + 1,
            start.format(ISO_FORMAT),
            end.format(ISO_FORMAT)
        )
    }
}

/// Inverse of [`duration_text`]: recover `(start, end)` ISO dates.
///
/// Accepts the day-trip form `日帰り (YYYY-MM-DD)` and any text containing a
/// `YYYY-MM-DD ～ YYYY-MM-DD` range.
pub fn dates_from_duration(value: &str) -> Option<(String, String)> {
    let dates = iso_dates_in(value);
    if value.contains("日帰り") {
        let date = dates.first()?;
        return Some((date.to_string(), date.to_string()));
    }
    match dates.as_slice() {
        [start, end, ..] => Some((start.to_string(), end.to_string())),
        _ => None,
    }
}

/// Every `\d{4}-\d{2}-\d{2}` substring, in order.
fn iso_dates_in(value: &str) -> Vec<&str> {
    const LEN: usize = "YYYY-MM-DD".len();
    let bytes = value.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i + LEN <= bytes.len() {
        let window = &bytes[i..i + LEN];
        let shaped = window.iter().enumerate().all(|(pos, b)| match pos {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
        if shaped {
            // All ten bytes are ASCII, so both ends are char boundaries.
            found.push(&value[i..i + LEN]);
            i += LEN;
        } else {
            i += 1;
        }
    }
    found
}
