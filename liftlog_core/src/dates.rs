//! ISO 8601 date labels.
//!
//! Exported logs carry dates in any ISO 8601 shape: calendar
//! (`2024-01-05`, `20240105`), reduced precision (`2024-01`, `2024`, `20`),
//! ordinal (`2024-005`) or week (`2024-W01-5`), optionally followed by a
//! time and zone (`T08:30Z`, ` 08:30:00.250+02:00`). Only the calendar date
//! as written is kept; a missing month or day defaults to 01.

use chrono::{NaiveDate, Weekday};

const ISO_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse an exported date label into a calendar date, discarding any time
///
/// Returns `None` when the label is not ISO 8601, or names a day, time or
/// zone offset that does not exist.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !value.is_ascii() {
        return None;
    }

    let (date, time) = match value.find(|c: char| c == 'T' || c == ' ' || c == 'Z') {
        // a zone directly after the date belongs to the time part
        Some(i) if value[i..].starts_with('Z') => (&value[..i], &value[i..]),
        Some(i) => (&value[..i], &value[i + 1..]),
        None => (value, ""),
    };

    if !is_iso_time(time) {
        return None;
    }
    parse_iso_date(date)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    let signed = matches!(date.as_bytes().first(), Some(b'+' | b'-'));

    // century only: "20" or "+0020"
    let century_only = match date.len() {
        2 => all_digits(date),
        5 => signed && all_digits(&date[1..]),
        _ => false,
    };
    if century_only {
        let century: i32 = date.parse().ok()?;
        return NaiveDate::from_ymd_opt(century * 100, 1, 1);
    }

    let (year, rest) = if signed && date.len() >= 7 && all_digits(&date[1..7]) {
        (date[..7].parse::<i32>().ok()?, &date[7..])
    } else if date.len() >= 4 && all_digits(&date[..4]) {
        (date[..4].parse::<i32>().ok()?, &date[4..])
    } else {
        return None;
    };

    let rest = rest.strip_prefix('-').unwrap_or(rest);
    if rest.is_empty() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some(week) = rest.strip_prefix('W') {
        let (week, day) = match week.len() {
            2 => (week, "1"),
            3 => (&week[..2], &week[2..]),
            4 if week.as_bytes()[2] == b'-' => (&week[..2], &week[3..]),
            _ => return None,
        };
        if !all_digits(week) || !all_digits(day) {
            return None;
        }
        let day: usize = day.parse().ok()?;
        if !(1..=7).contains(&day) {
            return None;
        }
        return NaiveDate::from_isoywd_opt(year, week.parse().ok()?, ISO_WEEKDAYS[day - 1]);
    }

    let (month, day) = match rest.len() {
        3 if all_digits(rest) => return NaiveDate::from_yo_opt(year, rest.parse().ok()?),
        2 => (rest, "01"),
        4 => (&rest[..2], &rest[2..]),
        5 if rest.as_bytes()[2] == b'-' => (&rest[..2], &rest[3..]),
        _ => return None,
    };
    if !all_digits(month) || !all_digits(day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Validate a time-of-day suffix such as `08:30`, `0830`, `08:30:00,5+02:00`
/// or `Z`. An empty suffix is valid.
fn is_iso_time(time: &str) -> bool {
    let (clock, zone) = match time.find(|c: char| c == 'Z' || c == '+' || c == '-') {
        Some(i) => (&time[..i], &time[i..]),
        None => (time, ""),
    };
    (clock.is_empty() || is_iso_clock(clock)) && is_iso_zone(zone)
}

fn is_iso_clock(clock: &str) -> bool {
    let mut parts = [0.0_f64; 3];
    let mut count = 0;
    let mut rest = clock;

    while !rest.is_empty() {
        if count == parts.len() {
            return false;
        }
        if count > 0 {
            rest = rest.strip_prefix(':').unwrap_or(rest);
        }
        let Some((value, tail)) = take_clock_unit(rest) else {
            return false;
        };
        parts[count] = value;
        count += 1;
        rest = tail;
    }

    let [hours, minutes, seconds] = parts;
    if hours == 24.0 {
        return minutes == 0.0 && seconds == 0.0;
    }
    hours < 25.0 && minutes < 60.0 && seconds < 60.0
}

/// Two digits with an optional `.` or `,` fraction
fn take_clock_unit(s: &str) -> Option<(f64, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !all_digits(&s[..2]) {
        return None;
    }

    let mut end = 2;
    if matches!(bytes.get(2), Some(b'.' | b',')) {
        end = 3;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    let value = s[..end].replace(',', ".").parse().ok()?;
    Some((value, &s[end..]))
}

fn is_iso_zone(zone: &str) -> bool {
    if zone.is_empty() || zone == "Z" {
        return true;
    }

    let Some(offset) = zone.strip_prefix('+').or_else(|| zone.strip_prefix('-')) else {
        return false;
    };
    let (hours, minutes) = match offset.len() {
        2 => (offset, "00"),
        4 => (&offset[..2], &offset[2..]),
        5 if offset.as_bytes()[2] == b':' => (&offset[..2], &offset[3..]),
        _ => return false,
    };
    if !all_digits(hours) || !all_digits(minutes) {
        return false;
    }

    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) => h <= 23 && m <= 59,
        _ => false,
    }
}
