//! Small utility helpers for URL encoding, JSON extraction, and time
//! formatting.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free so they can be used from networking, persistence, and
//! logging code alike.

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is
///   missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
const fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// What: Format a UNIX timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Inputs:
/// - `ts`: Optional seconds since the epoch.
///
/// Output:
/// - Formatted date string; empty when `ts` is `None`; the raw number when
///   negative (pre-epoch values are not expected here).
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    if t < 0 {
        return t.to_string();
    }

    let mut days = t / 86_400;
    let mut sod = t % 86_400;
    if sod < 0 {
        sod += 86_400;
        days -= 1;
    }

    let hour = u32::try_from(sod / 3600).unwrap_or(0);
    sod %= 3600;
    let minute = u32::try_from(sod / 60).unwrap_or(0);
    let second = u32::try_from(sod % 60).unwrap_or(0);

    // Convert days since 1970-01-01 to Y-M-D (UTC) using simple loops
    let mut year: i32 = 1970;
    loop {
        let diy = i64::from(if is_leap(year) { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month: u32 = 1;
    for md in mdays {
        if days >= md {
            days -= md;
            month += 1;
        } else {
            break;
        }
    }
    let day = u32::try_from(days).unwrap_or(0) + 1;

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}
