//! Runtime settings loaded from `settings.conf`.
//!
//! The file is optional; every key falls back to a default. The format is
//! plain `key = value` lines with `#`, `//`, or `;` comments, matching the
//! rest of Ladle's config files.

use std::path::Path;

/// Tunable settings for networking and the scroll-poll cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the recipe directory API.
    pub api_url: String,
    /// Interval of the proximity-poll tick in milliseconds.
    pub poll_interval_ms: u64,
    /// How close (in rows) the selection must be to the end of the list
    /// before the next page is requested.
    pub proximity_rows: usize,
    /// Delay after a batch arrives before the poll guard reopens, giving the
    /// list time to extend.
    pub settle_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: "http://www.recipepuppy.com/api/".to_string(),
            poll_interval_ms: 250,
            proximity_rows: 5,
            settle_ms: 500,
        }
    }
}

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing `key = value`
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if !trimmed.contains('=') {
        return None;
    }
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_string();
    let value = parts.next()?.trim().to_string();
    Some((key, value))
}

impl Settings {
    /// What: Load settings from a conf file, falling back to defaults.
    ///
    /// Inputs:
    /// - `path`: Location of `settings.conf`
    ///
    /// Output:
    /// - `Settings` with every recognized key applied; a missing file or
    ///   unparsable value leaves the default in place.
    ///
    /// Details:
    /// - Unknown keys are ignored so old configs keep working.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let mut out = Settings::default();
        let Ok(text) = std::fs::read_to_string(path) else {
            return out;
        };
        for line in text.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "api_url" => {
                    if !value.is_empty() {
                        out.api_url = value;
                    }
                }
                "poll_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>()
                        && v > 0
                    {
                        out.poll_interval_ms = v;
                    }
                }
                "proximity_rows" => {
                    if let Ok(v) = value.parse::<usize>() {
                        out.proximity_rows = v;
                    }
                }
                "settle_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        out.settle_ms = v;
                    }
                }
                _ => {}
            }
        }
        out
    }
}
