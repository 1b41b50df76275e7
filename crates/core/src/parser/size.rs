//! Human-readable number parsing for scraped pages.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9][0-9,]*(?:\.[0-9]+)?)\s*(b|bytes?|[kmgtp]i?b)?$")
        .expect("size pattern is valid")
});

/// Parse a size such as `2.1 GB`, `700 MiB` or `1,024` into bytes.
///
/// Trackers label binary multiples inconsistently, so `KB` and `KiB` both
/// mean 1024 bytes.
pub fn parse_size(text: &str) -> Option<u64> {
    let caps = SIZE_PATTERN.captures(text.trim())?;
    let number: f64 = caps.get(1)?.as_str().replace(',', "").parse().ok()?;

    let exponent = match caps.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        None => 0,
        Some(unit) => match unit.chars().next() {
            Some('k') => 1,
            Some('m') => 2,
            Some('g') => 3,
            Some('t') => 4,
            Some('p') => 5,
            _ => 0,
        },
    };

    Some((number * 1024f64.powi(exponent)).round() as u64)
}

/// Parse a count such as `1,234` or ` 42 `.
pub fn parse_count(text: &str) -> Option<u32> {
    text.trim().replace(',', "").parse().ok()
}
