//! Human-readable interval parsing.
//!
//! Accepts any combination of `<N>h`, `<N>m` and `<N>s` tokens in any order
//! (`1h30m`, `5s1h`, `every 2h please`). Each unit is matched independently and
//! the first occurrence of each wins; anything else is ignored. Empty, unparseable
//! or zero-sum input falls back to [`DEFAULT_INTERVAL_MS`] instead of erroring.

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// One hour
pub const DEFAULT_INTERVAL_MS: u64 = 3_600_000;

const UNITS: [(&str, u64); 3] = [
    (r"(\d+)h", 3_600_000),
    (r"(\d+)m", 60_000),
    (r"(\d+)s", 1_000),
];

fn unit_patterns() -> &'static [(Regex, u64)] {
    static PATTERNS: OnceLock<Vec<(Regex, u64)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        UNITS
            .iter()
            .filter_map(|(pattern, factor)| Regex::new(pattern).ok().map(|re| (re, *factor)))
            .collect()
    })
}

/// Parse an interval string into milliseconds, never returning zero
///
/// ```
/// use sitecheck::core::probe::interval::parse_interval;
///
/// assert_eq!(parse_interval("1h30m5s"), 5_405_000);
/// assert_eq!(parse_interval("5s30m"), 1_805_000);
/// assert_eq!(parse_interval(""), 3_600_000);
/// assert_eq!(parse_interval("0h"), 3_600_000);
/// ```
pub fn parse_interval(input: &str) -> u64 {
    if input.trim().is_empty() {
        return DEFAULT_INTERVAL_MS;
    }

    let total = unit_patterns()
        .iter()
        .filter_map(|(re, factor)| {
            let digits = re.captures(input)?.get(1)?.as_str();
            // Oversized numbers saturate rather than wrap
            let value = digits.parse::<u64>().unwrap_or(u64::MAX);
            Some(value.saturating_mul(*factor))
        })
        .fold(0u64, |acc, ms| acc.saturating_add(ms));

    if total == 0 {
        DEFAULT_INTERVAL_MS
    } else {
        total
    }
}

/// [`parse_interval`] as a `Duration`
pub fn parse_interval_duration(input: &str) -> Duration {
    Duration::from_millis(parse_interval(input))
}
