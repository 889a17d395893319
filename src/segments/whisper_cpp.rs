//! Reader for whisper.cpp console output.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::segments::TimedSegment;

// Matches timestamps like [00:00:00.000 --> 00:00:03.280] or [00:00:00:000 --> 00:00:03:280]
static TIMESTAMP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*\[(\d{2}):(\d{2}):(\d{2})[:.](\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2})[:.](\d{3})\]\s*(.*)$",
    )
    .unwrap()
});

/// Split whisper.cpp output into one segment per line.
///
/// Lines without a timestamp prefix become untimed segments; blank lines are skipped.
pub fn parse(raw_output: &str) -> Vec<TimedSegment> {
    let segments: Vec<TimedSegment> = raw_output
        .lines()
        .filter_map(|line| {
            if let Some(caps) = TIMESTAMP_LINE.captures(line) {
                let text = caps[9].trim();
                if text.is_empty() {
                    return None;
                }
                Some(TimedSegment::new(
                    text,
                    Some(seconds(&caps, 1)),
                    Some(seconds(&caps, 5)),
                ))
            } else {
                let text = line.trim();
                (!text.is_empty()).then(|| TimedSegment::new(text, None, None))
            }
        })
        .collect();

    debug!(
        "Parsed {} whisper.cpp segment(s) from {} chars",
        segments.len(),
        raw_output.len()
    );
    segments
}

/// Timestamps stripped and lines joined with single spaces.
pub fn plain_text(raw_output: &str) -> String {
    parse(raw_output)
        .into_iter()
        .map(|segment| segment.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Seconds from four captured groups (hours, minutes, seconds, millis) starting at `first`.
fn seconds(caps: &Captures, first: usize) -> f64 {
    // Each group is a fixed run of ASCII digits, so parsing cannot fail.
    let part = |offset: usize| caps[first + offset].parse::<u64>().unwrap_or(0);
    let millis = part(0) * 3_600_000 + part(1) * 60_000 + part(2) * 1000 + part(3);
    millis as f64 / 1000.0
}
