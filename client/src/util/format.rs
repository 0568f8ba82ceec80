//! Display formatting for server-supplied numbers and timestamps.
//!
//! Values are shown as received; these helpers only change presentation.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Thousands-separated integer, e.g. `12,345`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with one decimal, e.g. `3.5%`.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Date part of an RFC 3339 timestamp; anything shorter is returned as is.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.get(..10).filter(|d| d.as_bytes().get(4) == Some(&b'-')).unwrap_or(timestamp)
}

/// Date and minutes of an RFC 3339 timestamp, e.g. `2026-10-01 09:30`.
pub fn format_datetime(timestamp: &str) -> String {
    match (timestamp.get(..10), timestamp.get(11..16)) {
        (Some(date), Some(time)) if timestamp.as_bytes().get(10) == Some(&b'T') => format!("{date} {time}"),
        _ => format_date(timestamp).to_owned(),
    }
}
