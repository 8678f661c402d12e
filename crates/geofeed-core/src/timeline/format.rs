use chrono::{DateTime, Utc};

/// Format a post timestamp as `DD.MM.YY HH:MM`.
///
/// Formatting is done in UTC. The widget displays whatever instant it was
/// given; callers wanting local wall-clock time convert before calling.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%y %H:%M").to_string()
}

/// Format an elapsed-seconds counter as `MM:SS`.
pub fn format_timer(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
