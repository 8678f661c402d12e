use crate::{format_date, format_timer};

use chrono::{TimeZone, Utc};

/// WHAT: Epoch 0 formats as 01.01.70 00:00
/// WHY: Date formatting is specified as UTC with a two-digit year
#[test]
#[allow(clippy::unwrap_used)]
fn given_epoch_zero_when_formatting_date_then_utc_string() {
    // Given: The Unix epoch
    let epoch = Utc.timestamp_opt(0, 0).single().unwrap();

    // When/Then: Formatting yields the fixed UTC rendering
    assert_eq!(format_date(epoch), "01.01.70 00:00");
}

/// WHAT: Date fields are zero-padded
/// WHY: The post header format is DD.MM.YY HH:MM
#[test]
#[allow(clippy::unwrap_used)]
fn given_single_digit_fields_when_formatting_date_then_zero_padded() {
    // Given: 2024-03-05 07:09 UTC
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 7, 9, 0).single().unwrap();

    assert_eq!(format_date(timestamp), "05.03.24 07:09");
}

/// WHAT: Timer renders MM:SS with zero padding
/// WHY: The recording timer display contract
#[test]
fn given_elapsed_seconds_when_formatting_timer_then_mm_ss() {
    assert_eq!(format_timer(5), "00:05");
    assert_eq!(format_timer(65), "01:05");
    assert_eq!(format_timer(0), "00:00");
    assert_eq!(format_timer(600), "10:00");
    assert_eq!(format_timer(3599), "59:59");
}
