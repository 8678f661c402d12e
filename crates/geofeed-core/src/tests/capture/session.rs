use crate::{
    CoreError, MediaBlob, StopReason,
    capture::{audio::MAX_BUFFER_SAMPLES, session::resolve_stop},
};

use std::collections::VecDeque;

/// WHAT: Finishing with buffered data yields the assembled blob
/// WHY: A finished session must produce exactly one media object
#[test]
#[allow(clippy::unwrap_used)]
fn given_buffered_chunks_when_finishing_then_blob_returned() {
    // Given: A non-empty captured blob
    let blob = MediaBlob::from_video_chunks(vec![vec![1, 2, 3], vec![4]]);

    // When: Resolving a Finish stop
    let resolved = resolve_stop(StopReason::Finish, blob).unwrap();

    // Then: The blob survives intact
    assert_eq!(resolved.map(|b| b.bytes), Some(vec![1, 2, 3, 4]));
}

/// WHAT: Cancelling discards the captured data
/// WHY: A cancelled session must never feed a post
#[test]
#[allow(clippy::unwrap_used)]
fn given_buffered_chunks_when_cancelling_then_nothing_returned() {
    // Given: A non-empty captured blob
    let blob = MediaBlob::from_audio_samples(&[0.5; 128], 48_000);

    // When: Resolving a Cancel stop
    let resolved = resolve_stop(StopReason::Cancel, blob).unwrap();

    // Then: The data is discarded
    assert!(resolved.is_none());
}

/// WHAT: Finishing an empty capture is an error
/// WHY: Surfacing it as a banner beats rendering an unplayable post
#[test]
fn given_empty_capture_when_finishing_then_no_media_captured() {
    let blob = MediaBlob::from_video_chunks(Vec::new());

    let result = resolve_stop(StopReason::Finish, blob);

    assert!(matches!(result, Err(CoreError::NoMediaCaptured { .. })));
}

/// WHAT: The sample ring buffer respects its cap
/// WHY: Prevents unbounded memory growth during long recordings
#[test]
fn given_full_buffer_when_extending_then_oldest_dropped() {
    // Given: A buffer at capacity filled with 0.0
    let mut buf: VecDeque<f32> = VecDeque::with_capacity(MAX_BUFFER_SAMPLES);
    buf.extend(std::iter::repeat_n(0.0f32, MAX_BUFFER_SAMPLES));

    // When: Extending past the cap with 1.0 samples, as the callback does
    buf.extend(std::iter::repeat_n(1.0f32, 1024));
    while buf.len() > MAX_BUFFER_SAMPLES {
        buf.pop_front();
    }

    // Then: Size holds and the newest samples survive
    assert_eq!(buf.len(), MAX_BUFFER_SAMPLES);
    assert!((buf[MAX_BUFFER_SAMPLES - 1] - 1.0).abs() < f32::EPSILON);
    assert!((buf[MAX_BUFFER_SAMPLES - 1024] - 1.0).abs() < f32::EPSILON);
}
