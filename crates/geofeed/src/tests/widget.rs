use crate::{ChatWidget, RecordingState, TooltipTarget};

use std::{panic::Location, time::Instant};

use chrono::Utc;
use error_location::ErrorLocation;
use geofeed_core::{
    CaptureConfig, Coordinates, CoreError, MediaBlob, MediaKind, PostId, VideoCaptureConfig,
};
use uuid::Uuid;

fn test_widget() -> ChatWidget {
    ChatWidget::new(CaptureConfig {
        video: VideoCaptureConfig {
            ffmpeg_path: "ffmpeg".to_string(),
            device: "/dev/null".to_string(),
        },
    })
}

fn location_failed() -> CoreError {
    CoreError::LocationUnavailable {
        reason: "no fix".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn submit(widget: &mut ChatWidget, text: &str) -> PostId {
    for c in text.chars() {
        widget.input_char(c);
    }
    widget.submit_text(Utc::now())
}

/// WHAT: Submitting clears the input and appends exactly one post
/// WHY: The submit contract for the compose form
#[test]
fn given_typed_message_when_submitting_then_input_cleared_and_one_post() {
    // Given: "hello" typed into the compose input
    let mut widget = test_widget();
    for c in "hello".chars() {
        widget.input_char(c);
    }
    assert_eq!(widget.input(), "hello");

    // When: Submitting
    let id = widget.submit_text(Utc::now());

    // Then: Input is empty and exactly one post was appended
    assert_eq!(widget.input(), "");
    assert_eq!(widget.timeline().len(), 1);
    assert!(widget.timeline().get(id).is_some_and(|p| p.text == "hello"));
}

/// WHAT: A resolved fix renders directly onto the post
/// WHY: The geolocation success path skips the modal entirely
#[test]
fn given_post_when_location_resolves_then_coords_attached() {
    // Given: A submitted post
    let mut widget = test_widget();
    let id = submit(&mut widget, "here");

    // When: Geolocation succeeds
    let coords = Coordinates::new(55.75222, 37.61556);
    widget.on_location_resolved(id, Ok(coords));

    // Then: The post carries the fix and no prompt opened
    assert_eq!(widget.timeline().get(id).and_then(|p| p.coords), Some(coords));
    assert!(widget.prompt().is_none());
}

/// WHAT: A failed fix opens the manual prompt bound to that post
/// WHY: The geolocation failure path falls back to manual entry
#[test]
fn given_post_when_location_fails_then_prompt_bound_to_it() {
    let mut widget = test_widget();
    let id = submit(&mut widget, "where");

    widget.on_location_resolved(id, Err(location_failed()));

    assert!(widget.prompt().is_some_and(|p| p.post_id == id));
}

/// WHAT: Invalid manual input raises the inline popover and keeps the modal open
/// WHY: The user retries in place instead of losing the prompt
#[test]
fn given_open_prompt_when_submitting_garbage_then_popover_and_retry() {
    // Given: An open prompt
    let mut widget = test_widget();
    let id = submit(&mut widget, "x");
    widget.on_location_resolved(id, Err(location_failed()));

    // When: Submitting input that fails validation
    for c in "not coords".chars() {
        widget.prompt_char(c);
    }
    widget.submit_coords();

    // Then: Error popover on the input, prompt still open, post untagged
    assert!(widget.tooltip().is_marked(TooltipTarget::CoordsInput));
    assert!(widget.prompt().is_some());
    assert!(widget.timeline().get(id).is_some_and(|p| p.coords.is_none()));
}

/// WHAT: Valid manual input tags the post, closes the modal, clears the popover
/// WHY: The full recovery path out of a failed geolocation
#[test]
fn given_open_prompt_when_submitting_valid_coords_then_post_tagged_and_closed() {
    // Given: A prompt showing a validation error from a previous attempt
    let mut widget = test_widget();
    let id = submit(&mut widget, "x");
    widget.on_location_resolved(id, Err(location_failed()));
    widget.prompt_char('?');
    widget.submit_coords();
    assert!(widget.tooltip().is_marked(TooltipTarget::CoordsInput));

    // When: Clearing the input and submitting a valid pair
    widget.prompt_backspace();
    for c in "[55.75222, 37.61556]".chars() {
        widget.prompt_char(c);
    }
    widget.submit_coords();

    // Then: Post tagged, prompt gone, popover gone
    assert_eq!(
        widget.timeline().get(id).and_then(|p| p.coords),
        Some(Coordinates::new(55.75222, 37.61556))
    );
    assert!(widget.prompt().is_none());
    assert!(!widget.tooltip().is_marked(TooltipTarget::CoordsInput));
}

/// WHAT: Cancel closes the modal and removes the input's popover
/// WHY: The cancel control resets the whole form
#[test]
fn given_open_prompt_when_cancelling_then_prompt_and_popover_cleared() {
    let mut widget = test_widget();
    let id = submit(&mut widget, "x");
    widget.on_location_resolved(id, Err(location_failed()));
    widget.prompt_char('?');
    widget.submit_coords();

    widget.cancel_coords();

    assert!(widget.prompt().is_none());
    assert!(!widget.tooltip().is_marked(TooltipTarget::CoordsInput));
    assert!(widget.timeline().get(id).is_some_and(|p| p.coords.is_none()));
}

/// WHAT: A second failed post replaces the open prompt
/// WHY: Pins the single-slot limitation: the first post is orphaned
#[test]
fn given_pending_prompt_when_second_post_fails_then_slot_replaced() {
    // Given: Two posts whose geolocation failed in order
    let mut widget = test_widget();
    let first = submit(&mut widget, "first");
    let second = submit(&mut widget, "second");
    widget.on_location_resolved(first, Err(location_failed()));
    widget.on_location_resolved(second, Err(location_failed()));

    // When: The prompt is resolved with valid coordinates
    assert!(widget.prompt().is_some_and(|p| p.post_id == second));
    for c in "1.00001, 2.00002".chars() {
        widget.prompt_char(c);
    }
    widget.submit_coords();

    // Then: Only the second post is tagged; the first can never be
    assert!(widget.timeline().get(second).is_some_and(|p| p.coords.is_some()));
    assert!(widget.timeline().get(first).is_some_and(|p| p.coords.is_none()));
    assert!(widget.prompt().is_none());
}

/// WHAT: A finished blob becomes exactly one media post
/// WHY: Finishing with buffered data must append one playable post
#[test]
fn given_finished_blob_when_posting_then_exactly_one_media_post() {
    // Given: An assembled voice blob
    let mut widget = test_widget();
    let blob = MediaBlob::from_audio_samples(&[0.25; 4800], 48_000);

    // When: Posting it
    let id = widget.push_media_post(blob, Utc::now());

    // Then: One post with one playable media element
    assert_eq!(widget.timeline().len(), 1);
    let post = widget.timeline().get(id).cloned();
    assert!(post.as_ref().is_some_and(|p| p.media.is_some()));
    assert!(
        post.is_some_and(|p| p.media.is_some_and(|m| m.kind == MediaKind::Audio))
    );
}

/// WHAT: Cancelling never appends a post and resets the timer
/// WHY: Cancelled sessions discard their chunks by contract
#[test]
fn given_recording_state_when_cancelling_then_no_post_and_timer_reset() {
    // Given: A widget that thinks it is recording, with a running timer
    let mut widget = test_widget();
    widget.recording = RecordingState::Recording {
        kind: MediaKind::Audio,
        started_at: Instant::now(),
        session_id: Uuid::new_v4(),
    };
    widget.on_timer_tick();
    widget.on_timer_tick();
    assert_eq!(widget.timer_display(), "00:02");

    // When: Cancelling (no live session behind the state; the manager
    // rejects the stop and the widget still resets)
    widget.cancel_recording();

    // Then: No post appeared and the UI is back to idle
    assert!(widget.timeline().is_empty());
    assert_eq!(widget.recording(), RecordingState::Idle);
    assert_eq!(widget.timer_display(), "00:00");
}

/// WHAT: The timer displays 00:01 after the first tick
/// WHY: The display counts from 1, one second after recording starts
#[test]
fn given_recording_when_first_tick_then_timer_shows_one_second() {
    let mut widget = test_widget();
    widget.recording = RecordingState::Recording {
        kind: MediaKind::Video,
        started_at: Instant::now(),
        session_id: Uuid::new_v4(),
    };
    assert_eq!(widget.timer_display(), "00:00");
    assert!(widget.preview_visible());

    widget.on_timer_tick();

    assert_eq!(widget.timer_display(), "00:01");
}

/// WHAT: Ticks outside a recording leave the timer untouched
/// WHY: The timer only runs between start and stop
#[test]
fn given_idle_widget_when_ticking_then_timer_unchanged() {
    let mut widget = test_widget();

    widget.on_timer_tick();

    assert_eq!(widget.timer_display(), "00:00");
    assert!(!widget.preview_visible());
}

/// WHAT: Finishing with no live session raises the banner, posts nothing
/// WHY: An empty or failed capture must not render an unplayable post
#[test]
fn given_no_session_when_finishing_then_banner_and_no_post() {
    let mut widget = test_widget();

    let posted = widget.finish_recording(Utc::now());

    assert!(posted.is_none());
    assert!(widget.timeline().is_empty());
    assert!(widget.banner().is_some());

    widget.dismiss_banner();
    assert!(widget.banner().is_none());
}

/// WHAT: The compose help popover toggles cleanly
/// WHY: The toggle surface on the message input round-trips
#[test]
fn given_compose_view_when_toggling_help_twice_then_registry_empty() {
    let mut widget = test_widget();

    widget.toggle_compose_help();
    assert!(widget.tooltip().is_marked(TooltipTarget::MessageInput));

    widget.toggle_compose_help();
    assert!(widget.tooltip().is_empty());
}
