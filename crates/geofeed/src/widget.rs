//! The chat widget state and its event flows.
//!
//! Everything here is headless: the widget owns the feed, the popover
//! registry, the capture manager, and the transient UI state, and the app
//! loop drives it with already-decoded events. The renderer only reads.

use crate::{CoordsPrompt, PopoverMessage, RecordingState, Tooltip, TooltipTarget};

use chrono::{DateTime, Utc};
use geofeed_core::{
    AudioPlayer, CaptureConfig, CaptureManager, CaptureStats, Coordinates, CoreResult, MediaBlob,
    MediaKind, PlaybackHandle, PostId, Timeline, format_timer,
};
use tracing::{info, instrument, warn};

/// Persistent banner shown when a capture device is denied or missing.
pub(crate) const MEDIA_UNAVAILABLE: &str =
    "Media is unavailable. Grant access to the microphone/camera and try again.";

const COORDS_INVALID_TITLE: &str = "Invalid coordinates";
const COORDS_INVALID_BODY: &str =
    "That input is not valid. Enter latitude and longitude in the shown format, separated by a comma.";

const COORDS_HINT_TITLE: &str = "Coordinate format";
const COORDS_HINT_BODY: &str = "Like 51.50851, -0.12572 - brackets optional, 5 decimal places.";

const COMPOSE_HELP_TITLE: &str = "Keys";
const COMPOSE_HELP_BODY: &str =
    "Enter post - Ctrl+A voice - Ctrl+V video - Ctrl+P play - Ctrl+B dismiss banner";

/// The widget: feed, popovers, capture, and transient view state.
pub struct ChatWidget {
    pub(crate) timeline: Timeline,
    pub(crate) capture: CaptureManager,
    pub(crate) capture_config: CaptureConfig,
    pub(crate) tooltip: Tooltip,
    pub(crate) recording: RecordingState,
    pub(crate) input: String,
    pub(crate) prompt: Option<CoordsPrompt>,
    pub(crate) banner: Option<String>,
    pub(crate) timer_display: String,
    pub(crate) timer_counter: u64,
    pub(crate) selected: Option<usize>,
    pub(crate) playback: Option<PlaybackHandle>,
}

impl ChatWidget {
    /// Create an idle widget.
    pub fn new(capture_config: CaptureConfig) -> Self {
        Self {
            timeline: Timeline::new(),
            capture: CaptureManager::new(),
            capture_config,
            tooltip: Tooltip::new(),
            recording: RecordingState::Idle,
            input: String::new(),
            prompt: None,
            banner: None,
            timer_display: format_timer(0),
            timer_counter: 1,
            selected: None,
            playback: None,
        }
    }

    // ── Post submission ──────────────────────────────────────────────

    /// Submit the compose input as a text post.
    ///
    /// Clears the input and returns the new post's id so the caller can
    /// request geolocation for it. Empty input still posts.
    #[instrument(skip(self))]
    pub fn submit_text(&mut self, now: DateTime<Utc>) -> PostId {
        let text = std::mem::take(&mut self.input);
        let id = self.timeline.push_text(text, now);
        info!(post_id = %id, "Text post submitted");
        id
    }

    /// Type into the compose input.
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character of the compose input.
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    // ── Coordinate acquisition ───────────────────────────────────────

    /// Apply the outcome of a geolocation request for a post.
    ///
    /// Success renders the coordinates onto the post; failure opens the
    /// manual-entry modal bound to it. The prompt is a single slot: a later
    /// failure replaces an open prompt and orphans the earlier post.
    #[instrument(skip(self, result))]
    pub fn on_location_resolved(&mut self, post_id: PostId, result: CoreResult<Coordinates>) {
        match result {
            Ok(coords) => {
                if !self.timeline.set_coords(post_id, coords) {
                    warn!(post_id = %post_id, "Coordinates resolved for unknown post");
                }
            }
            Err(e) => {
                info!(post_id = %post_id, error = %e, "Geolocation failed, opening manual entry");
                if let Some(previous) = &self.prompt {
                    warn!(post_id = %previous.post_id, "Replacing pending coordinate prompt");
                }
                self.prompt = Some(CoordsPrompt::new(post_id));
            }
        }
    }

    /// Submit the manual coordinate input for the bound post.
    #[instrument(skip(self))]
    pub fn submit_coords(&mut self) {
        self.tooltip.remove(TooltipTarget::CoordsInput);

        let Some(prompt) = &self.prompt else {
            return;
        };

        match Coordinates::parse(&prompt.input) {
            Some(coords) => {
                let post_id = prompt.post_id;
                if !self.timeline.set_coords(post_id, coords) {
                    warn!(post_id = %post_id, "Manual coordinates for unknown post");
                }
                self.prompt = None;
            }
            None => {
                self.tooltip.show(
                    PopoverMessage::new(COORDS_INVALID_TITLE, COORDS_INVALID_BODY),
                    TooltipTarget::CoordsInput,
                );
            }
        }
    }

    /// Close the modal without coordinates: reset the form, drop the
    /// prompt, remove any popover on the input.
    pub fn cancel_coords(&mut self) {
        self.tooltip.remove(TooltipTarget::CoordsInput);
        self.prompt = None;
    }

    /// Toggle the format hint popover on the coords input.
    pub fn toggle_coords_hint(&mut self) {
        self.tooltip.toggle(
            PopoverMessage::new(COORDS_HINT_TITLE, COORDS_HINT_BODY),
            TooltipTarget::CoordsInput,
        );
    }

    /// Toggle the key help popover on the message input.
    pub fn toggle_compose_help(&mut self) {
        self.tooltip.toggle(
            PopoverMessage::new(COMPOSE_HELP_TITLE, COMPOSE_HELP_BODY),
            TooltipTarget::MessageInput,
        );
    }

    /// Type into the modal input.
    pub fn prompt_char(&mut self, c: char) {
        if let Some(prompt) = &mut self.prompt {
            prompt.input.push(c);
        }
    }

    /// Delete the last character of the modal input.
    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.input.pop();
        }
    }

    // ── Recording ────────────────────────────────────────────────────

    /// Enter the Recording state for a media kind.
    ///
    /// Returns `true` when capture started (the caller then arms the timer
    /// tick). Device denial raises the media-unavailable banner and leaves
    /// the widget Idle.
    #[instrument(skip(self))]
    pub fn start_recording(&mut self, kind: MediaKind) -> bool {
        if self.recording.is_recording() {
            warn!("Start ignored, a recording is already active");
            return false;
        }

        // The microphone should not pick the speakers back up.
        self.playback = None;

        match self.capture.start(kind, &self.capture_config) {
            Ok(info) => {
                self.recording = RecordingState::Recording {
                    kind,
                    started_at: info.started_at,
                    session_id: info.session_id,
                };
                self.timer_counter = 1;
                true
            }
            Err(e) => {
                warn!(error = %e, "Capture start denied");
                self.banner = Some(MEDIA_UNAVAILABLE.to_string());
                false
            }
        }
    }

    /// Stop with reason Finish and post the assembled media.
    ///
    /// Returns the new post's id so the caller can request geolocation for
    /// it, exactly like a text post. An empty capture raises the banner and
    /// posts nothing.
    #[instrument(skip(self))]
    pub fn finish_recording(&mut self, now: DateTime<Utc>) -> Option<PostId> {
        let outcome = self.capture.finish();
        self.reset_after_recording();

        match outcome {
            Ok(blob) => Some(self.push_media_post(blob, now)),
            Err(e) => {
                warn!(error = %e, "Finish produced no media");
                self.banner = Some(MEDIA_UNAVAILABLE.to_string());
                None
            }
        }
    }

    /// Stop with reason Cancel: discard the capture, post nothing.
    #[instrument(skip(self))]
    pub fn cancel_recording(&mut self) {
        if let Err(e) = self.capture.cancel() {
            warn!(error = %e, "Cancel with no active session");
        }
        self.reset_after_recording();
    }

    pub(crate) fn push_media_post(&mut self, blob: MediaBlob, now: DateTime<Utc>) -> PostId {
        let id = self.timeline.push_media(blob, now);
        info!(post_id = %id, "Media post appended");
        id
    }

    /// Restore button visibility, stop and reset the timer, hide the
    /// preview. Runs on both finish and cancel.
    fn reset_after_recording(&mut self) {
        self.recording = RecordingState::Idle;
        self.timer_display = format_timer(0);
        self.timer_counter = 1;
    }

    /// Advance the recording timer display by one second.
    pub fn on_timer_tick(&mut self) {
        if !self.recording.is_recording() {
            return;
        }
        self.timer_display = format_timer(self.timer_counter);
        self.timer_counter += 1;
    }

    /// Whether the live preview pane is shown (video recording only).
    pub fn preview_visible(&self) -> bool {
        self.recording.kind() == Some(MediaKind::Video)
    }

    /// Live counters of the active capture, for the preview pane.
    pub fn capture_stats(&self) -> Option<CaptureStats> {
        self.capture.stats()
    }

    // ── Banner, selection, playback ──────────────────────────────────

    /// Dismiss the media-unavailable banner.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Move the post selection up.
    pub fn select_prev(&mut self) {
        if self.timeline.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.timeline.len() - 1,
        });
    }

    /// Move the post selection down.
    pub fn select_next(&mut self) {
        if self.timeline.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.timeline.len() - 1),
            None => 0,
        });
    }

    /// Play the selected post's audio blob through the output device.
    ///
    /// Replaces any playback already running. Posts without playable audio
    /// are ignored.
    #[instrument(skip(self))]
    pub fn play_selected(&mut self) {
        let blob = self
            .selected
            .and_then(|i| self.timeline.posts().get(i))
            .and_then(|post| post.media.clone());

        let Some(blob) = blob else {
            return;
        };
        if blob.kind != MediaKind::Audio {
            return;
        }

        match AudioPlayer::play(&blob) {
            Ok(handle) => {
                // Dropping the previous handle stops its stream.
                self.playback = Some(handle);
            }
            Err(e) => {
                warn!(error = %e, "Playback failed");
                self.banner = Some(MEDIA_UNAVAILABLE.to_string());
            }
        }
    }

    // ── Read-only accessors for the renderer ─────────────────────────

    /// The post feed.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The popover registry.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// The compose input contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The open coordinate prompt, if any.
    pub fn prompt(&self) -> Option<&CoordsPrompt> {
        self.prompt.as_ref()
    }

    /// The banner text, if shown.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The recording timer display (`MM:SS`).
    pub fn timer_display(&self) -> &str {
        &self.timer_display
    }

    /// The mirrored recording state.
    pub fn recording(&self) -> RecordingState {
        self.recording
    }

    /// Whether a capture session is live.
    pub fn is_recording(&self) -> bool {
        self.recording.is_recording()
    }

    /// The selected post index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a playback stream is live and still has samples to play.
    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(|h| !h.is_finished())
    }
}
