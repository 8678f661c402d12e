use std::time::Instant;

use geofeed_core::MediaKind;
use uuid::Uuid;

/// Recording state mirrored for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not currently recording.
    Idle,
    /// A capture session is live.
    Recording {
        /// What is being recorded.
        kind: MediaKind,
        /// When recording started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecordingState {
    /// Whether a session is live.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Media kind of the live session, if any.
    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            RecordingState::Recording { kind, .. } => Some(*kind),
            RecordingState::Idle => None,
        }
    }
}
