use crate::{
    CoreError, CoreResult,
    capture::{
        StopReason, VideoCaptureConfig,
        session::RecordingSession,
    },
    timeline::{MediaBlob, MediaKind},
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tracing::{info, instrument};
use uuid::Uuid;

/// Capture behaviour shared by all sessions.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// FFmpeg camera invocation used by video sessions.
    pub video: VideoCaptureConfig,
}

/// Identity of a started session, for UI mirroring and log correlation.
#[derive(Debug, Clone, Copy)]
pub struct SessionInfo {
    /// Unique session id.
    pub session_id: Uuid,
    /// What is being recorded.
    pub kind: MediaKind,
    /// When capture started.
    pub started_at: Instant,
}

/// Live capture counters for the preview pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Bytes captured so far.
    pub bytes: usize,
    /// Chunks buffered so far (video only; audio reports bytes).
    pub chunks: usize,
}

/// Owns the at-most-one active recording session.
///
/// Starting while a session is active is rejected rather than left
/// undefined; the UI additionally hides the start controls while recording.
#[derive(Default)]
pub struct CaptureManager {
    session: Option<RecordingSession>,
}

impl CaptureManager {
    /// Create an idle manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the device and enter the Recording state.
    #[track_caller]
    #[instrument(skip(self, config))]
    pub fn start(&mut self, kind: MediaKind, config: &CaptureConfig) -> CoreResult<SessionInfo> {
        if let Some(active) = &self.session {
            return Err(CoreError::DeviceError {
                reason: format!("A {:?} recording is already active", active.kind),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let session = RecordingSession::start(kind, config)?;
        let info = SessionInfo {
            session_id: session.session_id,
            kind,
            started_at: session.started_at,
        };
        info!(session_id = %info.session_id, ?kind, "Recording started");
        self.session = Some(session);

        Ok(info)
    }

    /// Stop with reason Finish: assemble the buffered chunks into one blob.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn finish(&mut self) -> CoreResult<MediaBlob> {
        let session = self.take_session()?;
        let session_id = session.session_id;

        match session.stop(StopReason::Finish)? {
            Some(blob) => {
                info!(session_id = %session_id, size = blob.len(), "Recording finished");
                Ok(blob)
            }
            // stop() only withholds a blob for Cancel; keep the error path
            // total anyway.
            None => Err(CoreError::NoMediaCaptured {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Stop with reason Cancel: discard everything captured.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn cancel(&mut self) -> CoreResult<()> {
        let session = self.take_session()?;
        let session_id = session.session_id;
        session.stop(StopReason::Cancel)?;
        info!(session_id = %session_id, "Recording cancelled");
        Ok(())
    }

    /// Whether a session is active.
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Media kind of the active session, if any.
    pub fn active_kind(&self) -> Option<MediaKind> {
        self.session.as_ref().map(|s| s.kind)
    }

    /// Live counters of the active session, if any.
    pub fn stats(&self) -> Option<CaptureStats> {
        self.session.as_ref().map(RecordingSession::stats)
    }

    #[track_caller]
    fn take_session(&mut self) -> CoreResult<RecordingSession> {
        self.session
            .take()
            .ok_or_else(|| CoreError::DeviceError {
                reason: "No active recording".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
