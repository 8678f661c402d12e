use crate::{
    CoreError, CoreResult,
    capture::{AudioCapturer, CaptureConfig, CaptureStats, VideoCapturer},
    timeline::{MediaBlob, MediaKind},
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tracing::instrument;
use uuid::Uuid;

/// Why a recording session was told to stop.
///
/// Each session carries its own reason; there is no flag shared between
/// sessions, so a stop request can never leak into a later recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Keep the captured data and build a post from it.
    Finish,
    /// Discard the captured data.
    Cancel,
}

pub(crate) enum SessionBackend {
    Audio(AudioCapturer),
    Video(VideoCapturer),
}

/// One active capture, from device grant to stop.
pub(crate) struct RecordingSession {
    pub(crate) session_id: Uuid,
    pub(crate) kind: MediaKind,
    pub(crate) started_at: Instant,
    backend: SessionBackend,
}

impl RecordingSession {
    /// Request the device and start capturing.
    #[track_caller]
    #[instrument(skip(config))]
    pub(crate) fn start(kind: MediaKind, config: &CaptureConfig) -> CoreResult<Self> {
        let backend = match kind {
            MediaKind::Audio => {
                let mut capturer = AudioCapturer::new()?;
                capturer.start()?;
                SessionBackend::Audio(capturer)
            }
            MediaKind::Video => SessionBackend::Video(VideoCapturer::spawn(&config.video)?),
        };

        Ok(Self {
            session_id: Uuid::new_v4(),
            kind,
            started_at: Instant::now(),
            backend,
        })
    }

    /// Stop the backend and resolve the stop reason into a blob or nothing.
    #[track_caller]
    pub(crate) fn stop(self, reason: StopReason) -> CoreResult<Option<MediaBlob>> {
        let blob = match self.backend {
            SessionBackend::Audio(mut capturer) => {
                let sample_rate = capturer.sample_rate();
                let samples = capturer.stop()?;
                MediaBlob::from_audio_samples(&samples, sample_rate)
            }
            SessionBackend::Video(mut capturer) => MediaBlob::from_video_chunks(capturer.stop()),
        };
        resolve_stop(reason, blob)
    }

    /// Live counters for the preview pane.
    pub(crate) fn stats(&self) -> CaptureStats {
        match &self.backend {
            SessionBackend::Audio(capturer) => CaptureStats {
                bytes: capturer.buffered_samples() * 4,
                chunks: 0,
            },
            SessionBackend::Video(capturer) => CaptureStats {
                bytes: capturer.bytes_captured(),
                chunks: capturer.chunks_captured(),
            },
        }
    }
}

/// A cancelled session never yields data; a finished one must have some.
#[track_caller]
pub(crate) fn resolve_stop(reason: StopReason, blob: MediaBlob) -> CoreResult<Option<MediaBlob>> {
    match reason {
        StopReason::Cancel => Ok(None),
        StopReason::Finish if blob.is_empty() => Err(CoreError::NoMediaCaptured {
            location: ErrorLocation::from(Location::caller()),
        }),
        StopReason::Finish => Ok(Some(blob)),
    }
}
