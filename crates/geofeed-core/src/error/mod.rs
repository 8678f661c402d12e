use crate::timeline::MediaKind;

use error_location::ErrorLocation;
use thiserror::Error;

/// Media and location errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    MicrophoneUnavailable {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Camera capture could not be started.
    #[error("Camera unavailable: {reason} {location}")]
    CameraUnavailable {
        /// Description of the capture failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Media device operation failed.
    #[error("Device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A finished recording produced no data.
    #[error("No media captured {location}")]
    NoMediaCaptured {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio resampling failed during playback preparation.
    #[error("Resampling error: {reason} {location}")]
    ResamplingError {
        /// Description of the resampling error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The blob's media kind cannot be played back in-process.
    #[error("Playback not supported for {kind:?} blobs {location}")]
    PlaybackUnsupported {
        /// Media kind of the rejected blob.
        kind: MediaKind,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No position fix could be obtained.
    #[error("Location unavailable: {reason} {location}")]
    LocationUnavailable {
        /// Description of why the fix failed.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
