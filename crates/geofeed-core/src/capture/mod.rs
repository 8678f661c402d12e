pub(crate) mod audio;
mod manager;
mod playback;
mod resampler;
pub(crate) mod session;
mod video;

pub(crate) use {audio::AudioCapturer, resampler::Resampler, video::VideoCapturer};

pub use {
    manager::{CaptureConfig, CaptureManager, CaptureStats, SessionInfo},
    playback::{AudioPlayer, PlaybackHandle},
    session::StopReason,
    video::VideoCaptureConfig,
};
