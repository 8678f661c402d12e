use crate::config::{default_ffmpeg_path, default_video_device};

use serde::{Deserialize, Serialize};

/// Camera capture configuration for video posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Capture device handed to ffmpeg (`/dev/video0`, `0:0`, ...).
    #[serde(default = "default_video_device")]
    pub device: String,

    /// Path to the ffmpeg binary.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
}
