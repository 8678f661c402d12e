//! Geofeed Core Library
//!
//! Headless building blocks for a chat timeline with geolocation tagging and
//! audio/video recording: the post feed, coordinate parsing, recording
//! sessions over CPAL and FFmpeg, and audio playback.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use geofeed_core::{Coordinates, Timeline};
//!
//! let mut timeline = Timeline::new();
//! let id = timeline.push_text("hello".to_string(), Utc::now());
//!
//! if let Some(coords) = Coordinates::parse("55.75222, 37.61556") {
//!     timeline.set_coords(id, coords);
//! }
//!
//! assert_eq!(timeline.len(), 1);
//! ```

mod capture;
mod error;
mod location;
mod timeline;

pub use {
    capture::{
        AudioPlayer, CaptureConfig, CaptureManager, CaptureStats, PlaybackHandle, SessionInfo,
        StopReason, VideoCaptureConfig,
    },
    error::{CoreError, Result as CoreResult},
    location::LocationProvider,
    timeline::{
        Coordinates, MediaBlob, MediaKind, Post, PostId, Timeline, format_date, format_timer,
    },
};

#[cfg(test)]
mod tests;
