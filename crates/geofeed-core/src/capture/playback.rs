use crate::{
    CoreError, CoreResult,
    capture::Resampler,
    timeline::MediaBlob,
};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use cpal::{
    Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{error, info, instrument};

/// Plays audio blobs back through the default output device.
pub struct AudioPlayer;

/// Owns the live output stream; dropping the handle stops playback.
///
/// The handle is `!Send` and must stay on the thread that started playback
/// (the app loop thread).
pub struct PlaybackHandle {
    _stream: Stream,
    done: Arc<AtomicBool>,
}

impl PlaybackHandle {
    /// Whether the stream has played past the end of the blob.
    pub fn is_finished(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

impl AudioPlayer {
    /// Start playing an audio blob's PCM. Non-audio blobs are rejected.
    #[track_caller]
    #[instrument(skip(blob))]
    pub fn play(blob: &MediaBlob) -> CoreResult<PlaybackHandle> {
        let samples = blob
            .pcm_samples()
            .ok_or(CoreError::PlaybackUnsupported {
                kind: blob.kind,
                location: ErrorLocation::from(Location::caller()),
            })?;
        let source_rate = blob.sample_rate.ok_or_else(|| CoreError::DeviceError {
            reason: "Audio blob is missing its sample rate".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| CoreError::DeviceError {
                reason: "No output device found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let config: StreamConfig = device
            .default_output_config()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to get output config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .into();

        let output_rate = config.sample_rate;
        let samples = if output_rate != source_rate {
            Resampler::new(source_rate, output_rate)?.resample(&samples)?
        } else {
            samples
        };

        let channels = usize::from(config.channels).max(1);
        let sample_count = samples.len();
        let done = Arc::new(AtomicBool::new(false));
        let done_flag = Arc::clone(&done);
        let mut pos = 0usize;

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(channels) {
                        // Mono source duplicated to every output channel;
                        // silence after the end.
                        let sample = samples.get(pos).copied().unwrap_or(0.0);
                        pos = pos.saturating_add(1);
                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }
                    if pos >= samples.len() {
                        done_flag.store(true, Ordering::Release);
                    }
                },
                |err| {
                    error!("Audio output stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to build output stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to start output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(sample_count, "Playback started");

        Ok(PlaybackHandle {
            _stream: stream,
            done,
        })
    }
}
