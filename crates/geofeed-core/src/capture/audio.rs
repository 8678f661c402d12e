use crate::{CoreError, CoreResult};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Maximum buffered samples (5 minutes of mono at 48kHz, ~58MB). Bounds
/// memory for a recording left running; the oldest samples are dropped first.
pub(crate) const MAX_BUFFER_SAMPLES: usize = 48_000 * 60 * 5;

/// Microphone capture for voice posts.
///
/// Samples are downmixed to mono (channel 0 of the device stream) into a
/// bounded ring buffer shared with the stream callback.
pub struct AudioCapturer {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    samples: Arc<Mutex<VecDeque<f32>>>,
    /// Set before the stream is dropped so no in-flight callback writes
    /// after `stop()` drains the buffer.
    shutdown: Arc<AtomicBool>,
}

impl AudioCapturer {
    /// Open the default input device.
    #[track_caller]
    #[instrument]
    pub fn new() -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(CoreError::MicrophoneUnavailable {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config = device
            .default_input_config()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to get input config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            device_id = ?device.id(),
            sample_rate = config.sample_rate(),
            channels = config.channels(),
            "AudioCapturer initialized"
        );

        Ok(Self {
            device,
            config: config.into(),
            stream: None,
            samples: Arc::new(Mutex::new(VecDeque::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start streaming microphone samples into the buffer.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        let samples = Arc::clone(&self.samples);
        let shutdown = Arc::clone(&self.shutdown);
        let channels = usize::from(self.config.channels).max(1);

        self.shutdown.store(false, Ordering::Release);

        let stream = self
            .device
            .build_input_stream(
                &self.config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    // Recover from lock poison rather than silently dropping
                    // audio; the buffer contents are still valid.
                    let mut buf = samples.lock().unwrap_or_else(|e| {
                        error!("Sample buffer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    // Channel 0 only; posts store mono voice notes.
                    buf.extend(data.iter().step_by(channels).copied());
                    while buf.len() > MAX_BUFFER_SAMPLES {
                        buf.pop_front();
                    }
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to build input stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to start input stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        info!("Audio capture started");

        Ok(())
    }

    /// Stop the stream and drain the buffered samples.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<Vec<f32>> {
        // Signal the callback before dropping the stream so a late-firing
        // callback cannot write after the buffer is drained.
        self.shutdown.store(true, Ordering::Release);

        if let Some(stream) = self.stream.take() {
            drop(stream);
            info!("Audio capture stopped");
        }

        let samples: Vec<f32> = self
            .samples
            .lock()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to lock sample buffer: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .iter()
            .copied()
            .collect();

        debug!(sample_count = samples.len(), "Captured audio samples");

        Ok(samples)
    }

    /// Mono samples buffered so far, for the live capture counters.
    pub fn buffered_samples(&self) -> usize {
        self.samples
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Capture sample rate of the device stream.
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }
}
