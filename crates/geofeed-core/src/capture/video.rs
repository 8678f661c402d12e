use crate::{CoreError, CoreResult};

use std::{
    io::Read,
    panic::Location,
    process::{Child, Command, Stdio},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    thread::JoinHandle,
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// FFmpeg camera invocation for video sessions.
#[derive(Debug, Clone)]
pub struct VideoCaptureConfig {
    /// Path to the ffmpeg binary.
    pub ffmpeg_path: String,
    /// Capture device, e.g. `/dev/video0` on Linux or `0:0` on macOS.
    pub device: String,
}

/// Upper bound on buffered container bytes (~64 MiB). Chunks past the cap
/// are dropped with a warning; dropping the head of a container stream would
/// corrupt it, so the tail is sacrificed instead.
pub(crate) const MAX_CAPTURE_BYTES: usize = 64 * 1024 * 1024;

const READ_CHUNK_BYTES: usize = 64 * 1024;

/// FFmpeg exits almost immediately when the device is missing or busy, so a
/// short wait after spawn distinguishes denial from a healthy capture.
const SPAWN_PROBE_DELAY: Duration = Duration::from_millis(150);

/// Camera capture through an ffmpeg child process.
///
/// The child muxes camera and microphone into a matroska stream on stdout;
/// a reader thread drains it into the chunk buffer until stopped.
pub struct VideoCapturer {
    child: Child,
    reader: Option<JoinHandle<()>>,
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
    bytes_read: Arc<AtomicUsize>,
    shutdown: Arc<AtomicBool>,
}

impl VideoCapturer {
    /// Spawn ffmpeg against the configured device and start draining it.
    #[track_caller]
    #[instrument(skip(config))]
    pub fn spawn(config: &VideoCaptureConfig) -> CoreResult<Self> {
        let mut cmd = Command::new(&config.ffmpeg_path);
        cmd.args(["-hide_banner", "-loglevel", "error"]);

        #[cfg(target_os = "linux")]
        cmd.args(["-f", "video4linux2"]);
        #[cfg(target_os = "macos")]
        cmd.args(["-f", "avfoundation"]);

        cmd.args(["-i", &config.device])
            .args(["-f", "matroska", "pipe:1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());

        let mut child = cmd.spawn().map_err(|e| CoreError::CameraUnavailable {
            reason: format!("Failed to spawn ffmpeg: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::thread::sleep(SPAWN_PROBE_DELAY);
        if let Ok(Some(status)) = child.try_wait() {
            return Err(CoreError::CameraUnavailable {
                reason: format!("ffmpeg exited during startup: {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| CoreError::CameraUnavailable {
                reason: "ffmpeg stdout was not captured".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let chunks = Arc::new(Mutex::new(Vec::new()));
        let bytes_read = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(AtomicBool::new(false));

        let reader = std::thread::spawn({
            let chunks = Arc::clone(&chunks);
            let bytes_read = Arc::clone(&bytes_read);
            let shutdown = Arc::clone(&shutdown);
            let mut stdout = stdout;
            move || {
                let mut buf = vec![0u8; READ_CHUNK_BYTES];
                loop {
                    if shutdown.load(Ordering::Acquire) {
                        break;
                    }
                    match stdout.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            let total = bytes_read.fetch_add(n, Ordering::AcqRel) + n;
                            if total > MAX_CAPTURE_BYTES {
                                warn!(total_bytes = total, "Capture cap reached, dropping chunk");
                                continue;
                            }
                            let mut guard = chunks.lock().unwrap_or_else(|e| {
                                error!("Chunk buffer lock poisoned, recovering: {}", e);
                                e.into_inner()
                            });
                            guard.push(buf[..n].to_vec());
                        }
                        Err(e) => {
                            error!("Camera stream read failed: {}", e);
                            break;
                        }
                    }
                }
            }
        });

        info!(device = %config.device, "Video capture started");

        Ok(Self {
            child,
            reader: Some(reader),
            chunks,
            bytes_read,
            shutdown,
        })
    }

    /// Stop the child, join the reader, and drain the buffered chunks.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> Vec<Vec<u8>> {
        self.shutdown.store(true, Ordering::Release);

        if let Err(e) = self.child.kill() {
            debug!("ffmpeg already exited: {}", e);
        }
        let _ = self.child.wait();

        if let Some(reader) = self.reader.take() {
            if reader.join().is_err() {
                error!("Camera reader thread panicked");
            }
        }

        let mut guard = self.chunks.lock().unwrap_or_else(|e| e.into_inner());
        let chunks = std::mem::take(&mut *guard);
        debug!(chunk_count = chunks.len(), "Captured video chunks");
        chunks
    }

    /// Total container bytes seen so far, for the preview counters.
    pub fn bytes_captured(&self) -> usize {
        self.bytes_read.load(Ordering::Acquire)
    }

    /// Buffered chunk count, for the preview counters.
    pub fn chunks_captured(&self) -> usize {
        self.chunks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Drop for VideoCapturer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
