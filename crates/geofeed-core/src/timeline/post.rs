use crate::timeline::Coordinates;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Unique identifier of a timeline post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of recorded media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Microphone-only recording.
    Audio,
    /// Camera plus microphone recording.
    Video,
}

/// An assembled recording: the single media object built from a finished
/// session's buffered chunks.
///
/// Audio blobs hold mono interleaved f32 little-endian PCM together with the
/// capture sample rate. Video blobs hold raw container bytes as produced by
/// the capture pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaBlob {
    /// What the bytes encode.
    pub kind: MediaKind,
    /// The raw media payload.
    pub bytes: Vec<u8>,
    /// Sample rate of PCM audio payloads.
    pub sample_rate: Option<u32>,
}

impl MediaBlob {
    /// Build an audio blob from captured mono PCM samples.
    pub fn from_audio_samples(samples: &[f32], sample_rate: u32) -> Self {
        let mut bytes = Vec::with_capacity(samples.len() * 4);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        Self {
            kind: MediaKind::Audio,
            bytes,
            sample_rate: Some(sample_rate),
        }
    }

    /// Build a video blob by concatenating captured container chunks.
    pub fn from_video_chunks(chunks: Vec<Vec<u8>>) -> Self {
        let mut bytes = Vec::with_capacity(chunks.iter().map(Vec::len).sum());
        for chunk in chunks {
            bytes.extend_from_slice(&chunk);
        }
        Self {
            kind: MediaKind::Video,
            bytes,
            sample_rate: None,
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob holds no data.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the payload back into PCM samples (audio blobs only).
    pub fn pcm_samples(&self) -> Option<Vec<f32>> {
        if self.kind != MediaKind::Audio {
            return None;
        }
        let samples = self
            .bytes
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Some(samples)
    }

    /// Approximate duration of an audio payload in whole seconds.
    pub fn duration_secs(&self) -> Option<u64> {
        let rate = self.sample_rate?;
        if rate == 0 {
            return None;
        }
        Some((self.bytes.len() as u64 / 4) / u64::from(rate))
    }
}

/// One timeline entry: timestamp, text content, optional coordinates,
/// optional embedded media.
///
/// Posts are never mutated after creation except to append late-arriving
/// coordinates, and never destroyed.
#[derive(Debug, Clone)]
pub struct Post {
    /// Unique post id.
    pub id: PostId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Text content (empty for recorded posts).
    pub text: String,
    /// Geolocation tag, appended once resolved.
    pub coords: Option<Coordinates>,
    /// Embedded media for recorded posts.
    pub media: Option<MediaBlob>,
}

/// The append-only post feed.
#[derive(Debug, Default)]
pub struct Timeline {
    posts: Vec<Post>,
}

impl Timeline {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text post and return its id.
    #[instrument(skip(self, text))]
    pub fn push_text(&mut self, text: String, created_at: DateTime<Utc>) -> PostId {
        let id = PostId::new();
        self.posts.push(Post {
            id,
            created_at,
            text,
            coords: None,
            media: None,
        });
        debug!(post_id = %id, "Text post appended");
        id
    }

    /// Append a recorded post carrying a media blob and return its id.
    #[instrument(skip(self, blob))]
    pub fn push_media(&mut self, blob: MediaBlob, created_at: DateTime<Utc>) -> PostId {
        let id = PostId::new();
        self.posts.push(Post {
            id,
            created_at,
            text: String::new(),
            coords: None,
            media: Some(blob),
        });
        debug!(post_id = %id, "Media post appended");
        id
    }

    /// Append late-arriving coordinates to an existing post.
    ///
    /// Returns `false` when the id is unknown.
    pub fn set_coords(&mut self, id: PostId, coords: Coordinates) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.coords = Some(coords);
                true
            }
            None => false,
        }
    }

    /// All posts in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
