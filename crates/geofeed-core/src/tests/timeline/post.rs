use crate::{Coordinates, MediaBlob, MediaKind, Timeline};

use chrono::Utc;

/// WHAT: Pushing a text post appends exactly one entry
/// WHY: The feed is the single source of truth for rendered posts
#[test]
fn given_empty_feed_when_pushing_text_then_one_post_appended() {
    // Given: An empty feed
    let mut timeline = Timeline::new();
    assert!(timeline.is_empty());

    // When: Pushing a text post
    let id = timeline.push_text("hello".to_string(), Utc::now());

    // Then: Exactly one post exists with the entered text and no extras
    assert_eq!(timeline.len(), 1);
    let post = timeline.posts()[0].clone();
    assert_eq!(post.id, id);
    assert_eq!(post.text, "hello");
    assert!(post.coords.is_none());
    assert!(post.media.is_none());
}

/// WHAT: Late-arriving coordinates attach to the right post
/// WHY: Geolocation resolves after the post is already rendered
#[test]
fn given_two_posts_when_setting_coords_then_only_target_updated() {
    // Given: Two posts
    let mut timeline = Timeline::new();
    let first = timeline.push_text("first".to_string(), Utc::now());
    let second = timeline.push_text("second".to_string(), Utc::now());

    // When: Appending coordinates to the second post
    let coords = Coordinates::new(55.75222, 37.61556);
    assert!(timeline.set_coords(second, coords));

    // Then: Only the second post carries them
    assert!(timeline.posts()[0].coords.is_none());
    assert_eq!(timeline.posts()[1].coords, Some(coords));
    assert!(timeline.get(first).is_some());
}

/// WHAT: set_coords on an unknown id reports failure
/// WHY: A stale prompt must not silently invent a post
#[test]
fn given_unknown_id_when_setting_coords_then_false() {
    let mut timeline = Timeline::new();
    let id = timeline.push_text("only".to_string(), Utc::now());

    let mut other = Timeline::new();
    let foreign = other.push_text("elsewhere".to_string(), Utc::now());

    assert!(!timeline.set_coords(foreign, Coordinates::new(1.0, 2.0)));
    assert!(timeline.get(id).is_some_and(|p| p.coords.is_none()));
}

/// WHAT: A media post carries the blob with empty text
/// WHY: Recorded posts mirror the submitted-text path minus the content
#[test]
fn given_finished_blob_when_pushing_media_then_post_embeds_it() {
    // Given: An assembled audio blob
    let blob = MediaBlob::from_audio_samples(&[0.1, -0.1, 0.2], 48_000);

    // When: Pushing a media post
    let mut timeline = Timeline::new();
    let id = timeline.push_media(blob.clone(), Utc::now());

    // Then: The post embeds the blob and has no text
    let post = timeline.get(id).cloned();
    assert!(post.as_ref().is_some_and(|p| p.text.is_empty()));
    assert_eq!(post.and_then(|p| p.media), Some(blob));
}

/// WHAT: Audio blob round-trips its PCM and reports duration
/// WHY: Playback decodes the same samples the capturer stored
#[test]
#[allow(clippy::unwrap_used)]
fn given_audio_samples_when_building_blob_then_pcm_round_trips() {
    // Given: A second's worth of mono samples at 4 Hz
    let samples = [0.5f32, -0.5, 0.25, -0.25];

    // When: Building and decoding the blob
    let blob = MediaBlob::from_audio_samples(&samples, 4);

    // Then: Bytes, samples, and duration all agree
    assert_eq!(blob.kind, MediaKind::Audio);
    assert_eq!(blob.len(), 16);
    assert_eq!(blob.pcm_samples().unwrap(), samples);
    assert_eq!(blob.duration_secs(), Some(1));
}

/// WHAT: Video blobs concatenate chunks and refuse PCM decoding
/// WHY: Container bytes are opaque to the audio player
#[test]
fn given_video_chunks_when_building_blob_then_bytes_concatenated() {
    let blob = MediaBlob::from_video_chunks(vec![vec![1, 2], vec![3], vec![4, 5]]);

    assert_eq!(blob.kind, MediaKind::Video);
    assert_eq!(blob.bytes, vec![1, 2, 3, 4, 5]);
    assert!(blob.pcm_samples().is_none());
    assert!(blob.duration_secs().is_none());
}
