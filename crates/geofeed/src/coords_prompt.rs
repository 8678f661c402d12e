use geofeed_core::PostId;

/// The manual coordinate-entry modal, bound to one specific post.
///
/// The widget keeps a single prompt slot: when another post falls back to
/// manual entry while a prompt is open, the slot is replaced, not stacked,
/// and the earlier post can no longer receive manual coordinates. Carrying
/// the bound `post_id` here keeps the binding explicit; the replacement
/// behaviour itself is a known limitation (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordsPrompt {
    /// The post awaiting manual coordinates.
    pub post_id: PostId,
    /// Current contents of the modal input.
    pub input: String,
}

impl CoordsPrompt {
    /// Open a prompt for a post.
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            input: String::new(),
        }
    }
}
