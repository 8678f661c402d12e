use geofeed_core::{Coordinates, CoreResult, PostId};

/// Commands delivered back to the app loop from background tasks.
#[derive(Debug)]
pub enum AppCommand {
    /// A geolocation request for a post completed.
    LocationResolved {
        /// The post that asked for coordinates.
        post_id: PostId,
        /// The fix, or why none is available.
        result: CoreResult<Coordinates>,
    },
}
