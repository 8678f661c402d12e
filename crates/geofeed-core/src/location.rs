use crate::{CoreResult, timeline::Coordinates};

/// Source of a device position fix.
///
/// The injected stand-in for a platform geolocation service: the app wires a
/// provider in at construction and tests use doubles, so the coordinate flow
/// runs without any live positioning backend. `high_accuracy` mirrors the
/// accuracy hint of platform geolocation APIs; providers may ignore it.
pub trait LocationProvider {
    /// Resolve the current position, or explain why no fix is available.
    fn current_position(&self, high_accuracy: bool) -> CoreResult<Coordinates>;
}
