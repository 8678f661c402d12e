use crate::config::LocationConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use geofeed_core::{Coordinates, CoreError, CoreResult, LocationProvider};
use tracing::debug;

/// Position fix resolved from configuration.
///
/// The shipped [`LocationProvider`]: posts are tagged with the fix from
/// `[location]` in the config file. With no fix configured every request
/// fails, which routes posts into the manual coordinate prompt. A provider
/// backed by a real positioning service slots in behind the same trait.
pub struct ConfigLocationProvider {
    fix: Option<Coordinates>,
}

impl ConfigLocationProvider {
    /// Build a provider from the location section of the config.
    pub fn new(config: &LocationConfig) -> Self {
        let fix = match (config.latitude, config.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        };
        Self { fix }
    }
}

impl LocationProvider for ConfigLocationProvider {
    fn current_position(&self, high_accuracy: bool) -> CoreResult<Coordinates> {
        debug!(high_accuracy, "Resolving position fix");

        self.fix.ok_or_else(|| CoreError::LocationUnavailable {
            reason: "No position fix configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
