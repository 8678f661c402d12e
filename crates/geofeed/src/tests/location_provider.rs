use crate::{ConfigLocationProvider, config::LocationConfig};

use geofeed_core::{Coordinates, CoreError, LocationProvider};

/// WHAT: A configured fix resolves to its coordinates
/// WHY: The success path that tags posts without the modal
#[test]
fn given_configured_fix_when_requesting_position_then_coordinates_returned() {
    // Given: A provider with a configured fix
    let provider = ConfigLocationProvider::new(&LocationConfig {
        latitude: Some(55.75222),
        longitude: Some(37.61556),
        high_accuracy: true,
    });

    // When: Requesting the position
    let result = provider.current_position(true);

    // Then: The fix comes back
    assert!(matches!(
        result,
        Ok(coords) if coords == Coordinates::new(55.75222, 37.61556)
    ));
}

/// WHAT: A missing fix fails with LocationUnavailable
/// WHY: This failure is what routes posts into the manual prompt
#[test]
fn given_no_fix_when_requesting_position_then_location_unavailable() {
    // Given: A provider with half a fix configured
    let provider = ConfigLocationProvider::new(&LocationConfig {
        latitude: Some(55.75222),
        longitude: None,
        high_accuracy: false,
    });

    // When: Requesting the position
    let result = provider.current_position(false);

    // Then: The request fails and the caller falls back to manual entry
    assert!(matches!(
        result,
        Err(CoreError::LocationUnavailable { .. })
    ));
}
