use crate::{CaptureManager, CoreError};

/// WHAT: Finishing with no active session is a device error
/// WHY: The stop controls are only valid while recording
#[test]
fn given_idle_manager_when_finishing_then_device_error() {
    // Given: An idle manager
    let mut manager = CaptureManager::new();
    assert!(!manager.is_recording());

    // When: Finishing without a session
    let result = manager.finish();

    // Then: The call is rejected
    assert!(matches!(result, Err(CoreError::DeviceError { .. })));
}

/// WHAT: Cancelling with no active session is a device error
/// WHY: Same guard as finish; the UI hides these controls when idle
#[test]
fn given_idle_manager_when_cancelling_then_device_error() {
    let mut manager = CaptureManager::new();

    let result = manager.cancel();

    assert!(matches!(result, Err(CoreError::DeviceError { .. })));
    assert!(manager.active_kind().is_none());
    assert!(manager.stats().is_none());
}
