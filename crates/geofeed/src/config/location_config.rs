use crate::config::default_high_accuracy;

use serde::{Deserialize, Serialize};

/// Position fix used to tag posts.
///
/// When both fields are set they act as the device position; when either is
/// missing, geolocation fails and posts fall back to manual coordinate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude of the configured fix.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude of the configured fix.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// High-accuracy hint passed to the location provider.
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
}
