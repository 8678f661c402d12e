use serde::{Deserialize, Serialize};

/// Audio input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Preferred input device name (None = system default).
    #[serde(default)]
    pub selected_device: Option<String>,
}
