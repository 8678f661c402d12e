use crate::config::default_show_key_hints;

use serde::{Deserialize, Serialize};

/// Application behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Whether to render the key-hint row under the timeline.
    #[serde(default = "default_show_key_hints")]
    pub show_key_hints: bool,
}
