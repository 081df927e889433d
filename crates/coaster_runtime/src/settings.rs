//! Runtime settings

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demo runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Preset catalog index to spawn.
    pub preset_index: u8,
    /// Where the save/load round trip writes its template.
    pub template_path: String,
    /// Number of steering control steps to run.
    pub steering_demo_steps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset_index: 0,
            template_path: "demo.vehicle".to_string(),
            steering_demo_steps: 120,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "bad settings file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
