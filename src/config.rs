use serde::{Deserialize, Serialize};

use crate::enums::RenderMode;
use crate::error::ConfigError;
use crate::snapshot::DEFAULT_SNAPSHOT_KEY;

/// Label of the disabled entry shown while the catalog loads.
pub const DEFAULT_LOADING_LABEL: &str = "Loading…";

/// Form settings chosen by the embedding page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub mode: RenderMode,
    pub snapshot_key: String,
    pub loading_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Default,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            loading_label: DEFAULT_LOADING_LABEL.to_string(),
        }
    }
}

impl FormConfig {
    pub fn with_mode(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Load settings from YAML. Missing keys take their defaults.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Err(ConfigError::Empty);
        }
        serde_saphyr::from_str(input).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
