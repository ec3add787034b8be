//! Store configuration.

use crate::error::{ListError, Result};
use serde::{Deserialize, Serialize};

/// How new items get their id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Counter that only ever grows; ids are never reused.
    #[default]
    Monotonic,
    /// `len + 1` at creation time. Can repeat an id after a deletion.
    CountBased,
}

/// List store configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Text input is accepted only while shorter than this many characters.
    /// Default: 10
    pub max_field_len: usize,

    /// Id assignment for new items.
    /// Default: monotonic
    pub id_strategy: IdStrategy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_field_len: 10,
            id_strategy: IdStrategy::Monotonic,
        }
    }
}

impl ListConfig {
    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ListError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_field_len < 2 {
            return Err(ListError::Config(format!(
                "max_field_len must be at least 2, got {}",
                self.max_field_len
            )));
        }
        Ok(())
    }
}
