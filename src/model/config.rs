use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from jot.toml (all optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides for theme slots, e.g. `pending = "#FFA500"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
