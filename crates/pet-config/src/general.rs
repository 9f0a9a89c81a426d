//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "table".to_string()
}

const fn default_pretty_json() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (json, table, raw).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Whether saved and exported JSON files are pretty-printed.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            pretty_json: default_pretty_json(),
        }
    }
}
