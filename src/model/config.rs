use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListConfig {
    /// Items added when the list is created. Blank entries are skipped.
    #[serde(default)]
    pub seed: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Log file. The terminal UI logs nothing without one.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive when LISTO_LOG is unset (e.g. "debug")
    #[serde(default)]
    pub level: Option<String>,
}

fn default_title() -> String {
    "Todo List".to_string()
}

fn default_true() -> bool {
    true
}
