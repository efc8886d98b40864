use std::path::PathBuf;

use thiserror::Error;

use crate::export::PlotlyJs;
use crate::figure::style::Style;

pub const DEFAULT_INPUT: &str = "scheduled_monuments_wales_centroids_cleaned.csv";
pub const DEFAULT_OUTPUT: &str = "index.html";

/// Set to open the written page in the default browser.
pub const ENV_PREVIEW: &str = "MONUMENT_MAP_PREVIEW";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}: expected a boolean, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// Everything a run needs. Defaults reproduce the stock map; the binary
/// never changes paths, styling or the plotly.js source.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Open the written page in the default browser.
    pub preview: bool,
    pub plotly_js: PlotlyJs,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview: false,
            plotly_js: PlotlyJs::default(),
            style: Style::default(),
        }
    }
}

impl Config {
    /// Defaults, with preview switched by `MONUMENT_MAP_PREVIEW`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_PREVIEW).filter(|v| !v.trim().is_empty()) {
            config.preview = parse_bool(ENV_PREVIEW, &value)?;
        }
        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
