//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box,
//! except `props.global_title`: a `[props]` table that omits it is rejected
//! when the component mounts.

use crate::component::{Item, Props, PropsError};
use chrono::format::{Item as FormatItem, StrftimeItems};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Whether chrono can format with `format` without erroring.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, FormatItem::Error))
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub props: PropsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial props handed to the list component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropsConfig {
    #[serde(default)]
    pub global_title: Option<String>,
    #[serde(default)]
    pub buttons_color: Option<String>,
    /// Array of tables, so it has to serialize last.
    #[serde(default)]
    pub list_items: Option<Vec<Item>>,
}

impl Default for PropsConfig {
    fn default() -> Self {
        Self {
            global_title: Some(default_global_title()),
            buttons_color: Some("red".to_string()),
            list_items: Some(vec![Item::with_id(1), Item::with_id(2)]),
        }
    }
}

impl PropsConfig {
    pub fn to_props(&self) -> Result<Props, PropsError> {
        Props::from_parts(
            self.global_title.clone(),
            self.list_items.clone(),
            self.buttons_color.clone(),
        )
    }
}

/// Terminal host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Colours the `c` key cycles the buttons through.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            palette: default_palette(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_global_title() -> String {
    "My List".to_string()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_palette() -> Vec<String> {
    ["red", "blue", "green", "yellow"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/mylist/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
