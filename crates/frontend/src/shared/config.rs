//! Client configuration.
//!
//! The defaults are embedded; a host page may override any key with a
//! `<script id="app-config" type="application/toml">` block.

use once_cell::sync::OnceCell;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
api_base = ""
log_level = "debug"

[notifications]
duration_ms = 5000
exit_animation_ms = 300

[currency]
symbol = "$"
thousands_separator = ","
decimal_separator = "."
"#;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every `/api/...` path. Empty means same origin.
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub duration_ms: u32,
    pub exit_animation_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            exit_animation_ms: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: default_log_level(),
            notifications: NotificationConfig::default(),
            currency: CurrencyConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

fn default_log_level() -> String {
    "debug".to_string()
}

/// Parse a configuration document. An empty override yields the embedded defaults.
pub fn parse_config(override_toml: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    match override_toml.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => toml::from_str(text),
        None => toml::from_str(DEFAULT_CONFIG),
    }
}

fn read_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Load the configuration once. Called from `hydrate()` before logging is set up,
/// so a broken override is reported after the logger exists.
pub fn init() -> Result<&'static AppConfig, toml::de::Error> {
    if let Some(existing) = CONFIG.get() {
        return Ok(existing);
    }
    let (config, result) = match parse_config(read_override().as_deref()) {
        Ok(config) => (config, Ok(())),
        Err(e) => (AppConfig::default(), Err(e)),
    };
    let stored = CONFIG.get_or_init(|| config);
    result.map(|_| stored)
}

/// Current configuration; the defaults when `init()` has not run (tests).
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
