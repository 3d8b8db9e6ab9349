//! Runtime configuration for a mounted page.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::{
    DEFAULT_NOTIFICATION_EXIT_MS, DEFAULT_NOTIFICATION_MS, DEFAULT_REPLY_DELAY_MS,
    DEFAULT_WELCOME_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Pause before the assistant's reply appears.  Zero replies immediately.
    pub reply_delay_ms: u32,
    /// How long a notification stays on screen before it slides out.
    pub notification_ms: u32,
    /// Length of the slide-out animation; the element is removed afterwards.
    pub notification_exit_ms: u32,
    pub welcome_message: String,
}

impl Default for AppConfig {
    /// Built-in timings, optionally overridden at build time through the
    /// `STOREFRONT_REPLY_DELAY_MS` / `STOREFRONT_NOTIFICATION_MS` environment
    /// variables.
    fn default() -> Self {
        Self {
            reply_delay_ms: env_ms(option_env!("STOREFRONT_REPLY_DELAY_MS"), DEFAULT_REPLY_DELAY_MS),
            notification_ms: env_ms(option_env!("STOREFRONT_NOTIFICATION_MS"), DEFAULT_NOTIFICATION_MS),
            notification_exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from the optional object handed to `mount()`.  `undefined` and
    /// `null` yield the defaults; missing fields keep their default value.
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    }

    /// Same as [`AppConfig::from_js`] for a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn env_ms(value: Option<&str>, fallback: u32) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}
