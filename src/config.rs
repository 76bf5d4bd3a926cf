//! Endpoint configuration for the API and WebSocket servers.
//!
//! Values come from build-time environment variables with a runtime override
//! read from `window.JOBBOARD_CONFIG`, so static deployments can repoint the
//! client without rebuilding. Everything here ships to the browser; never put
//! secrets in it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_WS_BASE_URL: &str = "http://localhost:3001";

/// Base URLs used by network helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub ws_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), ws_base_url: DEFAULT_WS_BASE_URL.to_owned() }
    }
}

impl AppConfig {
    /// Build config from `JOBBOARD_API_URL` / `JOBBOARD_WS_URL` captured at
    /// compile time, then apply `window.JOBBOARD_CONFIG` when present.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply(Overrides {
            api_base_url: option_env!("JOBBOARD_API_URL").and_then(normalize_value),
            ws_base_url: option_env!("JOBBOARD_WS_URL").and_then(normalize_value),
        });
        if let Some(runtime) = runtime_overrides() {
            log::debug!("applying runtime endpoint overrides");
            config.apply(runtime);
        }
        config
    }

    fn apply(&mut self, overrides: Overrides) {
        if let Some(value) = overrides.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.ws_base_url {
            self.ws_base_url = value;
        }
    }
}

#[derive(Debug, Default)]
struct Overrides {
    api_base_url: Option<String>,
    ws_base_url: Option<String>,
}

/// Trim whitespace and a trailing `/`; blank values count as unset.
fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "hydrate")]
fn runtime_overrides() -> Option<Overrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("JOBBOARD_CONFIG")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let object = Object::from(value);
    let read = |key: &str| {
        Reflect::get(&object, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .and_then(|v| normalize_value(&v))
    };
    Some(Overrides { api_base_url: read("api_url"), ws_base_url: read("ws_url") })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_overrides() -> Option<Overrides> {
    None
}
