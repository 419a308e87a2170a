//! API utilities for frontend-backend communication
//!
//! Provides the resolved application config and helpers for constructing
//! API URLs.

use contracts::shared::config::{load_config, AppConfig};
use once_cell::sync::Lazy;

/// Configuration resolved once at startup.
///
/// `BRANDFLARE_CONFIG` may carry TOML text at build time; a broken override
/// is logged and the embedded defaults are used instead.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    match load_config(option_env!("BRANDFLARE_CONFIG")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid BRANDFLARE_CONFIG, falling back to defaults: {e}");
            load_config(None).unwrap_or_default()
        }
    }
});

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise builds it from the current
/// window location with the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - Empty string if window is not available and no base URL is configured
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            return CONFIG
                .api
                .base_url
                .clone()
                .unwrap_or_default();
        }
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    CONFIG.api.resolve_base(&protocol, &hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/hr/weeks/3/payroll");
/// ```
pub fn api_url(path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", api_base(), path)
    } else {
        format!("{}/{}", api_base(), path)
    }
}

/// Currency label used on money columns
pub fn currency() -> &'static str {
    CONFIG.display.currency.as_str()
}
