use anyhow::Context;
use serde::Deserialize;

use super::table::{DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_MESSAGE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full API root ("https://erp.example.com/api"). When unset the root is
    /// derived from the page location, `port` and `prefix`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_port() -> u16 {
    5000
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

fn default_loading_message() -> String {
    DEFAULT_LOADING_MESSAGE.to_string()
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

fn default_currency() -> String {
    "KES".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            prefix: default_prefix(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            loading_message: default_loading_message(),
            empty_message: default_empty_message(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl ApiConfig {
    /// API root for a page served from `protocol//hostname`
    pub fn resolve_base(&self, protocol: &str, hostname: &str) -> String {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return url.trim().trim_end_matches('/').to_string();
        }
        let prefix = self.prefix.trim_end_matches('/');
        let prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };
        format!("{}//{}:{}{}", protocol, hostname, self.port, prefix)
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
prefix = "/api"

[table]
page_size = 10
loading_message = "Loading workshop records..."
empty_message = "No records found."

[display]
currency = "KES"
"#;

/// Load configuration.
///
/// `override_toml` is TOML text supplied at build time; without it the
/// embedded default is used.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    match override_toml.filter(|s| !s.trim().is_empty()) {
        Some(src) => {
            log::info!("Using configuration override");
            let config: AppConfig =
                toml::from_str(src).context("Failed to parse configuration override")?;
            Ok(config)
        }
        None => {
            log::info!("Using default embedded configuration");
            let config: AppConfig =
                toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded configuration")?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.display.currency, "KES");
        assert_eq!(config.table.empty_message, DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[table]\npage_size = 25\n")).unwrap();
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.table.loading_message, DEFAULT_LOADING_MESSAGE);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let err = load_config(Some("[table]\npage_size = \"many\"\n")).unwrap_err();
        assert!(err.to_string().contains("configuration override"));
    }

    #[test]
    fn test_resolve_base() {
        let api = ApiConfig::default();
        assert_eq!(api.resolve_base("http:", "localhost"), "http://localhost:5000/api");

        let api = ApiConfig {
            base_url: Some("https://erp.brandflare.co.ke/api/".into()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_base("http:", "localhost"), "https://erp.brandflare.co.ke/api");

        let api = ApiConfig {
            port: 8080,
            prefix: "v1".into(),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_base("https:", "10.0.0.5"), "https://10.0.0.5:8080/v1");
    }
}
