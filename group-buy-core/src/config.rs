//! Widget configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base API URL used when `GROUP_BUY_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";
/// Path of the group purchase endpoint, relative to the API base URL.
pub const GROUP_PURCHASE_PATH: &str = "/api/v1/group-purchase";
pub const DEFAULT_HOST_ELEMENT_ID: &str = "group-buy";
pub const DEFAULT_QUERY_PARAM: &str = "__groupPurchaseId";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;
pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_url must not be empty")]
    EmptyApiUrl,
    #[error("host_element_id must not be empty")]
    EmptyHostElementId,
    #[error("query_param must not be empty")]
    EmptyQueryParam,
    #[error("toast_duration_ms must be greater than zero")]
    ZeroToastDuration,
    #[error("JSON parsing error: {0}")]
    Json(String),
}

/// Runtime configuration for the widget.
///
/// Every field has a default, so a partial JSON or JS object is merged over
/// [`WidgetConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub api_url: String,
    pub host_element_id: String,
    pub query_param: String,
    pub toast_duration_ms: u32,
    /// Show a toast when a group purchase id is picked up from the URL.
    pub notify_on_join: bool,
    pub default_lang: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: env_api_url().to_string(),
            host_element_id: DEFAULT_HOST_ELEMENT_ID.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            notify_on_join: false,
            default_lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// API base URL baked in at compile time.
#[must_use]
pub fn env_api_url() -> &'static str {
    match option_env!("GROUP_BUY_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL,
    }
}

impl WidgetConfig {
    /// Parse a configuration from JSON, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`WidgetConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns the first empty or zero field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if self.host_element_id.trim().is_empty() {
            return Err(ConfigError::EmptyHostElementId);
        }
        if self.query_param.trim().is_empty() {
            return Err(ConfigError::EmptyQueryParam);
        }
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        Ok(())
    }

    /// Full URL of the group purchase endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.api_url.strip_suffix('/').unwrap_or(&self.api_url);
        format!("{base}{GROUP_PURCHASE_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_targets_group_purchase_path() {
        let config = WidgetConfig {
            api_url: DEFAULT_API_URL.to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:3333/api/v1/group-purchase"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = WidgetConfig {
            api_url: "https://shop.example/".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "https://shop.example/api/v1/group-purchase"
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"hostElementId":"promo","notifyOnJoin":true}"#)
            .expect("valid config");
        assert_eq!(config.host_element_id, "promo");
        assert!(config.notify_on_join);
        assert_eq!(config.query_param, DEFAULT_QUERY_PARAM);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let config = WidgetConfig {
            api_url: "  ".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyApiUrl));

        let config = WidgetConfig {
            toast_duration_ms: 0,
            ..WidgetConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroToastDuration));

        assert!(matches!(
            WidgetConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
