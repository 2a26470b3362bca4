//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::User;

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "RECIPE_API_URL";

/// Environment variable overriding `api.api_key`.
pub const ENV_API_KEY: &str = "RECIPE_API_KEY";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Mock login identity
    #[serde(default)]
    pub session: SessionConfig,

    /// User-facing notice texts
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Apply `RECIPE_API_URL` / `RECIPE_API_KEY` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        );
    }

    fn apply_overrides(&mut self, base_url: Option<String>, api_key: Option<String>) {
        if let Some(url) = base_url.filter(|v| !v.trim().is_empty()) {
            log::debug!("API base URL taken from {}", ENV_API_URL);
            self.api.base_url = url;
        }
        if let Some(key) = api_key.filter(|v| !v.trim().is_empty()) {
            log::debug!("API key taken from {}", ENV_API_KEY);
            self.api.api_key = key;
        }
    }

    /// Validate configuration values. Only presence is checked.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        Url::parse(&self.api.base_url)?;
        if self.api.api_key.trim().is_empty() {
            return Err(AppError::validation(format!(
                "api.api_key is empty (set it in config.toml or {})",
                ENV_API_KEY
            )));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.session.name.trim().is_empty() {
            return Err(AppError::validation("session.name is empty"));
        }
        Ok(())
    }
}

/// Recipe API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// API key sent as the `apiKey` query parameter
    #[serde(default)]
    pub api_key: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            api_key: String::new(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Identity handed out by the mock login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::user_name")]
    pub name: String,
    #[serde(default = "defaults::user_email")]
    pub email: String,
}

impl SessionConfig {
    pub fn user(&self) -> User {
        User::new(&self.name, &self.email)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: defaults::user_name(),
            email: defaults::user_email(),
        }
    }
}

/// Notice strings shown to the user.
///
/// `{name}` in `welcome` is replaced with the session user's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "defaults::msg_fetch_failed")]
    pub fetch_failed: String,
    #[serde(default = "defaults::msg_quota_exceeded")]
    pub quota_exceeded: String,
    #[serde(default = "defaults::msg_detail_failed")]
    pub detail_failed: String,
    #[serde(default = "defaults::msg_login_to_save")]
    pub login_to_save: String,
    #[serde(default = "defaults::msg_login_to_rate")]
    pub login_to_rate: String,
    #[serde(default = "defaults::msg_login_to_remove")]
    pub login_to_remove: String,
    #[serde(default = "defaults::msg_login_to_view")]
    pub login_to_view_saved: String,
    #[serde(default = "defaults::msg_no_saved")]
    pub no_saved_recipes: String,
    #[serde(default = "defaults::msg_no_results")]
    pub no_results: String,
    #[serde(default = "defaults::msg_welcome")]
    pub welcome: String,
    #[serde(default = "defaults::msg_storage_failed")]
    pub storage_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            fetch_failed: defaults::msg_fetch_failed(),
            quota_exceeded: defaults::msg_quota_exceeded(),
            detail_failed: defaults::msg_detail_failed(),
            login_to_save: defaults::msg_login_to_save(),
            login_to_rate: defaults::msg_login_to_rate(),
            login_to_remove: defaults::msg_login_to_remove(),
            login_to_view_saved: defaults::msg_login_to_view(),
            no_saved_recipes: defaults::msg_no_saved(),
            no_results: defaults::msg_no_results(),
            welcome: defaults::msg_welcome(),
            storage_failed: defaults::msg_storage_failed(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "https://api.spoonacular.com/recipes".into()
    }
    pub fn user_agent() -> String {
        concat!("recipe-book/", env!("CARGO_PKG_VERSION")).into()
    }

    // Mock login defaults
    pub fn user_name() -> String {
        "User".into()
    }
    pub fn user_email() -> String {
        "user@example.com".into()
    }

    // Message defaults
    pub fn msg_fetch_failed() -> String {
        "Failed to fetch recipes. Please try again later.".into()
    }
    pub fn msg_quota_exceeded() -> String {
        "Daily API limit reached. Please try again later.".into()
    }
    pub fn msg_detail_failed() -> String {
        "Failed to load recipe details.".into()
    }
    pub fn msg_login_to_save() -> String {
        "Please login to save recipes.".into()
    }
    pub fn msg_login_to_rate() -> String {
        "Please login to rate recipes.".into()
    }
    pub fn msg_login_to_remove() -> String {
        "Please login to remove recipes.".into()
    }
    pub fn msg_login_to_view() -> String {
        "Please login to view saved recipes.".into()
    }
    pub fn msg_no_saved() -> String {
        "No saved recipes yet.".into()
    }
    pub fn msg_no_results() -> String {
        "No recipes found.".into()
    }
    pub fn msg_welcome() -> String {
        "Welcome, {name}".into()
    }
    pub fn msg_storage_failed() -> String {
        "Could not update saved data: {error}".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.api.api_key = "test-key".to_string();
        config
    }

    #[test]
    fn validate_requires_api_key() {
        assert!(Config::default().validate().is_err());
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = configured();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = configured();
        config.api.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_overrides_ignore_blank_values() {
        let mut config = configured();
        config.apply_overrides(Some("http://localhost:9000".into()), Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.api_key, "test-key");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            api_key = "abc"

            [messages]
            no_saved_recipes = "Nothing here."
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.spoonacular.com/recipes");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.session.user(), User::new("User", "user@example.com"));
        assert_eq!(config.messages.no_saved_recipes, "Nothing here.");
        assert_eq!(config.messages.login_to_save, "Please login to save recipes.");
    }
}
