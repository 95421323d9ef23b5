use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for the recipe browser
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Scheme and host of the recipe API, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the listing endpoint; the search endpoint is `<api_path>/search`
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Page size used before the user picks one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Page sizes the user may choose from
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<u32>,
    /// Request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_path: default_api_path(),
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_path() -> String {
    "/api/recipes".to_string()
}

fn default_page_size() -> u32 {
    15
}

fn default_page_sizes() -> Vec<u32> {
    vec![10, 15, 25, 50]
}

fn default_user_agent() -> String {
    concat!("recipe-browser/", env!("CARGO_PKG_VERSION")).to_string()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Configuration pointing at the given API host, defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn is_allowed_page_size(&self, size: u32) -> bool {
        self.page_sizes.contains(&size)
    }

    /// Full URL of the unfiltered listing endpoint
    pub fn list_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_matches('/')
        )
    }

    /// Full URL of the filtered search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/search", self.list_url())
    }

    /// Check the settings that cannot be expressed through serde defaults
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_sizes.is_empty() || self.page_sizes.contains(&0) {
            return Err(ConfigError::Message(
                "page_sizes must be a non-empty list of positive sizes".to_string(),
            ));
        }
        if !self.is_allowed_page_size(self.default_page_size) {
            return Err(ConfigError::Message(format!(
                "default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_sizes
            )));
        }
        Ok(())
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPE_BROWSER__DEFAULT_PAGE_SIZE
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-browser").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("page_sizes")
                .try_parsing(true),
        )
        .build()?;

    let config: BrowserConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
