use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The request could not be sent or the body could not be read
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP error! status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body was not a valid page of recipes
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The requested page size is not one of the configured choices
    #[error("Page size {size} is not one of {allowed:?}")]
    InvalidPageSize { size: u32, allowed: Vec<u32> },

    /// The requested page lies outside the known result range
    #[error("Page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u32 },

    /// No card exists at the given index in the current result
    #[error("No recipe card at index {0}")]
    UnknownCard(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl BrowserError {
    /// The single message shown to the user when a load fails.
    pub fn load_failed_message(&self) -> String {
        format!("Failed to load recipes: {}", self)
    }
}
