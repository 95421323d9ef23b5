pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod pagination;
pub mod render;
pub mod state;
pub mod view;

pub use client::{HttpRecipeApi, RecipeApi};
pub use config::BrowserConfig;
pub use error::BrowserError;
pub use model::{FilterForm, PageResult, Recipe, SearchFilters};
pub use pagination::{NavAction, PaginationView};
pub use state::{Endpoint, PageRequest, ViewState};
pub use view::{Action, LoadTicket, LoadedPage, RecipeBrowser, Screen};

/// Create a browser talking to the HTTP API described by `config`.
///
/// Nothing is fetched until [`RecipeBrowser::load`] or an action is performed.
pub fn http_browser(config: BrowserConfig) -> Result<RecipeBrowser<HttpRecipeApi>, BrowserError> {
    config.validate()?;
    let api = HttpRecipeApi::new(config.clone())?;
    Ok(RecipeBrowser::new(api, config))
}

/// Fetch and render the first page of the unfiltered listing as HTML.
pub async fn first_page_html(config: BrowserConfig) -> Result<String, BrowserError> {
    let mut browser = http_browser(config)?;
    browser.load().await;
    Ok(render::html::screen(browser.screen()))
}
