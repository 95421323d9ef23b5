use crate::config::BrowserConfig;
use crate::error::BrowserError;
use crate::model::PageResult;
use crate::state::PageRequest;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Source of recipe pages
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch one page of recipes.
    ///
    /// Non-success statuses, transport failures and undecodable bodies all
    /// come back as errors.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, BrowserError>;
}

/// [`RecipeApi`] backed by the HTTP recipe service
pub struct HttpRecipeApi {
    client: Client,
    config: BrowserConfig,
}

impl HttpRecipeApi {
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, BrowserError> {
        let url = request.url(&self.config);
        debug!("GET {} {:?}", url, request.params);

        let response = self
            .client
            .get(&url)
            .query(&request.params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::HttpStatus(status));
        }

        let body = response.text().await?;
        let page: PageResult = serde_json::from_str(&body)?;
        debug!(
            "Received {} of {} recipes",
            page.data.len(),
            page.total
        );
        Ok(page)
    }
}
