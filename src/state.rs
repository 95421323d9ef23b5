use crate::config::BrowserConfig;
use crate::model::SearchFilters;

/// Which API endpoint a request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Unfiltered listing
    List,
    /// Filtered search
    Search,
}

/// A fully resolved request for one page of recipes
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl PageRequest {
    pub fn url(&self, config: &BrowserConfig) -> String {
        match self.endpoint {
            Endpoint::List => config.list_url(),
            Endpoint::Search => config.search_url(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Page, page size and filters of the view.
///
/// Transitions return a new value; nothing mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    page: u32,
    limit: u32,
    filters: SearchFilters,
}

impl ViewState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            filters: SearchFilters::default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Replace the filters wholesale and go back to the first page
    pub fn with_search(&self, filters: SearchFilters) -> Self {
        Self {
            page: 1,
            limit: self.limit,
            filters,
        }
    }

    /// Drop every filter and go back to the first page
    pub fn cleared(&self) -> Self {
        self.with_search(SearchFilters::default())
    }

    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            filters: self.filters.clone(),
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            limit: self.limit,
            filters: self.filters.clone(),
        }
    }

    /// The request this state asks for.
    ///
    /// Page and limit are always sent; filter parameters only when a filter
    /// is set, in which case the search endpoint is used.
    pub fn request(&self) -> PageRequest {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];

        let endpoint = if self.filters.is_empty() {
            Endpoint::List
        } else {
            params.extend(self.filters.query_pairs());
            Endpoint::Search
        };

        PageRequest { endpoint, params }
    }
}
