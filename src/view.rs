use crate::client::RecipeApi;
use crate::config::BrowserConfig;
use crate::error::BrowserError;
use crate::model::{FilterForm, PageResult, Recipe};
use crate::pagination::{NavAction, PaginationView};
use crate::state::{PageRequest, ViewState};
use log::{debug, info, warn};

/// A result page together with the pager derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    pub result: PageResult,
    pub pagination: PaginationView,
}

/// What the view currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub loading: bool,
    /// User-facing message of the last failed load
    pub error: Option<String>,
    pub results: Option<LoadedPage>,
    /// Record shown in the detail modal
    pub detail: Option<Recipe>,
}

/// A request that has been started but not yet applied.
///
/// Only the ticket with the latest sequence number is applied; older ones
/// are discarded when they finish.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub seq: u64,
    pub request: PageRequest,
    state: ViewState,
}

/// User interactions with the view
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Search(FilterForm),
    Reset,
    ChangePageSize(u32),
    Navigate(NavAction),
}

/// The recipe browser: state, the latest result, and the API it loads from.
pub struct RecipeBrowser<A: RecipeApi> {
    api: A,
    config: BrowserConfig,
    state: ViewState,
    screen: Screen,
    /// Pager of the last successful load, used to resolve navigation
    pagination: Option<PaginationView>,
    latest_seq: u64,
}

impl<A: RecipeApi> RecipeBrowser<A> {
    pub fn new(api: A, config: BrowserConfig) -> Self {
        let state = ViewState::new(config.default_page_size);
        Self {
            api,
            config,
            state,
            screen: Screen::default(),
            pagination: None,
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn pagination(&self) -> Option<&PaginationView> {
        self.pagination.as_ref()
    }

    /// Apply an action to the state.
    ///
    /// Returns the ticket for the load it triggers, or `None` when the action
    /// leads nowhere (a disabled pager control). The state is always replaced
    /// before the ticket is handed out.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<LoadTicket>, BrowserError> {
        let next = match action {
            Action::Search(form) => {
                let filters = form.normalize();
                debug!("Searching with {:?}", filters);
                self.state.with_search(filters)
            }
            Action::Reset => self.state.cleared(),
            Action::ChangePageSize(size) => {
                if !self.config.is_allowed_page_size(size) {
                    return Err(BrowserError::InvalidPageSize {
                        size,
                        allowed: self.config.page_sizes.clone(),
                    });
                }
                self.state.with_limit(size)
            }
            Action::Navigate(nav) => match self.navigation_target(nav)? {
                Some(page) => self.state.with_page(page),
                None => {
                    debug!("Ignoring {:?}: control is disabled", nav);
                    return Ok(None);
                }
            },
        };

        self.state = next;
        Ok(Some(self.begin_load()))
    }

    fn navigation_target(&self, nav: NavAction) -> Result<Option<u32>, BrowserError> {
        let Some(pager) = self.pagination.as_ref() else {
            return Ok(None);
        };
        match (nav, pager.target(nav)) {
            (NavAction::To(page), None) => Err(BrowserError::PageOutOfRange {
                page,
                total_pages: pager.total_pages,
            }),
            (_, target) => Ok(target),
        }
    }

    /// Enter the loading state and issue a ticket for the current state.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        // the pager belongs to the previous state until this load lands
        self.pagination = None;
        self.screen.loading = true;
        self.screen.results = None;
        self.screen.error = None;

        let request = self.state.request();
        debug!("Load #{} -> {:?}", self.latest_seq, request);
        LoadTicket {
            seq: self.latest_seq,
            request,
            state: self.state.clone(),
        }
    }

    /// Apply the outcome of a ticket.
    ///
    /// Returns `false` when a newer ticket has been issued since; the outcome
    /// is then dropped without touching the screen.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<PageResult, BrowserError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(
                "Discarding stale response #{} (latest is #{})",
                ticket.seq, self.latest_seq
            );
            return false;
        }

        self.screen.loading = false;
        match outcome {
            Ok(result) => {
                let pagination =
                    PaginationView::new(&result, ticket.state.page(), ticket.state.limit());
                info!(
                    "{} - {}",
                    pagination.results_label(),
                    pagination.page_label()
                );
                self.pagination = Some(pagination);
                self.screen.results = Some(LoadedPage { result, pagination });
            }
            Err(e) => {
                let message = e.load_failed_message();
                warn!("{}", message);
                self.screen.error = Some(message);
                self.screen.results = None;
            }
        }
        true
    }

    /// Load the current state and apply the outcome.
    pub async fn load(&mut self) -> bool {
        let ticket = self.begin_load();
        self.fetch_and_finish(ticket).await
    }

    /// Dispatch an action and, if it triggers a load, wait for it.
    ///
    /// Returns whether a load was applied.
    pub async fn perform(&mut self, action: Action) -> Result<bool, BrowserError> {
        match self.dispatch(action)? {
            Some(ticket) => Ok(self.fetch_and_finish(ticket).await),
            None => Ok(false),
        }
    }

    async fn fetch_and_finish(&mut self, ticket: LoadTicket) -> bool {
        let outcome = self.api.fetch_page(&ticket.request).await;
        self.finish_load(ticket, outcome)
    }

    /// Form contents after a reset, for hosts that mirror the inputs.
    pub fn cleared_form() -> FilterForm {
        FilterForm::default()
    }

    /// Open the detail modal for the card at `index` of the current result.
    pub fn open_detail(&mut self, index: usize) -> Result<&Recipe, BrowserError> {
        let recipe = self
            .screen
            .results
            .as_ref()
            .and_then(|loaded| loaded.result.data.get(index))
            .cloned()
            .ok_or(BrowserError::UnknownCard(index))?;

        Ok(&*self.screen.detail.insert(recipe))
    }

    pub fn close_detail(&mut self) {
        self.screen.detail = None;
    }
}
