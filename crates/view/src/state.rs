//! Search view state machine.
//!
//! The view owns the input text, the busy and searched flags, the current
//! result set and the meal shown in detail. It never performs I/O itself:
//! [`SearchView::submit`] hands out a [`SearchTicket`] describing the request
//! to issue, and the outcome is fed back through [`SearchView::complete`].

use mealsearch_client::{MealSearch, SearchError};
use mealsearch_core::{DEFAULT_TOP_K, Meal, MealSearchResponse, is_blank_query};

/// Identifier of an issued search. Increases with every accepted submit.
pub type TicketId = u64;

/// A search the view has started and is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: TicketId,
    pub query: String,
    pub top_k: u32,
}

/// Key presses the input box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}

/// Coarse state derived from the view's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results,
}

/// What [`SearchView::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the result set.
    Applied { results: usize },
    /// The request failed; the result set is now empty.
    Failed,
    /// A newer search was submitted since this ticket; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct SearchView {
    query: String,
    top_k: u32,
    is_searching: bool,
    has_searched: bool,
    results: Vec<Meal>,
    total: usize,
    selected: Option<Meal>,
    latest_ticket: TicketId,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl SearchView {
    /// Creates an idle view that requests `top_k` results per search.
    #[must_use]
    pub fn new(top_k: u32) -> Self {
        Self {
            query: String::new(),
            top_k: top_k.max(1),
            is_searching: false,
            has_searched: false,
            results: Vec::new(),
            total: 0,
            selected: None,
            latest_ticket: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results(&self) -> &[Meal] {
        &self.results
    }

    /// Match count reported with the last applied response.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn selected(&self) -> Option<&Meal> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.is_searching {
            SearchPhase::Searching
        } else if self.has_searched {
            SearchPhase::Results
        } else {
            SearchPhase::Idle
        }
    }

    /// Binds the input text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Starts a search for the current query.
    ///
    /// Returns `None` and leaves the state untouched when the query is blank.
    /// The previous results stay visible until the new response arrives.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        if is_blank_query(&self.query) {
            tracing::debug!("ignoring blank query");
            return None;
        }

        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.is_searching = true;
        self.has_searched = true;

        let ticket = SearchTicket {
            id: self.latest_ticket,
            query: self.query.clone(),
            top_k: self.top_k,
        };
        tracing::debug!(id = ticket.id, query = %ticket.query, top_k = ticket.top_k, "search submitted");
        Some(ticket)
    }

    /// Feeds a key press to the input box. Enter submits.
    pub fn on_key(&mut self, key: Key) -> Option<SearchTicket> {
        match key {
            Key::Enter => self.submit(),
            Key::Backspace => {
                self.query.pop();
                None
            },
            Key::Char(c) => {
                self.query.push(c);
                None
            },
        }
    }

    /// Applies the outcome of the search identified by `id`.
    ///
    /// Only the most recently submitted search may change state; outcomes of
    /// older tickets are dropped. A failure is logged and shows as an empty
    /// result list.
    pub fn complete(
        &mut self,
        id: TicketId,
        outcome: Result<MealSearchResponse, SearchError>,
    ) -> Completion {
        if id != self.latest_ticket || !self.is_searching {
            tracing::debug!(id, latest = self.latest_ticket, "dropping stale search response");
            return Completion::Stale;
        }

        self.is_searching = false;
        match outcome {
            Ok(response) => {
                let count = response.results.len();
                self.results = response.results;
                self.total = response.total;
                Completion::Applied { results: count }
            },
            Err(e) => {
                tracing::error!("Meal search failed: {}", e);
                self.results.clear();
                self.total = 0;
                Completion::Failed
            },
        }
    }

    /// Shows the result at `index` in detail. Returns `false` if there is none.
    pub fn select(&mut self, index: usize) -> bool {
        match self.results.get(index) {
            Some(meal) => {
                self.selected = Some(meal.clone());
                true
            },
            None => false,
        }
    }

    /// Shows `meal` in detail.
    pub fn select_meal(&mut self, meal: Meal) {
        self.selected = Some(meal);
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// Submits the current query and awaits the response from `search`.
    ///
    /// Returns `None` when the query is blank and no request was made.
    pub async fn search_with(&mut self, search: &dyn MealSearch) -> Option<Completion> {
        let ticket = self.submit()?;
        let outcome = search.search_meals(&ticket.query, ticket.top_k).await;
        Some(self.complete(ticket.id, outcome))
    }
}
