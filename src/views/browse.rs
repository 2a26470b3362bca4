//! Search/browse view.
//!
//! ```text
//! Idle ──mount──▶ Loading ──▶ Success | QuotaExceeded | Error
//!                    ▲                       │
//!                    └── search / filter / clear ─┘
//! ```
//!
//! Every request is issued with a [`SearchTicket`]; only the answer to the
//! most recent ticket is applied.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    Messages, Rating, Ratings, Recipe, RecipeId, SearchFilters, SearchQuery, User,
};
use crate::services::{FavoritesStore, RecipeSource, SessionProvider};
use crate::views::{Notice, welcome};

/// Load state of the recipe listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    Idle,
    Loading,
    Success,
    QuotaExceeded,
    Error,
}

impl BrowseState {
    /// Inline notice for this state. Quota and generic failures never share one.
    pub fn notice(self) -> Option<Notice> {
        match self {
            BrowseState::QuotaExceeded => Some(Notice::QuotaExceeded),
            BrowseState::Error => Some(Notice::FetchFailed),
            _ => None,
        }
    }
}

/// A search request that has been started but not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    pub query: SearchQuery,
}

/// The searchable, filterable recipe listing with save and rate actions.
pub struct BrowseView {
    source: Arc<dyn RecipeSource>,
    store: FavoritesStore,
    sessions: Arc<dyn SessionProvider>,
    state: BrowseState,
    search_term: String,
    filters: SearchFilters,
    recipes: Vec<Recipe>,
    saved: HashSet<RecipeId>,
    ratings: Ratings,
    user: Option<User>,
    alert: Option<Notice>,
    last_seq: u64,
}

impl BrowseView {
    /// Create the view, reading session, favorites and ratings once.
    pub fn new(
        source: Arc<dyn RecipeSource>,
        store: FavoritesStore,
        sessions: Arc<dyn SessionProvider>,
    ) -> Result<Self> {
        let user = store.get_session()?;
        let saved = store.get_favorites()?.iter().map(|r| r.id).collect();
        let ratings = store.get_ratings()?;

        Ok(Self {
            source,
            store,
            sessions,
            state: BrowseState::Idle,
            search_term: String::new(),
            filters: SearchFilters::default(),
            recipes: Vec::new(),
            saved,
            ratings,
            user,
            alert: None,
            last_seq: 0,
        })
    }

    /// Start from the given term and filters instead of the empty listing.
    ///
    /// Takes effect at [`BrowseView::mount`]; no request is made here.
    pub fn with_query(mut self, term: impl Into<String>, filters: SearchFilters) -> Self {
        self.search_term = term.into();
        self.filters = filters;
        self
    }

    /// Run the initial search.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    // --- Accessors ---

    pub fn state(&self) -> BrowseState {
        self.state
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_saved(&self, id: RecipeId) -> bool {
        self.saved.contains(&id)
    }

    pub fn rating(&self, id: RecipeId) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    /// Notice describing the listing itself, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            BrowseState::Success if self.recipes.is_empty() => Some(Notice::NoResults),
            state => state.notice(),
        }
    }

    /// Message from the last rejected action, if any.
    pub fn alert(&self) -> Option<&Notice> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn welcome(&self, messages: &Messages) -> Option<String> {
        self.user.as_ref().map(|user| welcome(user, messages))
    }

    // --- Searching ---

    /// Enter `Loading` and hand out a ticket for the current term and filters.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_seq += 1;
        self.state = BrowseState::Loading;
        SearchTicket {
            seq: self.last_seq,
            query: SearchQuery::new(self.search_term.clone(), self.filters.clone()),
        }
    }

    /// Apply the answer to a ticket. Returns `false` if a newer search superseded it.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<Vec<Recipe>>) -> bool {
        if ticket.seq != self.last_seq {
            log::debug!(
                "Discarding stale results for '{}' (request {}, latest {})",
                ticket.query.term,
                ticket.seq,
                self.last_seq
            );
            return false;
        }

        match result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.state = BrowseState::Success;
            }
            Err(error) if error.is_quota_exceeded() => {
                self.recipes.clear();
                self.state = BrowseState::QuotaExceeded;
            }
            Err(error) => {
                log::warn!("Recipe search failed: {}", error);
                self.state = BrowseState::Error;
            }
        }
        true
    }

    /// Search with the current term and filters.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_search();
        let result = self.source.search(&ticket.query).await;
        self.finish_search(ticket, result);
    }

    /// Update the search box without searching.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Submit a search for `term`.
    pub async fn submit_search(&mut self, term: impl Into<String>) {
        self.set_search_term(term);
        self.refresh().await;
    }

    /// Change the diet filter; searches again only if the value changed.
    /// The typed term is kept in the new search rather than reset to empty.
    pub async fn set_diet(&mut self, diet: Option<&str>) {
        let filters = SearchFilters::new(diet, self.filters.cuisine.as_deref());
        self.apply_filters(filters).await;
    }

    /// Change the cuisine filter; searches again only if the value changed.
    /// The typed term is kept in the new search rather than reset to empty.
    pub async fn set_cuisine(&mut self, cuisine: Option<&str>) {
        let filters = SearchFilters::new(self.filters.diet.as_deref(), cuisine);
        self.apply_filters(filters).await;
    }

    async fn apply_filters(&mut self, filters: SearchFilters) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.refresh().await;
    }

    /// Reset diet, cuisine and term, then run an unfiltered search.
    pub async fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
        self.search_term.clear();
        self.refresh().await;
    }

    // --- Actions ---

    /// Save a listed recipe to favorites.
    pub fn save(&mut self, id: RecipeId) -> bool {
        let Some(recipe) = self.recipes.iter().find(|r| r.id == id) else {
            log::warn!("Recipe {} is not in the current listing", id);
            return false;
        };

        match self.store.add_favorite(recipe) {
            Ok(_) => {
                self.saved.insert(id);
                true
            }
            Err(error) => {
                self.alert = Some(Notice::from_store_error(error, Notice::LoginToSave));
                false
            }
        }
    }

    /// Rate a recipe from 1 to 5 stars.
    pub fn rate(&mut self, id: RecipeId, stars: u8) -> bool {
        match self.store.set_rating(id, stars) {
            Ok(rating) => {
                self.ratings.insert(id, rating);
                true
            }
            Err(error) => {
                self.alert = Some(Notice::from_store_error(error, Notice::LoginToRate));
                false
            }
        }
    }

    /// Sign in through the session provider and persist the session.
    pub fn login(&mut self) -> Result<User> {
        let user = self.sessions.sign_in()?;
        self.store.set_session(&user)?;
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear_session()?;
        self.user = None;
        Ok(())
    }
}
