//! Recipe detail view, keyed by recipe id.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Recipe, RecipeId};
use crate::services::RecipeSource;
use crate::views::Notice;

/// Load state of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Box<Recipe>),
    Failed,
}

/// A detail request that has been started but not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
    pub id: RecipeId,
}

/// Full information for one recipe.
pub struct DetailView {
    source: Arc<dyn RecipeSource>,
    id: RecipeId,
    state: DetailState,
    last_seq: u64,
}

impl DetailView {
    /// Create the view in `Loading` for `id`. Call [`DetailView::mount`] to fetch.
    pub fn new(source: Arc<dyn RecipeSource>, id: RecipeId) -> Self {
        Self {
            source,
            id,
            state: DetailState::Loading,
            last_seq: 0,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.state {
            DetailState::Loaded(recipe) => Some(&**recipe),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        matches!(self.state, DetailState::Failed).then_some(Notice::DetailFailed)
    }

    /// Fetch the recipe for the current id.
    pub async fn mount(&mut self) {
        self.load(self.id).await;
    }

    /// Switch to `id` (or reload it) and fetch.
    pub async fn load(&mut self, id: RecipeId) {
        let ticket = self.begin_load(id);
        let result = self.source.get_detail(ticket.id).await;
        self.finish_load(ticket, result);
    }

    /// Enter `Loading` for `id` and hand out a ticket.
    pub fn begin_load(&mut self, id: RecipeId) -> DetailTicket {
        self.last_seq += 1;
        self.id = id;
        self.state = DetailState::Loading;
        DetailTicket {
            seq: self.last_seq,
            id,
        }
    }

    /// Apply the answer to a ticket. Returns `false` if a newer load superseded it.
    pub fn finish_load(&mut self, ticket: DetailTicket, result: Result<Recipe>) -> bool {
        if ticket.seq != self.last_seq {
            log::debug!("Discarding stale detail for recipe {}", ticket.id);
            return false;
        }

        self.state = match result {
            Ok(recipe) => DetailState::Loaded(Box::new(recipe)),
            Err(error) => {
                log::warn!("Loading recipe {} failed: {}", ticket.id, error);
                DetailState::Failed
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::SearchQuery;
    use async_trait::async_trait;

    /// Knows recipes with even ids only.
    struct EvenSource;

    #[async_trait]
    impl RecipeSource for EvenSource {
        async fn search(&self, _query: &SearchQuery) -> Result<Vec<Recipe>> {
            Ok(Vec::new())
        }

        async fn get_detail(&self, id: RecipeId) -> Result<Recipe> {
            if id % 2 == 0 {
                Ok(Recipe::new(id, format!("Recipe {id}")))
            } else {
                Err(AppError::fetch_failed("HTTP status 404 Not Found"))
            }
        }
    }

    #[tokio::test]
    async fn test_mount_loads_recipe() {
        let mut view = DetailView::new(Arc::new(EvenSource), 4);
        assert_eq!(view.state(), &DetailState::Loading);

        view.mount().await;

        assert_eq!(view.recipe().map(|r| r.title.as_str()), Some("Recipe 4"));
        assert!(view.notice().is_none());
    }

    #[tokio::test]
    async fn test_failure_and_recovery_on_id_change() {
        let mut view = DetailView::new(Arc::new(EvenSource), 3);
        view.mount().await;
        assert_eq!(view.notice(), Some(Notice::DetailFailed));

        view.load(8).await;
        assert_eq!(view.id(), 8);
        assert_eq!(view.recipe().map(|r| r.id), Some(8));
    }

    #[test]
    fn test_answer_for_previous_id_is_discarded() {
        let mut view = DetailView::new(Arc::new(EvenSource), 2);
        let old = view.begin_load(2);
        let new = view.begin_load(6);

        assert!(!view.finish_load(old, Ok(Recipe::new(2, "old"))));
        assert_eq!(view.state(), &DetailState::Loading);

        assert!(view.finish_load(new, Ok(Recipe::new(6, "new"))));
        assert_eq!(view.recipe().map(|r| r.id), Some(6));
    }
}
