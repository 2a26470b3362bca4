// src/app.rs

//! Wiring: builds the shared services once and mounts a fresh view per
//! navigation.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Config;
use crate::routes::Route;
use crate::services::{FavoritesStore, MockSessionProvider, RecipeClient, RecipeSource, SessionProvider};
use crate::storage::KeyValueStore;
use crate::views::{BrowseView, DetailView, SavedView};

/// A mounted page.
pub enum Page {
    Browse(BrowseView),
    Detail(DetailView),
    Saved(SavedView),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Browse(_) => Route::Home,
            Page::Detail(view) => Route::Recipe(view.id()),
            Page::Saved(_) => Route::Saved,
        }
    }
}

/// Shared dependencies of all views.
#[derive(Clone)]
pub struct App {
    source: Arc<dyn RecipeSource>,
    store: FavoritesStore,
    sessions: Arc<dyn SessionProvider>,
}

impl App {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        storage: Arc<dyn KeyValueStore>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            source,
            store: FavoritesStore::new(storage),
            sessions,
        }
    }

    /// Build the production wiring: HTTP client and mock login from `config`.
    pub fn from_config(config: &Config, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = RecipeClient::new(&config.api)?;
        log::debug!("Recipe API at {}", client.base_url());
        let sessions = MockSessionProvider::from_config(&config.session);
        Ok(Self::new(Arc::new(client), storage, Arc::new(sessions)))
    }

    pub fn store(&self) -> &FavoritesStore {
        &self.store
    }

    pub fn source(&self) -> &Arc<dyn RecipeSource> {
        &self.source
    }

    pub fn sessions(&self) -> &Arc<dyn SessionProvider> {
        &self.sessions
    }

    /// Mount the page for `route`, running its initial load.
    pub async fn open(&self, route: Route) -> Result<Page> {
        log::debug!("Navigating to {}", route);
        let page = match route {
            Route::Home => {
                let mut view = BrowseView::new(
                    Arc::clone(&self.source),
                    self.store.clone(),
                    Arc::clone(&self.sessions),
                )?;
                view.mount().await;
                Page::Browse(view)
            }
            Route::Recipe(id) => {
                let mut view = DetailView::new(Arc::clone(&self.source), id);
                view.mount().await;
                Page::Detail(view)
            }
            Route::Saved => Page::Saved(SavedView::mount(self.store.clone())?),
        };
        Ok(page)
    }
}
