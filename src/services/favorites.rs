// src/services/favorites.rs

//! Favorites, ratings and session records on top of a [`KeyValueStore`].
//!
//! Every mutation reads the current record, changes it and writes the whole
//! record back before returning. Getters treat an unreadable record as empty;
//! mutations refuse to overwrite it and fail with [`AppError::Json`]. Favorites and ratings can only change while
//! a session exists; otherwise the call fails with
//! [`AppError::Unauthenticated`] and nothing is written.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::models::{Rating, Ratings, Recipe, RecipeId, User};
use crate::storage::{FAVORITES_KEY, KeyValueStore, RATINGS_KEY, USER_KEY};

/// Shared user state: session, saved recipes and ratings.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Read a JSON record. Missing or unreadable values fall back to the default.
    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' record: {}", key, e);
                Ok(T::default())
            }
        }
    }

    /// Read a JSON record that is about to be rewritten. Unlike [`Self::read`],
    /// an unreadable value is an error so it is never replaced wholesale.
    fn read_for_update<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.storage.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                log::error!("Refusing to rewrite unreadable '{}' record: {}", key, e);
                AppError::Json(e)
            }),
            None => Ok(T::default()),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)
    }

    /// Fail unless someone is logged in.
    fn require_session(&self, action: &str) -> Result<User> {
        self.get_session()?.ok_or_else(|| {
            log::info!("Rejected '{}': no active session", action);
            AppError::unauthenticated(action)
        })
    }

    // --- Session ---

    pub fn get_session(&self) -> Result<Option<User>> {
        self.read(USER_KEY)
    }

    pub fn set_session(&self, user: &User) -> Result<()> {
        self.write(USER_KEY, user)?;
        log::info!("Session started for {}", user.email);
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        self.storage.remove(USER_KEY)?;
        log::info!("Session cleared");
        Ok(())
    }

    // --- Favorites ---

    /// Saved recipes in the order they were saved.
    pub fn get_favorites(&self) -> Result<Vec<Recipe>> {
        self.read(FAVORITES_KEY)
    }

    /// Save a snapshot of `recipe`. Returns `false` if it was already saved.
    pub fn add_favorite(&self, recipe: &Recipe) -> Result<bool> {
        self.require_session("save recipes")?;

        let mut favorites: Vec<Recipe> = self.read_for_update(FAVORITES_KEY)?;
        if favorites.iter().any(|r| r.id == recipe.id) {
            log::debug!("Recipe {} already saved", recipe.id);
            return Ok(false);
        }

        favorites.push(recipe.clone());
        self.write(FAVORITES_KEY, &favorites)?;
        log::info!("Saved recipe {} ({})", recipe.id, recipe.title);
        Ok(true)
    }

    /// Remove a saved recipe. Returns `false` if it was not saved.
    pub fn remove_favorite(&self, id: RecipeId) -> Result<bool> {
        self.require_session("remove recipes")?;

        let mut favorites: Vec<Recipe> = self.read_for_update(FAVORITES_KEY)?;
        let before = favorites.len();
        favorites.retain(|r| r.id != id);
        let removed = favorites.len() != before;

        self.write(FAVORITES_KEY, &favorites)?;
        if removed {
            log::info!("Removed recipe {} from favorites", id);
        }
        Ok(removed)
    }

    // --- Ratings ---

    pub fn get_ratings(&self) -> Result<Ratings> {
        self.read(RATINGS_KEY)
    }

    /// Set the star rating for a recipe, replacing any previous one.
    pub fn set_rating(&self, id: RecipeId, stars: u8) -> Result<Rating> {
        self.require_session("rate recipes")?;
        let rating = Rating::new(stars)?;

        let mut ratings: Ratings = self.read_for_update(RATINGS_KEY)?;
        ratings.insert(id, rating);
        self.write(RATINGS_KEY, &ratings)?;
        log::info!("Rated recipe {} {}", id, rating);
        Ok(rating)
    }
}
