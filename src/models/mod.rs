// src/models/mod.rs

//! Domain models for the recipe book.
//!
//! Remote data (recipes), locally persisted data (users, ratings) and the
//! configuration the application is started with.

pub mod config;
mod rating;
mod recipe;
mod search;
mod session;

// Re-export all public types
pub use config::{ApiConfig, Config, Messages, SessionConfig};
pub use rating::{Rating, Ratings};
pub use recipe::{Ingredient, Recipe, RecipeId, SearchResponse};
pub use search::{KNOWN_CUISINES, KNOWN_DIETS, SearchFilters, SearchQuery};
pub use session::User;
