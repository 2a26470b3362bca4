//! Service layer for the recipe book.
//!
//! This module contains the business logic for:
//! - Recipe search and detail lookup (`RecipeClient`)
//! - Saved recipes, ratings and session (`FavoritesStore`)
//! - Mock login (`MockSessionProvider`)

mod favorites;
mod search;
mod session;

pub use favorites::FavoritesStore;
pub use search::{RecipeClient, RecipeSource};
pub use session::{MockSessionProvider, SessionProvider};
