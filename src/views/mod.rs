//! View state machines.
//!
//! Each view reads what it needs from the [`FavoritesStore`] when it is
//! created and keeps its own copy afterwards. Views never see each other's
//! changes until they are created again.
//!
//! [`FavoritesStore`]: crate::services::FavoritesStore

mod browse;
mod detail;
mod saved;

pub use browse::{BrowseState, BrowseView, SearchTicket};
pub use detail::{DetailState, DetailTicket, DetailView};
pub use saved::SavedView;

use crate::error::AppError;
use crate::models::{Messages, User};

/// A user-facing message produced by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    QuotaExceeded,
    FetchFailed,
    DetailFailed,
    LoginToSave,
    LoginToRate,
    LoginToRemove,
    LoginToViewSaved,
    NoSavedRecipes,
    NoResults,
    InvalidRating(u8),
    StorageFailed(String),
}

impl Notice {
    /// Resolve the notice to display text.
    pub fn text(&self, messages: &Messages) -> String {
        match self {
            Notice::QuotaExceeded => messages.quota_exceeded.clone(),
            Notice::FetchFailed => messages.fetch_failed.clone(),
            Notice::DetailFailed => messages.detail_failed.clone(),
            Notice::LoginToSave => messages.login_to_save.clone(),
            Notice::LoginToRate => messages.login_to_rate.clone(),
            Notice::LoginToRemove => messages.login_to_remove.clone(),
            Notice::LoginToViewSaved => messages.login_to_view_saved.clone(),
            Notice::NoSavedRecipes => messages.no_saved_recipes.clone(),
            Notice::NoResults => messages.no_results.clone(),
            Notice::InvalidRating(stars) => AppError::InvalidRating(*stars).to_string(),
            Notice::StorageFailed(error) => messages.storage_failed.replace("{error}", error),
        }
    }

    /// Notice for a failed store mutation; `login` is used when no one is logged in.
    fn from_store_error(error: AppError, login: Notice) -> Self {
        match error {
            AppError::Unauthenticated { .. } => login,
            AppError::InvalidRating(stars) => Notice::InvalidRating(stars),
            other => {
                log::error!("Store update failed: {}", other);
                Notice::StorageFailed(other.to_string())
            }
        }
    }
}

/// "Welcome, {name}" line for a logged-in user.
pub fn welcome(user: &User, messages: &Messages) -> String {
    messages.welcome.replace("{name}", &user.name)
}
