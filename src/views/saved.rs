//! Saved-recipes view.
//!
//! Favorites are read once when the view is created. Changes made through
//! other views show up only after the view is created again.

use crate::error::Result;
use crate::models::{Messages, Recipe, RecipeId, User};
use crate::services::FavoritesStore;
use crate::views::{Notice, welcome};

pub struct SavedView {
    store: FavoritesStore,
    saved: Vec<Recipe>,
    user: Option<User>,
    alert: Option<Notice>,
}

impl SavedView {
    /// Read the session and the saved recipes.
    pub fn mount(store: FavoritesStore) -> Result<Self> {
        let user = store.get_session()?;
        let saved = store.get_favorites()?;
        log::debug!("Saved view mounted with {} recipe(s)", saved.len());

        Ok(Self {
            store,
            saved,
            user,
            alert: None,
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.saved
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Banner above the list: welcome line or login hint.
    pub fn banner(&self, messages: &Messages) -> String {
        match &self.user {
            Some(user) => welcome(user, messages),
            None => Notice::LoginToViewSaved.text(messages),
        }
    }

    /// Empty-state notice when nothing is saved.
    pub fn notice(&self) -> Option<Notice> {
        self.saved.is_empty().then_some(Notice::NoSavedRecipes)
    }

    pub fn alert(&self) -> Option<&Notice> {
        self.alert.as_ref()
    }

    /// Remove a recipe from favorites and from this view's list.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        match self.store.remove_favorite(id) {
            Ok(_) => {
                self.saved.retain(|r| r.id != id);
                self.alert = None;
                true
            }
            Err(error) => {
                self.alert = Some(Notice::from_store_error(error, Notice::LoginToRemove));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn store() -> FavoritesStore {
        FavoritesStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_empty_state() {
        let view = SavedView::mount(store()).unwrap();
        let messages = Messages::default();

        assert_eq!(view.notice(), Some(Notice::NoSavedRecipes));
        assert_eq!(view.banner(&messages), "Please login to view saved recipes.");
    }

    #[test]
    fn test_remove_requires_login() {
        let store = store();
        store.set_session(&User::new("User", "user@example.com")).unwrap();
        store.add_favorite(&Recipe::new(5, "Soup")).unwrap();
        store.clear_session().unwrap();

        let mut view = SavedView::mount(store.clone()).unwrap();
        assert!(!view.remove(5));
        assert_eq!(view.alert(), Some(&Notice::LoginToRemove));
        assert_eq!(view.recipes().len(), 1);
        assert_eq!(store.get_favorites().unwrap().len(), 1);
    }

    #[test]
    fn test_does_not_see_later_changes_until_remounted() {
        let store = store();
        store.set_session(&User::new("User", "user@example.com")).unwrap();

        let view = SavedView::mount(store.clone()).unwrap();
        store.add_favorite(&Recipe::new(1, "Late")).unwrap();
        assert!(view.recipes().is_empty());

        let remounted = SavedView::mount(store).unwrap();
        assert_eq!(remounted.recipes().len(), 1);
    }
}
