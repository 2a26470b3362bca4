// src/routes.rs

//! Navigable pages and their paths.
//!
//! - `/` recipe search
//! - `/recipe/:id` one recipe
//! - `/SavedRecipe` saved recipes
//!
//! Paths match case-insensitively and tolerate a trailing slash.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::RecipeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Recipe(RecipeId),
    Saved,
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let segments: Vec<&str> = normalized.split('/').skip(1).collect();

        if !trimmed.starts_with('/') {
            return Err(AppError::Route(path.to_string()));
        }

        match segments.as_slice() {
            [] => Ok(Route::Home),
            [page] if page.eq_ignore_ascii_case("SavedRecipe") => Ok(Route::Saved),
            [page, id] if page.eq_ignore_ascii_case("recipe") => id
                .parse()
                .map(Route::Recipe)
                .map_err(|_| AppError::Route(path.to_string())),
            _ => Err(AppError::Route(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Recipe(id) => write!(f, "/recipe/{id}"),
            Route::Saved => write!(f, "/SavedRecipe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
        assert_eq!("/recipe/716429".parse::<Route>().unwrap(), Route::Recipe(716429));
        assert_eq!("/SavedRecipe".parse::<Route>().unwrap(), Route::Saved);
        assert_eq!("/savedrecipe/".parse::<Route>().unwrap(), Route::Saved);
    }

    #[test]
    fn test_reject_unknown_routes() {
        for path in ["", "recipe/1", "/recipe/abc", "/recipe", "/recipe/1/extra", "/about"] {
            assert!(path.parse::<Route>().is_err(), "{path} should not parse");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for route in [Route::Home, Route::Recipe(5), Route::Saved] {
            assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
        }
    }
}
