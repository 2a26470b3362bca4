//! Star ratings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::RecipeId;

/// Ratings keyed by recipe id. Serialized as a JSON object with string keys.
pub type Ratings = BTreeMap<RecipeId, Rating>;

/// A star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5.
    pub fn new(stars: u8) -> Result<Self, AppError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(AppError::InvalidRating(stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    /// Five-star bar with the first `stars` filled.
    pub fn bar(rating: Option<Rating>) -> String {
        let filled = rating.map(Rating::stars).unwrap_or(0) as usize;
        let empty = Self::MAX as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
