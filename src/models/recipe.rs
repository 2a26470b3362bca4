//! Recipe data structures as returned by the recipe API.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recipe identifier assigned by the remote API.
pub type RecipeId = u64;

/// A recipe as returned by the search or information endpoint.
///
/// Search results carry only `id`, `title` and `image`; the detail fields are
/// filled by the information endpoint. Fields this type does not name are
/// kept in `extra` so a saved snapshot is written back exactly as received.
/// A named optional field that arrived as `null` is kept in `extra` as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct Recipe {
    /// Stable identifier assigned by the API
    pub id: RecipeId,

    /// Recipe title
    pub title: String,

    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Short description as HTML markup (detail only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Ingredient list (detail only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<Ingredient>>,

    /// Preparation steps as HTML markup (detail only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Remaining API fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    /// Create a summary recipe with just an id and title.
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            summary: None,
            extended_ingredients: None,
            instructions: None,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
            extra: Map::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.extra.remove("image");
        self.image = Some(image.into());
        self
    }

    /// Ingredients, empty for search summaries.
    pub fn ingredients(&self) -> &[Ingredient] {
        self.extended_ingredients.as_deref().unwrap_or_default()
    }

    /// Route path of this recipe's detail page.
    pub fn detail_path(&self) -> String {
        format!("/recipe/{}", self.id)
    }
}

impl TryFrom<Map<String, Value>> for Recipe {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take(&mut map, "id")?.ok_or_else(|| serde_json::Error::missing_field("id"))?;
        let title = match map.remove("title") {
            None | Some(Value::Null) => String::new(),
            Some(value) => serde_json::from_value(value)?,
        };

        Ok(Self {
            id,
            title,
            image: take(&mut map, "image")?,
            summary: take(&mut map, "summary")?,
            extended_ingredients: take(&mut map, "extendedIngredients")?,
            instructions: take(&mut map, "instructions")?,
            ready_in_minutes: take(&mut map, "readyInMinutes")?,
            servings: take(&mut map, "servings")?,
            source_url: take(&mut map, "sourceUrl")?,
            extra: map,
        })
    }
}

/// Remove and decode an optional field. An explicit `null` stays in `map`.
fn take<T: DeserializeOwned>(
    map: &mut Map<String, Value>,
    key: &str,
) -> serde_json::Result<Option<T>> {
    match map.remove(key) {
        None => Ok(None),
        Some(Value::Null) => {
            map.insert(key.to_string(), Value::Null);
            Ok(None)
        }
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

/// One entry of a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Ingredient line as written in the source recipe (e.g. "2 cups flour")
    pub original: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Ingredient {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = take(&mut map, "id")?;
        let original = match map.remove("original") {
            None | Some(Value::Null) => String::new(),
            Some(value) => serde_json::from_value(value)?,
        };
        Ok(Self {
            id,
            original,
            extra: map,
        })
    }
}

/// Body of the `complexSearch` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matching recipes; missing means no results
    #[serde(default)]
    pub results: Vec<Recipe>,

    /// Total matches on the server, of which `results` is the first page
    #[serde(default)]
    pub total_results: u32,
}
