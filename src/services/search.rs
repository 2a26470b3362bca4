// src/services/search.rs

//! Recipe API client.
//!
//! Talks to a Spoonacular-compatible API:
//!
//! - `GET {base}/complexSearch?apiKey=&query=&diet=&cuisine=` → `{results: [...]}`
//! - `GET {base}/{id}/information?apiKey=` → full recipe
//!
//! HTTP 402 means the account quota is used up and is reported as
//! [`AppError::QuotaExceeded`]. Everything else that goes wrong becomes
//! [`AppError::FetchFailed`]. Nothing is retried or cached.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, Recipe, RecipeId, SearchQuery, SearchResponse};
use crate::utils::http::create_async_client;

/// Source of recipes for the views.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search recipes. An empty term returns the default listing.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>>;

    /// Fetch one recipe with ingredients and instructions.
    async fn get_detail(&self, id: RecipeId) -> Result<Recipe>;
}

/// HTTP client for the recipe API.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RecipeClient {
    /// Create a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        Ok(Self::with_client(client, &config.base_url, &config.api_key))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut params = vec![
            ("apiKey", self.api_key.as_str()),
            ("query", query.term.as_str()),
        ];
        if let Some(diet) = query.filters.diet.as_deref() {
            params.push(("diet", diet));
        }
        if let Some(cuisine) = query.filters.cuisine.as_deref() {
            params.push(("cuisine", cuisine));
        }

        let endpoint = format!("{}/complexSearch", self.base_url);
        Ok(Url::parse_with_params(&endpoint, &params)?)
    }

    fn detail_url(&self, id: RecipeId) -> Result<Url> {
        let endpoint = format!("{}/{}/information", self.base_url, id);
        Ok(Url::parse_with_params(
            &endpoint,
            &[("apiKey", self.api_key.as_str())],
        )?)
    }

    /// GET a URL and decode the JSON body, classifying failures.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        // The query string carries the API key; only the path is logged.
        log::debug!("GET {}", url.path());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(e.without_url()))?;

        let status = response.status();
        if status == StatusCode::PAYMENT_REQUIRED {
            log::warn!("Recipe API quota exceeded");
            return Err(AppError::QuotaExceeded);
        }
        if !status.is_success() {
            return Err(AppError::fetch_failed(format!("HTTP status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::fetch_failed(e.without_url()))?;
        serde_json::from_slice(&body)
            .map_err(|e| AppError::fetch_failed(format!("malformed response body: {e}")))
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>> {
        let url = self.search_url(query)?;
        let response: SearchResponse = self.get_json(url).await?;
        log::info!(
            "Search '{}' returned {} of {} recipe(s)",
            query.term,
            response.results.len(),
            response.total_results
        );
        Ok(response.results)
    }

    async fn get_detail(&self, id: RecipeId) -> Result<Recipe> {
        let url = self.detail_url(id)?;
        // The detail page has a single failure notice; quota is not singled out.
        self.get_json(url).await.map_err(|e| {
            if e.is_quota_exceeded() {
                AppError::fetch_failed("HTTP status 402 Payment Required")
            } else {
                e
            }
        })
    }
}
