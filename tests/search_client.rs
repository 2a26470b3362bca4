//! Recipe API client against a mock HTTP server.

use recipe_book::error::AppError;
use recipe_book::models::{ApiConfig, SearchFilters, SearchQuery};
use recipe_book::services::{RecipeClient, RecipeSource};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RecipeClient {
    let config = ApiConfig {
        base_url: format!("{}/recipes", server.uri()),
        api_key: "test-key".to_string(),
        ..ApiConfig::default()
    };
    RecipeClient::new(&config).unwrap()
}

#[tokio::test]
async fn search_returns_results_in_api_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("query", "pasta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": 2, "title": "Pasta Carbonara", "image": "https://img/2.jpg", "imageType": "jpg"},
                {"id": 1, "title": "Pasta Primavera", "image": "https://img/1.jpg", "imageType": "jpg"}
            ],
            "offset": 0,
            "number": 10,
            "totalResults": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recipes = client_for(&server)
        .search(&SearchQuery::new("pasta", SearchFilters::default()))
        .await
        .unwrap();

    let ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(recipes[0].image.as_deref(), Some("https://img/2.jpg"));
}

#[tokio::test]
async fn search_sends_both_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .and(query_param("diet", "vegan"))
        .and(query_param("cuisine", "italian"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new("", SearchFilters::new(Some("vegan"), Some("italian")));
    let recipes = client_for(&server).search(&query).await.unwrap();
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn search_without_filters_omits_filter_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    client_for(&server).search(&SearchQuery::all()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, vec!["apiKey", "query"]);
}

#[tokio::test]
async fn status_402_is_quota_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "status": "failure",
            "code": 402,
            "message": "Your daily points limit of 150 has been reached."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchQuery::all())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::QuotaExceeded));
}

#[tokio::test]
async fn other_statuses_are_fetch_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchQuery::all())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::FetchFailed(_)));
}

#[tokio::test]
async fn malformed_body_is_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/complexSearch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchQuery::all())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::FetchFailed(_)));
}

#[tokio::test]
async fn unreachable_server_is_fetch_failure() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.search(&SearchQuery::all()).await.unwrap_err();
    assert!(matches!(err, AppError::FetchFailed(_)));
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn detail_returns_full_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/716429/information"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 716429,
            "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
            "image": "https://img/716429.jpg",
            "readyInMinutes": 45,
            "servings": 2,
            "extendedIngredients": [
                {"id": 1001, "original": "1 tbsp butter"},
                {"id": 10011135, "original": "about 2 cups frozen cauliflower"}
            ],
            "instructions": "<ol><li>Melt the butter.</li></ol>"
        })))
        .mount(&server)
        .await;

    let recipe = client_for(&server).get_detail(716429).await.unwrap();
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.ingredients()[0].original, "1 tbsp butter");
    assert_eq!(
        recipe.instructions.as_deref(),
        Some("<ol><li>Melt the butter.</li></ol>")
    );
}

#[tokio::test]
async fn detail_failures_are_all_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/1/information"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recipes/2/information"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(
        client.get_detail(1).await,
        Err(AppError::FetchFailed(_))
    ));
    assert!(matches!(
        client.get_detail(2).await,
        Err(AppError::FetchFailed(_))
    ));
}
