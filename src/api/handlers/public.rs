//! Handler for the public content route.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Serves an endpoint's stored content, keyed by url.
///
/// # Endpoint
///
/// `GET /api/public/{url}`
///
/// The stored blob is parsed as JSON and returned directly as the response
/// body, not wrapped in a content field. This is the only route that ever
/// parses the blob.
///
/// # Errors
///
/// Returns 404 Not Found if no endpoint has that url.
/// Returns 500 if the stored content is not valid JSON.
pub async fn public_content_handler(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<Value>, AppError> {
    let endpoint = state.endpoints.get_by_url(&url).await?;

    let content: Value = serde_json::from_str(&endpoint.content).map_err(|e| {
        AppError::store(
            "Stored content is not valid JSON",
            json!({ "url": endpoint.url, "reason": e.to_string() }),
        )
    })?;

    Ok(Json(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Endpoint;
    use crate::domain::repositories::MockEndpointRepository;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use std::sync::Arc;

    fn make_server(repo: MockEndpointRepository) -> TestServer {
        let state = AppState::new(Arc::new(repo));
        let app = Router::new()
            .route("/api/public/{url}", get(public_content_handler))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_public_content_is_unwrapped() {
        let mut repo = MockEndpointRepository::new();
        repo.expect_get_by_url()
            .with(mockall::predicate::eq("prices"))
            .returning(|url| Ok(Endpoint::new(1, url.to_string(), r#"{"a":1}"#.to_string())));

        let server = make_server(repo);
        let response = server.get("/api/public/prices").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body, json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn test_public_content_not_found() {
        let mut repo = MockEndpointRepository::new();
        repo.expect_get_by_url()
            .returning(|url| Err(AppError::not_found("Endpoint not found", json!({ "url": url }))));

        let server = make_server(repo);
        let response = server.get("/api/public/missing").await;

        response.assert_status_not_found();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn test_public_content_invalid_json_is_500() {
        let mut repo = MockEndpointRepository::new();
        repo.expect_get_by_url()
            .returning(|url| Ok(Endpoint::new(1, url.to_string(), "not json".to_string())));

        let server = make_server(repo);
        let response = server.get("/api/public/broken").await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "store_error");
    }

    #[tokio::test]
    async fn test_public_content_non_object_json_passes_through() {
        // The blob is any JSON value, not necessarily an object.
        let mut repo = MockEndpointRepository::new();
        repo.expect_get_by_url()
            .returning(|url| Ok(Endpoint::new(1, url.to_string(), "[1,2,3]".to_string())));

        let server = make_server(repo);
        let response = server.get("/api/public/numbers").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body, json!([1, 2, 3]));
    }
}
