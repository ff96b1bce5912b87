//! Handlers for endpoint management (list, get, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::endpoint::{DeleteResponse, EndpointBody};
use crate::domain::entities::Endpoint;
use crate::error::AppError;
use crate::state::AppState;

/// First page served by the list route. Offset and limit are fixed; the
/// API does not accept pagination parameters.
const LIST_OFFSET: i64 = 0;
const LIST_LIMIT: i64 = 10;

fn invalid_id(rejection: PathRejection) -> AppError {
    AppError::bad_request("Invalid endpoint ID", json!({ "reason": rejection.body_text() }))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request("Invalid request body", json!({ "reason": rejection.body_text() }))
}

/// Lists the first page of endpoints.
///
/// # Endpoint
///
/// `GET /api/endpoints`
///
/// Always returns the first 10 rows in the store's natural scan order.
/// An empty table yields `[]`.
pub async fn list_endpoints_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Endpoint>>, AppError> {
    let endpoints = state.endpoints.list(LIST_OFFSET, LIST_LIMIT).await?;

    Ok(Json(endpoints))
}

/// Fetches a single endpoint by id.
///
/// # Endpoint
///
/// `GET /api/endpoint/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `{id}` is not an integer.
/// Returns 404 Not Found if no endpoint has that id.
pub async fn get_endpoint_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Endpoint>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;

    let endpoint = state.endpoints.get_by_id(id).await?;

    Ok(Json(endpoint))
}

/// Creates an endpoint.
///
/// # Endpoint
///
/// `POST /api/endpoint`
///
/// # Request Body
///
/// ```json
/// { "url": "testendpoint", "content": "{}" }
/// ```
///
/// The url must contain only URL-path-safe characters. `content` is stored
/// verbatim.
///
/// # Errors
///
/// Returns 400 Bad Request on an unparsable body or an unsafe url.
pub async fn create_endpoint_handler(
    State(state): State<AppState>,
    payload: Result<Json<EndpointBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Endpoint>), AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    payload.validate()?;

    let endpoint = state.endpoints.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(endpoint)))
}

/// Replaces an endpoint's url and content.
///
/// # Endpoint
///
/// `PUT /api/endpoint/{id}`
///
/// The id itself is immutable; only url and content change. Mirroring the
/// create/update asymmetry of the persistence contract, the new url is not
/// re-validated and a nonexistent id still answers 200 with the input
/// echoed back.
///
/// # Errors
///
/// Returns 400 Bad Request if `{id}` is not an integer or the body is
/// unparsable.
pub async fn update_endpoint_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EndpointBody>, JsonRejection>,
) -> Result<Json<Endpoint>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;
    let Json(payload) = payload.map_err(invalid_body)?;

    let endpoint = state.endpoints.update(id, payload.into()).await?;

    Ok(Json(endpoint))
}

/// Hard-deletes an endpoint.
///
/// # Endpoint
///
/// `DELETE /api/endpoint/{id}`
///
/// Succeeds with `{"result": "success"}` whether or not a row matched.
///
/// # Errors
///
/// Returns 400 Bad Request if `{id}` is not an integer.
pub async fn delete_endpoint_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;

    state.endpoints.delete(id).await?;

    Ok(Json(DeleteResponse::success()))
}
