//! API route configuration.

use crate::api::handlers::{
    create_endpoint_handler, delete_endpoint_handler, get_endpoint_handler,
    list_endpoints_handler, public_content_handler, update_endpoint_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET    /endpoints`       - List the first page of endpoints
/// - `POST   /endpoint`        - Create an endpoint
/// - `GET    /endpoint/{id}`   - Fetch an endpoint by id
/// - `PUT    /endpoint/{id}`   - Replace an endpoint's url and content
/// - `DELETE /endpoint/{id}`   - Hard-delete an endpoint
/// - `GET    /public/{url}`    - Serve an endpoint's content, unwrapped
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/endpoints", get(list_endpoints_handler))
        .route("/endpoint", post(create_endpoint_handler))
        .route(
            "/endpoint/{id}",
            get(get_endpoint_handler)
                .put(update_endpoint_handler)
                .delete(delete_endpoint_handler),
        )
        .route("/public/{url}", get(public_content_handler))
}
