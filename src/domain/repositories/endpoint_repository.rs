//! Repository trait for endpoint data access.

use crate::domain::entities::{Endpoint, NewEndpoint};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for endpoint storage.
///
/// Provides CRUD operations over the endpoints table, including lookup by
/// url for the public content route.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEndpointRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointRepository: Send + Sync {
    /// Lists up to `limit` endpoints starting at `offset`.
    ///
    /// Rows come back in the store's natural scan order; callers must not
    /// assume any ordering beyond "stable for an unchanged table". An empty
    /// table yields an empty vec, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Endpoint>, AppError>;

    /// Fetches an endpoint by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has that id.
    /// Returns [`AppError::Store`] on database errors.
    async fn get_by_id(&self, id: i32) -> Result<Endpoint, AppError>;

    /// Fetches an endpoint by its url.
    ///
    /// Urls are expected to be unique in practice, but uniqueness is not
    /// enforced here; with duplicates, whichever row the store scans first
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has that url.
    /// Returns [`AppError::Store`] on database errors.
    async fn get_by_url(&self, url: &str) -> Result<Endpoint, AppError>;

    /// Inserts a new endpoint and returns it with the assigned id.
    ///
    /// Url safety is checked at the request boundary before this is called.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn create(&self, new_endpoint: NewEndpoint) -> Result<Endpoint, AppError>;

    /// Replaces url and content for the row with `id`.
    ///
    /// The affected-row count is not checked: updating a nonexistent id
    /// succeeds and echoes the input back. Unlike create, the url is not
    /// re-validated here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn update(&self, id: i32, new_endpoint: NewEndpoint) -> Result<Endpoint, AppError>;

    /// Hard-deletes the row with `id`. Succeeds even if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}
