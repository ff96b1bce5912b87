//! PostgreSQL implementation of the endpoint repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Endpoint, NewEndpoint};
use crate::domain::repositories::EndpointRepository;
use crate::error::AppError;

/// PostgreSQL repository for endpoint storage and retrieval.
///
/// Every statement binds its parameters; user input never reaches the SQL
/// text itself.
pub struct PgEndpointRepository {
    pool: Arc<PgPool>,
}

impl PgEndpointRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EndpointRepository for PgEndpointRepository {
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Endpoint>, AppError> {
        // No ORDER BY: the natural scan order is part of the contract.
        let endpoints = sqlx::query_as::<_, Endpoint>(
            "SELECT id, url, content FROM endpoints LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(endpoints)
    }

    async fn get_by_id(&self, id: i32) -> Result<Endpoint, AppError> {
        let endpoint =
            sqlx::query_as::<_, Endpoint>("SELECT id, url, content FROM endpoints WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        endpoint.ok_or_else(|| AppError::not_found("Endpoint not found", json!({ "id": id })))
    }

    async fn get_by_url(&self, url: &str) -> Result<Endpoint, AppError> {
        let endpoint =
            sqlx::query_as::<_, Endpoint>("SELECT id, url, content FROM endpoints WHERE url = $1")
                .bind(url)
                .fetch_optional(self.pool.as_ref())
                .await?;

        endpoint.ok_or_else(|| AppError::not_found("Endpoint not found", json!({ "url": url })))
    }

    async fn create(&self, new_endpoint: NewEndpoint) -> Result<Endpoint, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO endpoints (url, content) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new_endpoint.url)
        .bind(&new_endpoint.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Endpoint::new(id, new_endpoint.url, new_endpoint.content))
    }

    async fn update(&self, id: i32, new_endpoint: NewEndpoint) -> Result<Endpoint, AppError> {
        // Affected-row count is not checked; a missing id still succeeds.
        sqlx::query("UPDATE endpoints SET url = $1, content = $2 WHERE id = $3")
            .bind(&new_endpoint.url)
            .bind(&new_endpoint.content)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(Endpoint::new(id, new_endpoint.url, new_endpoint.content))
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM endpoints WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
