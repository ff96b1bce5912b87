//! PostgreSQL repository implementations.

pub mod pg_endpoint_repository;

pub use pg_endpoint_repository::PgEndpointRepository;
