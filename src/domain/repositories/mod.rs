//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod endpoint_repository;

pub use endpoint_repository::EndpointRepository;

#[cfg(test)]
pub use endpoint_repository::MockEndpointRepository;
