//! Core business entities.

pub mod endpoint;

pub use endpoint::{Endpoint, NewEndpoint};
