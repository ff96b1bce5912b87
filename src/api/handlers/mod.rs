//! HTTP request handlers for API endpoints.

pub mod endpoints;
pub mod public;

pub use endpoints::{
    create_endpoint_handler, delete_endpoint_handler, get_endpoint_handler,
    list_endpoints_handler, update_endpoint_handler,
};
pub use public::public_content_handler;
