//! Endpoint entity, the id/url/content triple served by the API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored endpoint: a path-safe url mapped to an opaque content blob.
///
/// `content` is conventionally JSON text but is stored and returned
/// verbatim; only the public content route ever parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Endpoint {
    pub id: i32,
    pub url: String,
    pub content: String,
}

impl Endpoint {
    /// Creates a new Endpoint instance.
    pub fn new(id: i32, url: String, content: String) -> Self {
        Self { id, url, content }
    }
}

/// Input data for creating or replacing an endpoint.
///
/// The id is assigned by the database on create and taken from the request
/// path on update, so it never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEndpoint {
    pub url: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_creation() {
        let endpoint = Endpoint::new(1, "testendpoint".to_string(), "{}".to_string());

        assert_eq!(endpoint.id, 1);
        assert_eq!(endpoint.url, "testendpoint");
        assert_eq!(endpoint.content, "{}");
    }

    #[test]
    fn test_endpoint_serializes_flat() {
        let endpoint = Endpoint::new(7, "prices".to_string(), r#"{"a":1}"#.to_string());
        let json = serde_json::to_value(&endpoint).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["url"], "prices");
        assert_eq!(json["content"], r#"{"a":1}"#);
    }
}
