//! DTOs for the endpoint CRUD routes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::NewEndpoint;
use crate::utils::url_safety::validate_url_path_safe;

/// Request body for creating or replacing an endpoint.
///
/// Only the create route runs validation; update replaces the stored url
/// without re-checking it.
#[derive(Debug, Deserialize, Validate)]
pub struct EndpointBody {
    #[validate(custom(function = validate_url_path_safe))]
    pub url: String,

    /// Stored verbatim. Conventionally JSON text, but not schema-checked
    /// at write time.
    pub content: String,
}

impl From<EndpointBody> for NewEndpoint {
    fn from(body: EndpointBody) -> Self {
        Self {
            url: body.url,
            content: body.content,
        }
    }
}

/// Success marker returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_url_passes_validation() {
        let body = EndpointBody {
            url: "testendpoint".to_string(),
            content: "{}".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_unsafe_url_fails_validation() {
        let body = EndpointBody {
            url: " some uns@fe url chars".to_string(),
            content: "{}".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_delete_response_shape() {
        let json = serde_json::to_value(DeleteResponse::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "success" }));
    }
}
