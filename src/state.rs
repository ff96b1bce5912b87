use std::sync::Arc;

use crate::domain::repositories::EndpointRepository;

/// Shared application state, constructed once at startup and injected into
/// every handler.
#[derive(Clone)]
pub struct AppState {
    pub endpoints: Arc<dyn EndpointRepository>,
}

impl AppState {
    pub fn new(endpoints: Arc<dyn EndpointRepository>) -> Self {
        Self { endpoints }
    }
}
