use std::sync::Arc;

use crate::enrichment::EnrichmentService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the generator transport and the fallback table; issues request tokens.
    pub enrichment: Arc<EnrichmentService>,
}
