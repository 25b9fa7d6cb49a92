pub mod health;

use axum::{routing::{get, post}, Router};

use crate::enrichment::handlers as enrichment;
use crate::graph::handlers as graph;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Affinity graph
        .route("/api/v1/graph", post(graph::handle_build_graph))
        // Career enrichment
        .route("/api/v1/careers/enrich", post(enrichment::handle_enrich))
        .with_state(state)
}
