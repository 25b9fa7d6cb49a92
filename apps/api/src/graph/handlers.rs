//! Axum route handlers for the Graph API.

use anyhow::Context;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::graph::builder::{build_graph, CareerGraph};
use crate::models::profile::Profile;

#[derive(Debug, Deserialize)]
pub struct GraphRequest {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub career_paths: Vec<String>,
}

/// POST /api/v1/graph
///
/// Builds the affinity graph for a profile and a list of candidate career paths.
/// Missing profile fields and an empty career list are not errors.
pub async fn handle_build_graph(
    Json(request): Json<GraphRequest>,
) -> Result<Json<CareerGraph>, AppError> {
    let graph = tokio::task::spawn_blocking(move || {
        build_graph(&request.profile, &request.career_paths)
    })
    .await
    .context("graph build task failed")?;

    Ok(Json(graph))
}
