//! Axum route handlers for the Enrichment API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enrichment::service::{EnrichmentResult, RequestToken};
use crate::errors::AppError;
use crate::models::career::CareerInfoRecord;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnrichRequest {
    pub career_label: String,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichPhase {
    Ready,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct EnrichResponse {
    /// Clients keep only the response with the highest token they issued.
    pub request_token: RequestToken,
    pub phase: EnrichPhase,
    pub career: CareerInfoRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// POST /api/v1/careers/enrich
///
/// Returns structured information for a selected career. Generator failures are
/// not errors: the response carries the static fallback with `phase: "failed"`.
pub async fn handle_enrich(
    State(state): State<AppState>,
    Json(request): Json<EnrichRequest>,
) -> Result<Json<EnrichResponse>, AppError> {
    if request.career_label.trim().is_empty() {
        return Err(AppError::Validation(
            "career_label cannot be empty".to_string(),
        ));
    }

    let outcome = state
        .enrichment
        .enrich(&request.career_label, &request.profile)
        .await;

    let (phase, career, fallback_reason) = match outcome.result {
        EnrichmentResult::Ready { record } => (EnrichPhase::Ready, record, None),
        EnrichmentResult::Failed { record, reason } => (EnrichPhase::Failed, record, Some(reason)),
    };

    Ok(Json(EnrichResponse {
        request_token: outcome.token,
        phase,
        career,
        fallback_reason,
    }))
}
