//! Enrichment service — turns a selected career label into a `CareerInfoRecord`.
//!
//! Flow: role_name → prompt → one generator call → parse, or static fallback.
//!
//! `enrich` never returns an error. Transport failures, non-2xx statuses,
//! malformed payloads and `error` / `mock` responses all resolve to the
//! fallback record, logged at `warn`. There are no retries and no timeout
//! beyond the transport's own.
//!
//! Every call carries a `RequestToken` from a monotonically increasing counter.
//! `EnrichmentPanel` uses it to drop results that arrive after a newer selection,
//! so the newest selection always wins regardless of completion order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::enrichment::knowledge::CareerKnowledge;
use crate::enrichment::parser::{fallback_career_info, parse_career_info, role_name};
use crate::enrichment::prompts::career_info_prompt;
use crate::llm_client::{GenerationRequest, GeneratorResponse, TextGenerator};
use crate::models::career::CareerInfoRecord;
use crate::models::profile::Profile;

/// Identifies one `enrich` call. Later calls carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(pub u64);

/// How an enrichment call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentResult {
    /// The generator answered and the answer was parsed.
    Ready { record: CareerInfoRecord },
    /// The generator could not be used; `record` is the static fallback.
    Failed {
        record: CareerInfoRecord,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentOutcome {
    pub token: RequestToken,
    pub result: EnrichmentResult,
}

pub struct EnrichmentService {
    generator: Arc<dyn TextGenerator>,
    knowledge: Arc<dyn CareerKnowledge>,
    model: String,
    last_token: AtomicU64,
}

impl EnrichmentService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        knowledge: Arc<dyn CareerKnowledge>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            knowledge,
            model: model.into(),
            last_token: AtomicU64::new(0),
        }
    }

    /// Issues the next request token. Tokens start at 1.
    pub fn next_token(&self) -> RequestToken {
        RequestToken(self.last_token.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Enriches `career_label` under a freshly issued token.
    pub async fn enrich(&self, career_label: &str, profile: &Profile) -> EnrichmentOutcome {
        let token = self.next_token();
        self.enrich_with_token(token, career_label, profile).await
    }

    /// Enriches `career_label` under a token the caller already holds, e.g. one
    /// handed to an `EnrichmentPanel` before the call started.
    pub async fn enrich_with_token(
        &self,
        token: RequestToken,
        career_label: &str,
        profile: &Profile,
    ) -> EnrichmentOutcome {
        let role = role_name(career_label);
        let request = GenerationRequest {
            prompt: career_info_prompt(&role, profile.course()),
            model: self.model.clone(),
        };

        let analysis = self
            .generator
            .generate(&request)
            .await
            .and_then(GeneratorResponse::into_analysis);

        let result = match analysis {
            Ok(text) => {
                info!("Enrichment {} for '{}' parsed from generator", token.0, role);
                EnrichmentResult::Ready {
                    record: parse_career_info(&text, career_label),
                }
            }
            Err(e) => {
                warn!(
                    "Enrichment {} for '{}' fell back to static record: {}",
                    token.0, role, e
                );
                EnrichmentResult::Failed {
                    record: fallback_career_info(
                        career_label,
                        profile.course(),
                        self.knowledge.as_ref(),
                    ),
                    reason: e.to_string(),
                }
            }
        };

        EnrichmentOutcome { token, result }
    }
}

/// What the enrichment panel currently shows.
// Driven by display clients; the HTTP surface hands out tokens instead.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Ready(CareerInfoRecord),
    /// The generator failed; the fallback record is shown instead.
    Failed {
        record: CareerInfoRecord,
        reason: String,
    },
}

/// Display-side state machine: `Idle → Loading → {Ready, Failed}`.
///
/// Only the outcome whose token matches the latest selection is applied.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct EnrichmentPanel {
    latest: Option<RequestToken>,
    state: PanelState,
}

#[allow(dead_code)]
impl EnrichmentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A career was selected; its enrichment will run under `token`.
    pub fn select(&mut self, token: RequestToken) {
        self.latest = Some(token);
        self.state = PanelState::Loading;
    }

    /// Applies `outcome` if it belongs to the latest selection.
    /// Returns false when the outcome was stale and discarded.
    pub fn resolve(&mut self, outcome: EnrichmentOutcome) -> bool {
        if self.latest != Some(outcome.token) {
            return false;
        }
        self.state = match outcome.result {
            EnrichmentResult::Ready { record } => PanelState::Ready(record),
            EnrichmentResult::Failed { record, reason } => PanelState::Failed { record, reason },
        };
        true
    }

    /// Closes the panel. Results still in flight will be discarded.
    pub fn close(&mut self) {
        self.latest = None;
        self.state = PanelState::Idle;
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The record on display, if any.
    pub fn record(&self) -> Option<&CareerInfoRecord> {
        match &self.state {
            PanelState::Ready(record) | PanelState::Failed { record, .. } => Some(record),
            PanelState::Idle | PanelState::Loading => None,
        }
    }
}
