// Career enrichment: one generator call per selected career, parsed into a
// fixed record, with a static fallback when the generator cannot be used.
// All generator calls go through llm_client.

pub mod handlers;
pub mod knowledge;
pub mod parser;
pub mod prompts;
pub mod service;

pub use service::EnrichmentService;
