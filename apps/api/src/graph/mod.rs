// Profile-to-career affinity graph.
// Implements: attribute extraction, lexical matching, radial layout, edge fallback policy.
// Building is pure and synchronous; handlers run it on the blocking pool.

pub mod builder;
pub mod handlers;
pub mod matcher;
pub mod profile;
pub mod theme;
