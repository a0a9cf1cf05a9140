//! mindwell-audit
//!
//! Structured application-level events for user actions. Events are emitted
//! via `tracing`; whatever subscriber the embedding shell installs decides
//! where they go.

pub mod error;
pub mod events;
