//! mindwell-core
//!
//! Pure domain types for the Mindwell self-assessment platform.
//! No I/O and no scoring rules — this is the shared vocabulary between the
//! instrument engine and the single-page frontend.

pub mod error;
pub mod models;
