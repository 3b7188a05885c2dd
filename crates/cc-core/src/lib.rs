//! # cc-core
//!
//! Core types shared by the church-calendar crates: the error hierarchy and
//! the engine configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Engine configuration (lunar search windows, oracle failure policy).
pub mod config;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{EngineConfig, OracleFailurePolicy, ScanWindow};
pub use errors::{Error, Result};
