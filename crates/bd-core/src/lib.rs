//! # bd-core
//!
//! Core error definitions and parsing helpers for bizday.
//!
//! This crate provides the foundation shared by the other crates in the
//! workspace: the error enum, the `ensure!` macro, and the string
//! parsers used for embedded date tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
