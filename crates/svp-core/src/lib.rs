//! # svp-core — Foundational Types for Schema Validator Pro
//!
//! This crate is the leaf of the Schema Validator Pro workspace. It defines
//! the value types every validator returns, the Schema.org vocabulary
//! constants, and the small normalization helpers that generators and
//! validators share. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Total helpers.** Every function in [`url`], [`date`], [`text`] and
//!    [`json`] returns a sentinel (`""`, `false`, `None`, `0`, or the input
//!    unchanged) instead of an error. Nothing in this crate panics on bad
//!    input.
//!
//! 2. **`ValidationResult::valid` is derived.** A result is valid exactly
//!    when its error list is empty. The flag is computed at construction and
//!    cannot be set independently.
//!
//! 3. **Single `SchemaType` enum.** One definition of every `@type` tag the
//!    system knows about, exhaustive `match` everywhere.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `svp-*` crates.
//! - No `unsafe` code.
//! - No I/O. Everything here is a pure function over in-memory values.

pub mod constants;
pub mod date;
pub mod error;
pub mod json;
pub mod text;
pub mod url;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use constants::{
    Availability, EventAttendanceMode, EventStatus, SchemaType, SCHEMA_CONTEXT,
};
pub use error::SvpError;
pub use validation::{Severity, ValidationIssue, ValidationResult};
