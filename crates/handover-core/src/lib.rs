#![deny(missing_docs)]

//! # handover-core — Foundational Types for the Handover Workspace
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies; only `serde`, `thiserror`,
//! and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **[`Principal`] is a value, not a nullable reference.** "No principal"
//!    is the distinguished zero [`Principal::SENTINEL`], so sentinel checks
//!    are pure value comparisons and the type stays `Copy` and totally
//!    comparable.
//!
//! 2. **Validation at construction time.** A `Principal` parsed from text
//!    goes through [`Principal::from_hex`], which rejects malformed input
//!    with a structured [`ValidationError`]. Deserialization routes through
//!    the same constructor, so invalid values are rejected at the boundary
//!    rather than silently accepted.

pub mod error;
pub mod principal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use principal::Principal;
