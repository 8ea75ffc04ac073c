#![deny(missing_docs)]

//! # handover-registry — Two-Phase Ownership Transfer
//!
//! A single privileged "owner" role that can be handed off safely. The
//! classic single-step transfer risks handing control to an unreachable or
//! mistyped identity; here a transfer takes two steps, each authorized by
//! the party who bears its risk:
//!
//! 1. The current owner **nominates** a successor.
//! 2. The nominee **accepts**, proving the identity is live and able to act.
//!
//! The owner may also **renounce** the role permanently, guarded by an
//! exact-match confirmation phrase.
//!
//! ## State Machine
//!
//! ```text
//! (owner: O, nominee: ∅) ─nominate(O, N)──▶ (owner: O, nominee: N)
//!                                                    │
//!                                               accept(N)
//!                                                    │
//!                                                    ▼
//!                                           (owner: N, nominee: N)
//!
//! (owner: O, nominee: *) ─renounce(O, phrase)──▶ (owner: ∅, nominee: *)
//! ```
//!
//! `∅` is the sentinel principal. Two deliberate quirks of the original
//! contract are preserved and verified by tests: `accept` does not clear
//! the nominee slot (so a repeated accept succeeds as a degenerate
//! self-transfer), and `renounce` does not clear it either. See
//! [`OwnershipRegistry`] for the precise rules.
//!
//! ## Concurrency
//!
//! [`OwnershipRegistry`] is a plain single-threaded value. Hosts that share
//! it across tasks use [`SharedRegistry`], which serializes mutations
//! behind a write lock so authorization checks always see the current
//! `(owner, nominee)` pair.

pub mod error;
pub mod event;
pub mod registry;
pub mod shared;

// Re-export primary types.
pub use error::{ErrorKind, OwnershipError};
pub use event::{EventRecord, OwnershipEvent};
pub use registry::{OwnershipRegistry, RENOUNCE_CONFIRMATION};
pub use shared::SharedRegistry;
