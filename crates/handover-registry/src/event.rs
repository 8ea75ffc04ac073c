//! # Domain Events
//!
//! The registry emits one event per committed transition. Event payloads
//! carry exactly the fields the host's audit layer consumes; the timestamp
//! lives on the enclosing [`EventRecord`] in the registry's log, not on the
//! event itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use handover_core::Principal;

/// A domain event emitted on a committed registry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnershipEvent {
    /// The current owner designated a successor. A new nomination
    /// overwrites any prior one; the displaced nominee is not consulted.
    NewOwnerNominated {
        /// The owner at the moment of nomination.
        previous_owner: Principal,
        /// The principal now solely authorized to accept.
        nominee: Principal,
    },

    /// The owner slot changed hands. Emitted at construction
    /// (`previous_owner` is the sentinel), on acceptance, and on
    /// renouncement (`new_owner` is the sentinel).
    OwnershipTransferred {
        /// The owner before the transition.
        previous_owner: Principal,
        /// The owner after the transition.
        new_owner: Principal,
    },
}

/// A timestamped entry in the registry's audit log.
///
/// Every committed transition appends exactly one record; rejected
/// operations append nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event that was emitted.
    pub event: OwnershipEvent,
    /// When the transition committed.
    pub timestamp: DateTime<Utc>,
}

impl EventRecord {
    pub(crate) fn now(event: OwnershipEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }
}
