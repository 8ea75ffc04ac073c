//! # Shared Registry Handle
//!
//! Hosts that expose the registry to concurrent tasks need every mutating
//! operation to observe a current `(owner, nominee)` pair; a stale read
//! would let a displaced owner act on authority it no longer holds. This
//! wrapper serializes mutations behind a `parking_lot` write lock and lets
//! observers proceed concurrently under read locks.

use std::sync::Arc;

use parking_lot::RwLock;

use handover_core::Principal;

use crate::error::OwnershipError;
use crate::event::{EventRecord, OwnershipEvent};
use crate::registry::OwnershipRegistry;

/// A cloneable, thread-safe handle to a single [`OwnershipRegistry`].
///
/// Mutating operations take the write lock, so they commit in one strict
/// serial order. Read operations take the read lock and observe the most
/// recently committed state.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<OwnershipRegistry>>,
}

impl SharedRegistry {
    /// Create a shared registry owned by `initial_owner`.
    pub fn new(initial_owner: Principal) -> Result<Self, OwnershipError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(OwnershipRegistry::new(initial_owner)?)),
        })
    }

    /// Serialized [`OwnershipRegistry::nominate`].
    pub fn nominate(
        &self,
        caller: Principal,
        candidate: Principal,
    ) -> Result<OwnershipEvent, OwnershipError> {
        self.inner.write().nominate(caller, candidate)
    }

    /// Serialized [`OwnershipRegistry::accept`].
    pub fn accept(&self, caller: Principal) -> Result<OwnershipEvent, OwnershipError> {
        self.inner.write().accept(caller)
    }

    /// Serialized [`OwnershipRegistry::renounce`].
    pub fn renounce(
        &self,
        caller: Principal,
        confirmation: &str,
    ) -> Result<OwnershipEvent, OwnershipError> {
        self.inner.write().renounce(caller, confirmation)
    }

    /// The current owner under a read lock.
    pub fn current_owner(&self) -> Principal {
        self.inner.read().current_owner()
    }

    /// The pending nominee under a read lock.
    pub fn pending_nominee(&self) -> Principal {
        self.inner.read().pending_nominee()
    }

    /// A snapshot of the audit log at the time of the call.
    pub fn event_log(&self) -> Vec<EventRecord> {
        self.inner.read().event_log().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(tag: u8) -> Principal {
        Principal::from_bytes([tag; 20])
    }

    #[test]
    fn clones_share_one_registry() {
        let owner = principal(1);
        let nominee = principal(2);
        let handle = SharedRegistry::new(owner).unwrap();
        let other = handle.clone();

        handle.nominate(owner, nominee).unwrap();
        assert_eq!(other.pending_nominee(), nominee);

        other.accept(nominee).unwrap();
        assert_eq!(handle.current_owner(), nominee);
    }

    #[test]
    fn snapshot_log_matches_committed_transitions() {
        let owner = principal(1);
        let handle = SharedRegistry::new(owner).unwrap();
        handle.nominate(owner, principal(2)).unwrap();
        let log = handle.event_log();
        assert_eq!(log.len(), 2);
        assert!(matches!(
            log[1].event,
            OwnershipEvent::NewOwnerNominated { .. }
        ));
    }
}
