//! # The Ownership Registry
//!
//! One owner slot, one nominee slot, three mutating operations. Every
//! mutating operation validates first and mutates after, so a rejection
//! never leaves a partial state change behind. Every committed transition
//! appends exactly one [`EventRecord`] to the audit log and returns the
//! emitted event to the caller.

use handover_core::Principal;

use crate::error::OwnershipError;
use crate::event::{EventRecord, OwnershipEvent};

/// The exact phrase a caller must present to renounce ownership.
///
/// This is a deliberate-action guard against fat-fingered renouncement,
/// not a cryptographic control. Comparison is exact: case-sensitive, no
/// trimming. Do not strengthen or weaken it.
pub const RENOUNCE_CONFIRMATION: &str = "I hereby renounce ownership of this contract forever.";

/// The two-phase ownership-transfer state machine.
///
/// State is the pair `(owner, nominated_owner)`. The sentinel principal in
/// the owner slot means the role was renounced; in the nominee slot it
/// means no nomination is pending. There is no explicit state enum: the
/// authorization checks on each operation are the full transition table.
///
/// ## Preserved Quirks
///
/// Two behaviors of the original contract are load-bearing and must not be
/// "fixed":
///
/// - [`accept`](Self::accept) does not reset the nominee slot. The new
///   owner can accept again, committing a degenerate self-transfer that
///   emits `OwnershipTransferred` with equal previous and new owners.
/// - [`renounce`](Self::renounce) does not clear the nominee slot either.
///   `accept` never inspects the owner slot, so a nominee left pending at
///   renouncement can still accept afterwards and take the role.
#[derive(Debug)]
pub struct OwnershipRegistry {
    owner: Principal,
    nominated_owner: Principal,
    event_log: Vec<EventRecord>,
}

impl OwnershipRegistry {
    /// Create a registry owned by `initial_owner` with no pending nominee.
    ///
    /// Rejects the sentinel: a registry cannot be born renounced. On
    /// success the audit log opens with an `OwnershipTransferred` event
    /// from the sentinel to the initial owner.
    pub fn new(initial_owner: Principal) -> Result<Self, OwnershipError> {
        if initial_owner.is_sentinel() {
            tracing::warn!("registry construction rejected: sentinel initial owner");
            return Err(OwnershipError::SentinelOwner);
        }

        let mut registry = Self {
            owner: initial_owner,
            nominated_owner: Principal::SENTINEL,
            event_log: Vec::new(),
        };
        registry.commit(OwnershipEvent::OwnershipTransferred {
            previous_owner: Principal::SENTINEL,
            new_owner: initial_owner,
        });
        tracing::info!(owner = %initial_owner, "ownership registry created");
        Ok(registry)
    }

    /// Designate `candidate` as the sole principal authorized to accept
    /// the owner role next.
    ///
    /// Only the current owner may nominate; the candidate must be a
    /// concrete principal distinct from the owner. A nomination overwrites
    /// any prior pending nomination without the displaced nominee's
    /// consent.
    pub fn nominate(
        &mut self,
        caller: Principal,
        candidate: Principal,
    ) -> Result<OwnershipEvent, OwnershipError> {
        self.require_owner(caller)?;
        if candidate.is_sentinel() {
            tracing::warn!(caller = %caller, "nomination rejected: sentinel candidate");
            return Err(OwnershipError::SentinelNominee);
        }
        if candidate == self.owner {
            tracing::warn!(owner = %self.owner, "nomination rejected: self-nomination");
            return Err(OwnershipError::SelfNomination { owner: self.owner });
        }

        self.nominated_owner = candidate;
        let event = self.commit(OwnershipEvent::NewOwnerNominated {
            previous_owner: self.owner,
            nominee: candidate,
        });
        tracing::info!(previous_owner = %self.owner, nominee = %candidate, "new owner nominated");
        Ok(event)
    }

    /// Take the owner role. Only the pending nominee may call this.
    ///
    /// The nominee slot is left as-is, so the caller remains the nominee
    /// after taking the role; a repeated accept commits a self-transfer
    /// and emits again. The owner slot is never inspected here: the sole
    /// authorization is equality with the nominee.
    pub fn accept(&mut self, caller: Principal) -> Result<OwnershipEvent, OwnershipError> {
        if self.nominated_owner.is_sentinel() {
            tracing::warn!(caller = %caller, "accept rejected: no pending nomination");
            return Err(OwnershipError::NoPendingNomination);
        }
        if caller != self.nominated_owner {
            tracing::warn!(
                caller = %caller,
                nominee = %self.nominated_owner,
                "accept rejected: caller is not the nominee"
            );
            return Err(OwnershipError::NotNominee {
                caller,
                nominee: self.nominated_owner,
            });
        }

        let previous = self.owner;
        self.owner = self.nominated_owner;
        let event = self.commit(OwnershipEvent::OwnershipTransferred {
            previous_owner: previous,
            new_owner: self.owner,
        });
        tracing::info!(previous_owner = %previous, new_owner = %self.owner, "ownership transferred");
        Ok(event)
    }

    /// Give up the owner role permanently.
    ///
    /// Requires the current owner and an exact match of
    /// [`RENOUNCE_CONFIRMATION`]. Afterwards the owner slot holds the
    /// sentinel, which no caller equals, so no further nomination or
    /// renouncement can ever succeed. The nominee slot is not cleared.
    pub fn renounce(
        &mut self,
        caller: Principal,
        confirmation: &str,
    ) -> Result<OwnershipEvent, OwnershipError> {
        self.require_owner(caller)?;
        if confirmation != RENOUNCE_CONFIRMATION {
            tracing::warn!(caller = %caller, "renounce rejected: confirmation phrase mismatch");
            return Err(OwnershipError::ConfirmationMismatch);
        }

        let previous = self.owner;
        self.owner = Principal::SENTINEL;
        let event = self.commit(OwnershipEvent::OwnershipTransferred {
            previous_owner: previous,
            new_owner: Principal::SENTINEL,
        });
        tracing::info!(previous_owner = %previous, "ownership renounced");
        Ok(event)
    }

    /// The current owner, or the sentinel if the role was renounced.
    pub fn current_owner(&self) -> Principal {
        self.owner
    }

    /// The pending nominee, or the sentinel if none is set.
    pub fn pending_nominee(&self) -> Principal {
        self.nominated_owner
    }

    /// The audit trail: one timestamped record per committed transition,
    /// oldest first, starting with the construction event.
    pub fn event_log(&self) -> &[EventRecord] {
        &self.event_log
    }

    fn require_owner(&self, caller: Principal) -> Result<(), OwnershipError> {
        if caller != self.owner {
            tracing::warn!(caller = %caller, owner = %self.owner, "caller is not the current owner");
            return Err(OwnershipError::NotOwner {
                caller,
                owner: self.owner,
            });
        }
        Ok(())
    }

    fn commit(&mut self, event: OwnershipEvent) -> OwnershipEvent {
        self.event_log.push(EventRecord::now(event));
        event
    }
}
