//! # Ownership Errors
//!
//! Structured rejection reasons for registry operations. Every rejection
//! leaves the registry unchanged and is observably distinct from a
//! successful no-op: success returns an event, rejection returns one of
//! these variants.

use thiserror::Error;

use handover_core::Principal;

/// Why a registry operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwnershipError {
    /// The caller is not the current owner. Covers nominate and renounce;
    /// after renouncement the owner slot holds the sentinel, which no
    /// caller equals, so this variant also covers the renounced state.
    #[error("caller {caller} is not the current owner ({owner})")]
    NotOwner {
        /// The principal that attempted the operation.
        caller: Principal,
        /// The owner at the time of the attempt.
        owner: Principal,
    },

    /// Construction was attempted with the sentinel as initial owner.
    #[error("initial owner must be a concrete principal, not the sentinel")]
    SentinelOwner,

    /// Nomination of the sentinel, i.e. nominating "no one".
    #[error("cannot nominate the sentinel principal")]
    SentinelNominee,

    /// The owner attempted to nominate itself.
    #[error("owner {owner} cannot nominate itself")]
    SelfNomination {
        /// The owner that attempted the self-nomination.
        owner: Principal,
    },

    /// Accept was attempted while no nomination is pending.
    #[error("no pending nomination to accept")]
    NoPendingNomination,

    /// Accept was attempted by a principal other than the nominee. The
    /// current owner cannot force-accept on the nominee's behalf.
    #[error("caller {caller} is not the nominated owner ({nominee})")]
    NotNominee {
        /// The principal that attempted to accept.
        caller: Principal,
        /// The pending nominee at the time of the attempt.
        nominee: Principal,
    },

    /// The renounce confirmation phrase did not match exactly.
    #[error("renounce confirmation phrase mismatch")]
    ConfirmationMismatch,
}

/// Coarse classification of a rejection, for hosts that map rejections
/// onto a generic failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller lacks the role the operation requires.
    Unauthorized,
    /// An argument was structurally invalid for the operation.
    InvalidArgument,
    /// Accept was attempted with no nominee set.
    NoPendingNomination,
}

impl OwnershipError {
    /// Classify this rejection into the coarse taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotOwner { .. } | Self::NotNominee { .. } => ErrorKind::Unauthorized,
            Self::SentinelOwner
            | Self::SentinelNominee
            | Self::SelfNomination { .. }
            | Self::ConfirmationMismatch => ErrorKind::InvalidArgument,
            Self::NoPendingNomination => ErrorKind::NoPendingNomination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_owner_display_names_both_parties() {
        let err = OwnershipError::NotOwner {
            caller: Principal::from_bytes([1u8; 20]),
            owner: Principal::from_bytes([2u8; 20]),
        };
        let msg = format!("{err}");
        assert!(msg.contains("0x0101"));
        assert!(msg.contains("0x0202"));
    }

    #[test]
    fn kinds_partition_the_variants() {
        assert_eq!(
            OwnershipError::NotOwner {
                caller: Principal::SENTINEL,
                owner: Principal::SENTINEL,
            }
            .kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            OwnershipError::NotNominee {
                caller: Principal::SENTINEL,
                nominee: Principal::SENTINEL,
            }
            .kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            OwnershipError::SentinelNominee.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            OwnershipError::ConfirmationMismatch.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            OwnershipError::NoPendingNomination.kind(),
            ErrorKind::NoPendingNomination
        );
    }
}
