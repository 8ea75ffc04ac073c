//! # Universally-Quantified Rejection Properties
//!
//! Property tests over arbitrary principals: callers other than the owner
//! (or nominee, for accept) are always rejected, and a rejection never
//! changes `(owner, nominee)` or the audit log.

use proptest::prelude::*;

use handover_core::Principal;
use handover_registry::{OwnershipError, OwnershipRegistry, RENOUNCE_CONFIRMATION};

fn arb_principal() -> impl Strategy<Value = Principal> {
    prop::array::uniform20(any::<u8>()).prop_map(Principal::from_bytes)
}

const OWNER: Principal = Principal::from_bytes([0xaa; 20]);
const NOMINEE: Principal = Principal::from_bytes([0xbb; 20]);

fn snapshot(registry: &OwnershipRegistry) -> (Principal, Principal, usize) {
    (
        registry.current_owner(),
        registry.pending_nominee(),
        registry.event_log().len(),
    )
}

proptest! {
    #[test]
    fn non_owner_mutations_are_rejected_without_effect(caller in arb_principal(), candidate in arb_principal()) {
        prop_assume!(caller != OWNER);

        let mut registry = OwnershipRegistry::new(OWNER).unwrap();
        let before = snapshot(&registry);

        prop_assert!(matches!(
            registry.nominate(caller, candidate).unwrap_err(),
            OwnershipError::NotOwner { .. }
        ), "expected NotOwner from nominate");
        prop_assert!(matches!(
            registry.renounce(caller, RENOUNCE_CONFIRMATION).unwrap_err(),
            OwnershipError::NotOwner { .. }
        ), "expected NotOwner from renounce");
        prop_assert_eq!(snapshot(&registry), before);
    }

    #[test]
    fn only_the_nominee_can_accept(caller in arb_principal()) {
        let mut registry = OwnershipRegistry::new(OWNER).unwrap();
        registry.nominate(OWNER, NOMINEE).unwrap();
        let before = snapshot(&registry);

        if caller == NOMINEE {
            registry.accept(caller).unwrap();
            prop_assert_eq!(registry.current_owner(), NOMINEE);
            prop_assert_eq!(registry.pending_nominee(), NOMINEE);
        } else {
            prop_assert!(matches!(
                registry.accept(caller).unwrap_err(),
                OwnershipError::NotNominee { .. }
            ), "expected NotNominee from accept");
            prop_assert_eq!(snapshot(&registry), before);
        }
    }

    #[test]
    fn accept_without_nomination_never_succeeds(caller in arb_principal()) {
        let mut registry = OwnershipRegistry::new(OWNER).unwrap();
        let before = snapshot(&registry);

        prop_assert!(matches!(
            registry.accept(caller).unwrap_err(),
            OwnershipError::NoPendingNomination
        ));
        prop_assert_eq!(snapshot(&registry), before);
    }

    #[test]
    fn wrong_phrase_never_renounces(phrase in ".*") {
        prop_assume!(phrase != RENOUNCE_CONFIRMATION);

        let mut registry = OwnershipRegistry::new(OWNER).unwrap();
        let before = snapshot(&registry);

        prop_assert!(matches!(
            registry.renounce(OWNER, &phrase).unwrap_err(),
            OwnershipError::ConfirmationMismatch
        ));
        prop_assert_eq!(snapshot(&registry), before);
    }
}
