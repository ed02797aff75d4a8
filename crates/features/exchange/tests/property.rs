use proptest::prelude::*;
use wichtel_exchange::assign::assign;

proptest! {
    #[test]
    fn assignment_is_a_derangement_bijection(
        names in proptest::collection::hash_set("[a-z]{1,12}", 2..24)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mapping = assign(&names).expect("two or more names must produce a mapping");

        // Bijection: every name appears exactly once as giver and once as receiver.
        prop_assert_eq!(mapping.len(), names.len());
        let mut receivers: Vec<&String> = mapping.values().collect();
        receivers.sort_unstable();
        receivers.dedup();
        prop_assert_eq!(receivers.len(), names.len());
        for name in &names {
            prop_assert!(mapping.contains_key(name));
        }

        // No fixed points.
        for (giver, receiver) in &mapping {
            prop_assert_ne!(giver, receiver);
        }
    }

    #[test]
    fn single_name_never_produces_a_mapping(name in "[a-z]{1,12}") {
        prop_assert!(assign(&[name]).is_none());
    }
}
