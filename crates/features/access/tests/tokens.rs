use fxhash::FxHashMap;
use wichtel_access::{AccessError, PendingAssignments};
use wichtel_domain::constants::TOKEN_LENGTH;

fn sample_mapping() -> FxHashMap<String, String> {
    let mut mapping = FxHashMap::default();
    mapping.insert("Alice".to_owned(), "Bob".to_owned());
    mapping.insert("Bob".to_owned(), "Alice".to_owned());
    mapping
}

#[test]
fn issued_tokens_are_well_formed_and_unique() {
    let pending = PendingAssignments::new();

    let first = pending.issue(sample_mapping());
    let second = pending.issue(sample_mapping());

    assert_eq!(first.len(), TOKEN_LENGTH);
    assert_ne!(first, second);
    assert!(PendingAssignments::is_well_formed(&first));
    assert_eq!(pending.len(), 2);
}

#[test]
fn redemption_is_one_shot() {
    let pending = PendingAssignments::new();
    let token = pending.issue(sample_mapping());

    let mapping = pending.redeem(&token).expect("first redemption succeeds");
    assert_eq!(mapping["Alice"], "Bob");
    assert!(pending.is_empty());

    let err = pending.redeem(&token).unwrap_err();
    assert_eq!(err, AccessError::UnknownToken);
}

#[test]
fn malformed_tokens_are_rejected_before_lookup() {
    let pending = PendingAssignments::new();
    pending.issue(sample_mapping());

    assert_eq!(pending.redeem("").unwrap_err(), AccessError::MalformedToken);
    assert_eq!(pending.redeem("too-short").unwrap_err(), AccessError::MalformedToken);
    // Right length, but '0' and 'O' are outside the safe alphabet.
    let bad = "0".repeat(TOKEN_LENGTH);
    assert_eq!(pending.redeem(&bad).unwrap_err(), AccessError::MalformedToken);

    assert_eq!(pending.len(), 1);
}

#[test]
fn clear_drops_all_outstanding_links() {
    let pending = PendingAssignments::new();
    let token = pending.issue(sample_mapping());
    pending.issue(sample_mapping());

    pending.clear();

    assert!(pending.is_empty());
    assert!(!pending.contains(&token));
    assert_eq!(pending.redeem(&token).unwrap_err(), AccessError::UnknownToken);
}
