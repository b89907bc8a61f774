//! Property-Based Tests for Payload Module
//!
//! Uses proptest to check the pure parts of payload generation.

use proptest::prelude::*;

use crate::payload::{compute_input_hash, interleave, validate_lists, OUTPUT_SEPARATOR};
use crate::transform::uppercase;

// == Strategies ==
/// Generates list elements without commas so outputs can be split back
fn element_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}"
}

/// Generates two non-empty lists of the same length
fn paired_lists_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    (1usize..20).prop_flat_map(|len| {
        (
            prop::collection::vec(element_strategy(), len),
            prop::collection::vec(element_strategy(), len),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every even position comes from list1, every odd position from list2.
    #[test]
    fn prop_interleave_alternates((list1, list2) in paired_lists_strategy()) {
        let t1: Vec<String> = list1.iter().map(|s| uppercase(s)).collect();
        let t2: Vec<String> = list2.iter().map(|s| uppercase(s)).collect();
        let output = interleave(&t1, &t2);

        let parts: Vec<&str> = output.split(OUTPUT_SEPARATOR).collect();
        prop_assert_eq!(parts.len(), t1.len() * 2);
        for (i, part) in parts.iter().enumerate() {
            let expected = if i % 2 == 0 { &t1[i / 2] } else { &t2[i / 2] };
            prop_assert_eq!(*part, expected.as_str());
        }
    }

    // Hashing is a pure function of the ordered inputs.
    #[test]
    fn prop_hash_deterministic((list1, list2) in paired_lists_strategy()) {
        let a = compute_input_hash(&list1, &list2).unwrap();
        let b = compute_input_hash(&list1.clone(), &list2.clone()).unwrap();
        prop_assert_eq!(a.len(), 64);
        prop_assert_eq!(a, b);
    }

    // Swapping the lists changes the digest unless they are identical.
    #[test]
    fn prop_hash_distinguishes_lists((list1, list2) in paired_lists_strategy()) {
        prop_assume!(list1 != list2);
        let forward = compute_input_hash(&list1, &list2).unwrap();
        let swapped = compute_input_hash(&list2, &list1).unwrap();
        prop_assert_ne!(forward, swapped);
    }

    // Equal-length non-empty lists validate; any length mismatch does not.
    #[test]
    fn prop_validation_matches_lengths(
        list1 in prop::collection::vec(element_strategy(), 0..8),
        list2 in prop::collection::vec(element_strategy(), 0..8),
    ) {
        let valid = !list1.is_empty() && list1.len() == list2.len();
        prop_assert_eq!(validate_lists(&list1, &list2).is_ok(), valid);
    }
}
