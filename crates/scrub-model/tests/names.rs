use proptest::prelude::*;
use scrub_model::canonical_names;

fn is_canonical(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

proptest! {
    #[test]
    fn canonicalized_headers_are_unique_and_well_formed(
        raw in proptest::collection::vec(".{0,24}", 0..12)
    ) {
        let names = canonical_names(&raw);
        prop_assert_eq!(names.len(), raw.len());
        for name in &names {
            prop_assert!(is_canonical(name), "bad name: {:?}", name);
        }
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), names.len(), "duplicate names in {:?}", names);
    }

    #[test]
    fn canonicalization_is_idempotent(raw in ".{0,24}") {
        let first = canonical_names(&[raw])[0].clone();
        let second = canonical_names(&[first.clone()])[0].clone();
        prop_assert_eq!(first, second);
    }
}
