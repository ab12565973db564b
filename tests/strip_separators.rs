//! Properties of package name normalisation.

use hover_packaging::bundler::strip_separators;
use proptest::prelude::*;

proptest! {
    #[test]
    fn result_has_no_separators(name in "\\PC*") {
        let stripped = strip_separators(&name);
        prop_assert!(!stripped.contains('-'));
        prop_assert!(!stripped.contains('_'));
    }

    #[test]
    fn stripping_is_idempotent(name in "[a-z0-9_-]{0,32}") {
        let once = strip_separators(&name);
        prop_assert_eq!(strip_separators(&once), once.clone());
    }

    #[test]
    fn other_characters_are_kept_in_order(name in "\\PC*") {
        let expected: String = name.chars().filter(|c| *c != '-' && *c != '_').collect();
        prop_assert_eq!(strip_separators(&name), expected);
    }
}
