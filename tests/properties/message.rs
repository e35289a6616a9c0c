//! Property tests for commit message composition.

use proptest::prelude::*;

use ghpages::application::resolve::compose_message;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a non-empty suffix always ends the message, after one space.
    #[test]
    fn property_suffix_ends_message(
        message in "(?s).{1,64}",
        suffix in "[A-Za-z\\[\\] ]{1,20}",
    ) {
        let composed = compose_message(&message, Some(&suffix));

        let expected_tail = format!(" {}", suffix);
        prop_assert!(composed.ends_with(&expected_tail));
        prop_assert!(composed.starts_with(message.trim_end()));
    }

    /// PROPERTY: without a suffix the message is untouched.
    #[test]
    fn property_no_suffix_is_identity(message in "(?s).{0,64}") {
        prop_assert_eq!(compose_message(&message, None), message.clone());
        prop_assert_eq!(compose_message(&message, Some("")), message);
    }
}
