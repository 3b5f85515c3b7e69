//! Property-based tests for component validation.

use super::fixtures::arduino_uno;
use super::{DATASHEET_URL_MAX_LEN, NAME_MAX_LEN, TYPE_MAX_LEN, VERSION_MAX_LEN};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Any non-blank name within the limit is accepted
    #[test]
    fn name_within_limit_accepted(name in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,99}") {
        let mut fields = arduino_uno();
        fields.name = name;
        prop_assert!(fields.validate().is_ok());
    }

    // Names over the limit are always rejected, and only the name is reported
    #[test]
    fn name_over_limit_rejected(extra in 1usize..50) {
        let mut fields = arduino_uno();
        fields.name = "n".repeat(NAME_MAX_LEN + extra);
        let err = fields.validate().unwrap_err();
        prop_assert_eq!(err.violations.len(), 1);
        prop_assert_eq!(err.violations[0].field.as_str(), "name");
    }

    // Each limit is inclusive
    #[test]
    fn limits_are_inclusive(
        type_len in 1usize..=TYPE_MAX_LEN,
        version_len in 0usize..=VERSION_MAX_LEN,
        url_len in 0usize..=DATASHEET_URL_MAX_LEN,
    ) {
        let mut fields = arduino_uno();
        fields.component_type = "t".repeat(type_len);
        fields.version = Some("v".repeat(version_len));
        fields.datasheet_url = "u".repeat(url_len);
        prop_assert!(fields.validate().is_ok());
    }

    // Amount never affects validity
    #[test]
    fn any_amount_accepted(amount in any::<i64>()) {
        let mut fields = arduino_uno();
        fields.amount = amount;
        prop_assert!(fields.validate().is_ok());
    }
}
