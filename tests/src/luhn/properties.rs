#![cfg(test)]
use luhn_core::{compute_check_digit, generate_number, is_valid};
use proptest::prelude::*;

fn digit_string() -> impl Strategy<Value = String> {
    "[0-9]{1,40}"
}

proptest! {
    #[test]
    fn appended_check_digit_validates(s in digit_string()) {
        let check = compute_check_digit(&s);
        prop_assert!(check.is_ascii_digit());
        let candidate = format!("{s}{check}");
        prop_assert!(is_valid(&candidate));
    }

    #[test]
    fn generated_numbers_validate(s in digit_string()) {
        let number = generate_number(&s).unwrap();
        prop_assert_eq!(number.len(), s.len() + 1);
        prop_assert!(number.starts_with(&s));
        prop_assert!(is_valid(&number));
    }

    #[test]
    fn generate_is_deterministic(s in digit_string()) {
        prop_assert_eq!(generate_number(&s).unwrap(), generate_number(&s).unwrap());
    }

    #[test]
    fn exactly_one_check_digit_fits(s in digit_string()) {
        let valid: Vec<char> = ('0'..='9')
            .filter(|d| is_valid(&format!("{s}{d}")))
            .collect();
        prop_assert_eq!(valid, vec![compute_check_digit(&s)]);
    }

    #[test]
    fn single_digit_substitution_is_detected(
        s in digit_string(),
        idx in any::<prop::sample::Index>(),
        delta in 1u8..10,
    ) {
        let mut bytes = generate_number(&s).unwrap().into_bytes();
        let pos = idx.index(bytes.len());
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;

        let corrupted = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_valid(&corrupted));
    }

    #[test]
    fn generate_rejects_strings_with_a_non_digit(
        prefix in "[0-9]{0,10}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,10}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        let err = generate_number(&input).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }
}
