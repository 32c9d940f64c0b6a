#![cfg(test)]
use luhn_common::{DigitString, LuhnError};
use luhn_core::random;
use luhn_core::{compute_check_digit, generate_number, is_valid};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The textbook example: 7992739871 completes to 79927398713.
#[test]
fn classic_example() {
    assert_eq!(compute_check_digit("7992739871"), '3');
    assert!(is_valid("79927398713"));
    assert!(!is_valid("79927398710"));
    assert_eq!(generate_number("7992739871").unwrap(), "79927398713");
}

#[test]
fn zero_check_digit_stays_single_character() {
    assert_eq!(compute_check_digit("0"), '0');

    let number = generate_number("0").unwrap();
    assert_eq!(number, "00");
    assert_eq!(number.len(), 2);
}

#[test]
fn generate_rejects_non_digit_strings() {
    let inputs = ["abc", "", " 123", "123 ", "+123", "-123", "12.3", "1e5", "１２３"];

    for input in inputs {
        let result = generate_number(input);
        assert!(
            matches!(result, Err(LuhnError::InvalidArgument { .. })),
            "'{input}' was accepted: {result:?}"
        );
    }
}

/// Numbers taken from public test card and device identifier lists.
#[test]
fn real_world_identifiers() {
    let valid = [
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "490154203237518",
        "1234567897",
    ];

    for number in valid {
        assert!(is_valid(number), "{number} should be valid");

        let (partial, check) = number.split_at(number.len() - 1);
        assert_eq!(compute_check_digit(partial).to_string(), check);
    }
}

#[test]
fn leading_zeros_are_preserved() {
    let number = generate_number("0000123").unwrap();
    assert!(number.starts_with("0000123"));
    assert_eq!(number.len(), 8);
    assert!(is_valid(&number));
}

#[test]
fn identifiers_longer_than_native_integers() {
    let partial = "9".repeat(100);
    let number = generate_number(&partial).unwrap();
    assert_eq!(number.len(), 101);
    assert!(is_valid(&number));
}

#[test]
fn digit_string_feeds_generate() {
    let partial: DigitString = "401288888888188".parse().unwrap();
    let number = generate_number(partial.as_str()).unwrap();
    assert_eq!(number, "4012888888881881");
}

#[test]
fn random_numbers_with_prefix() {
    let mut rng = StdRng::seed_from_u64(2024);
    let numbers = random::random_numbers(&mut rng, "4", 16, 50).unwrap();

    assert_eq!(numbers.len(), 50);
    for number in &numbers {
        assert_eq!(number.len(), 16);
        assert!(number.starts_with('4'));
        assert!(is_valid(number));
    }
}
