#![cfg(test)]
use std::thread;

use luhn_core::{compute_check_digit, generate_number, is_valid};
use rayon::prelude::*;

/// Many threads hammering the same inputs must agree with a sequential run.
#[test]
fn parallel_results_match_sequential() {
    let partials: Vec<String> = (0..5_000u64).map(|n| format!("{n:015}")).collect();

    let sequential: Vec<String> = partials
        .iter()
        .map(|p| generate_number(p).unwrap())
        .collect();
    let parallel: Vec<String> = partials
        .par_iter()
        .map(|p| generate_number(p).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
    assert!(parallel.par_iter().all(|n| is_valid(n)));
}

#[test]
fn scoped_threads_share_input() {
    let partial = String::from("7992739871");

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| compute_check_digit(&partial)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), '3');
        }
    });
}
