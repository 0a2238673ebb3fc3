//! Helpers for producing the integer sequences the demo sorts.

use crate::error::{Result, SortError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parses a comma- and/or whitespace-separated list of integers.
///
/// An empty or blank string yields an empty list.
pub fn parse_values(input: &str) -> Result<Vec<i32>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|err| SortError::invalid_value(token, err.to_string()))
        })
        .collect()
}

/// Draws `count` values from `-1000..1000`. A fixed seed gives a repeatable sequence.
pub fn random_values(count: usize, seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count).map(|_| rng.gen_range(-1000..1000)).collect()
}
