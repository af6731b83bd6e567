//! `RandomSource` implementations.

use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Process-wide default backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: i64) -> i64 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic generator; the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: i64) -> i64 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, cycling when exhausted. Each value is
/// reduced into `[0, bound)`; an empty list always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&mut self, bound: i64) -> i64 {
        let value = match self.values.len() {
            0 => 0,
            len => self.values[self.index % len],
        };
        self.index += 1;
        value.rem_euclid(bound)
    }
}

/// Picks the seeded generator when a seed is configured, the thread RNG otherwise.
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source (seed {})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let left: Vec<i64> = (0..20).map(|_| a.next_below(1000)).collect();
        let right: Vec<i64> = (0..20).map(|_| b.next_below(1000)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|v| (0..1000).contains(v)));
    }

    #[test]
    fn test_thread_random_stays_in_bounds() {
        let mut rng = ThreadRandom::new();
        for _ in 0..100 {
            assert!((0..16).contains(&rng.next_below(16)));
        }
        assert_eq!(rng.next_below(1), 0);
    }

    #[test]
    fn test_sequence_random_cycles() {
        let mut rng = SequenceRandom::new(vec![1, 5, 12]);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.next_below(10), 5);
        assert_eq!(rng.next_below(10), 2);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.draws(), 4);
    }
}
