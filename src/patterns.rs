//! Input pattern generators for the benchmark harness and the tests.
//!
//! Random generation goes through an explicitly owned [`StdRng`] handed in by
//! the caller, there is no process-global generator state. The deterministic
//! patterns ignore the generator entirely.

use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::Rng;

/// Value range of the uniform random pattern.
pub const RANDOM_RANGE: RangeInclusive<i32> = 0..=4000;

/// Value used by [`Pattern::AllEqual`] in the default benchmark cases.
pub const ALL_EQUAL_VALUE: i32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Uniformly distributed values in [`RANDOM_RANGE`], duplicates possible.
    Random,
    /// Strictly increasing values starting at zero.
    Ascending,
    /// Strictly decreasing values ending at zero.
    Descending,
    /// Every element equal to the payload value.
    AllEqual(i32),
}

impl Pattern {
    /// The benchmark cases, in the order the driver reports them.
    pub const ALL: [Pattern; 4] = [
        Pattern::Random,
        Pattern::Ascending,
        Pattern::Descending,
        Pattern::AllEqual(ALL_EQUAL_VALUE),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
            Pattern::AllEqual(_) => "all_equal",
        }
    }

    pub fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<i32> {
        match self {
            Pattern::Random => random_uniform(len, rng),
            Pattern::Ascending => ascending(len),
            Pattern::Descending => descending(len),
            Pattern::AllEqual(val) => all_equal(len, *val),
        }
    }
}

pub fn random_uniform(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(RANDOM_RANGE)).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize, val: i32) -> Vec<i32> {
    vec![val; len]
}

/// Process-wide seed, picked once. Settable via `SORT_BENCH_SEED` to reproduce
/// a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: Lazy<u64> = Lazy::new(|| {
        env::var("SORT_BENCH_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| rand::thread_rng().gen())
    });

    *SEED
}
