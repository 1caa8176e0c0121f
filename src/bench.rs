//! The benchmark runner: repeated timed trials of one or two sort
//! implementations over generated inputs, reduced to a mean per algorithm.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::patterns::{self, Pattern};
use crate::Sort;

/// Trials per (size, pattern) configuration used by the driver.
pub const DEFAULT_TRIALS: u32 = 250;

/// Monotonic time source. `now` reports the time since some fixed arbitrary
/// epoch, only differences between readings carry meaning. Injected so the
/// accumulation arithmetic is testable with a scripted clock.
pub trait Clock {
    fn now(&mut self) -> Duration;
}

pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.epoch.elapsed()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub len: usize,
    pub trials: u32,
    pub seed: u64,
}

impl BenchConfig {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            trials: DEFAULT_TRIALS,
            seed: patterns::random_init_seed(),
        }
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Mean elapsed nanoseconds of one algorithm under one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub mean_ns: f64,
}

/// Both algorithms measured over the same trial inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: Measurement,
    pub second: Measurement,
}

impl Comparison {
    /// Name of the faster algorithm. An exact tie goes to the second one.
    pub fn verdict(&self) -> &str {
        if self.first.mean_ns < self.second.mean_ns {
            &self.first.name
        } else {
            &self.second.name
        }
    }
}

/// Times `S` once per trial over freshly generated inputs and returns the mean
/// elapsed nanoseconds. Input generation happens outside the timed interval.
pub fn run<S: Sort>(cfg: &BenchConfig, pattern: Pattern, clock: &mut impl Clock) -> f64 {
    assert!(cfg.trials > 0, "trial count must be positive");

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut total = Duration::ZERO;

    for _ in 0..cfg.trials {
        let mut v = pattern.generate(cfg.len, &mut rng);

        let start = clock.now();
        S::sort(&mut v);
        total += clock.now() - start;
    }

    mean_ns(total, cfg.trials)
}

/// Times `A` and `B` per trial on element-wise identical copies of the same
/// generated input. Every trial regenerates a fresh input, deterministic
/// patterns included, and both copies exist before either timer starts.
pub fn run_pair<A: Sort, B: Sort>(
    cfg: &BenchConfig,
    pattern: Pattern,
    clock: &mut impl Clock,
) -> Comparison {
    assert!(cfg.trials > 0, "trial count must be positive");

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut total_first = Duration::ZERO;
    let mut total_second = Duration::ZERO;

    for _ in 0..cfg.trials {
        let mut first_copy = pattern.generate(cfg.len, &mut rng);
        let mut second_copy = first_copy.clone();

        let start = clock.now();
        A::sort(&mut first_copy);
        total_first += clock.now() - start;

        let start = clock.now();
        B::sort(&mut second_copy);
        total_second += clock.now() - start;
    }

    Comparison {
        first: Measurement {
            name: A::name(),
            mean_ns: mean_ns(total_first, cfg.trials),
        },
        second: Measurement {
            name: B::name(),
            mean_ns: mean_ns(total_second, cfg.trials),
        },
    }
}

fn mean_ns(total: Duration, trials: u32) -> f64 {
    total.as_nanos() as f64 / trials as f64
}
