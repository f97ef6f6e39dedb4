//! Seeded pseudo-random stream shared by every stage of a run.
//!
//! All randomness in the pipeline flows through one [`DeterministicStream`].
//! A seeded stream follows the Park-Miller minimal standard recurrence
//! (`state = state * 16807 mod 2^31-1`), so two streams built from the same
//! seed and consumed in the same order yield identical values.
//!
//! Every helper (`int_in`, `pick`, `date_between`, `shuffle`, ...) is defined
//! purely in terms of [`DeterministicStream::next_f64`], which keeps
//! reproducibility transitive.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

#[derive(Debug, Clone)]
enum StreamSource {
    /// Park-Miller state, always within `1..MODULUS`.
    Lehmer { state: i64 },
    /// Non-reproducible source for unseeded runs.
    Entropy(StdRng),
}

/// The single random source of a generation run.
#[derive(Debug, Clone)]
pub struct DeterministicStream {
    source: StreamSource,
    seed: Option<i64>,
    draws: u64,
}

impl DeterministicStream {
    /// Create a reproducible stream from an integer seed.
    pub fn seeded(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self {
            source: StreamSource::Lehmer { state },
            seed: Some(seed),
            draws: 0,
        }
    }

    /// Create a stream backed by operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            source: StreamSource::Entropy(StdRng::from_entropy()),
            seed: None,
            draws: 0,
        }
    }

    /// Seeded when `seed` is present, entropy-backed otherwise.
    pub fn new(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this stream was built from, if any.
    #[must_use]
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        match &mut self.source {
            StreamSource::Lehmer { state } => {
                *state = (*state * MULTIPLIER) % MODULUS;
                (*state - 1) as f64 / (MODULUS - 1) as f64
            }
            StreamSource::Entropy(rng) => rng.gen::<f64>(),
        }
    }

    /// Bernoulli trial that succeeds with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Integer in `[min, max_exclusive)`.
    ///
    /// Returns `min` without consuming a draw when the range is empty.
    pub fn int_in(&mut self, min: i64, max_exclusive: i64) -> i64 {
        if max_exclusive <= min {
            return min;
        }
        let span = (max_exclusive - min) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        min + offset.min(max_exclusive - min - 1)
    }

    /// Index in `[0, len)`. `len` must be non-zero.
    fn index_below(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len - 1)
    }

    /// Uniformly pick one element. `None` (and no draw) for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index_below(items.len());
        items.get(index)
    }

    /// Instant uniformly between `start` and `end`, at millisecond resolution.
    pub fn date_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span_ms = (end - start).num_milliseconds();
        let offset_ms = (self.next_f64() * span_ms as f64) as i64;
        start + Duration::milliseconds(offset_ms)
    }

    /// Unbiased in-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Move a uniform random `k`-subset of `items` to the front.
    ///
    /// Fisher-Yates truncated after `k` steps; the first `k` elements are an
    /// unbiased sample without replacement, in random order.
    pub fn partial_shuffle<T>(&mut self, items: &mut [T], k: usize) {
        let len = items.len();
        for i in 0..k.min(len) {
            let j = i + self.index_below(len - i);
            items.swap(i, j);
        }
    }
}
