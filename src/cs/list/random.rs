//! Random list generation for exercises and benchmarks.

use std::ops::RangeInclusive;

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::linked_list::LinkedList;
use crate::error::{Error, Result};

/// Default number of nodes in a generated list.
pub const DEFAULT_SIZE: usize = 50;

/// Default smallest generated value.
pub const DEFAULT_MIN: i64 = 0;

/// Default largest generated value.
pub const DEFAULT_MAX: i64 = 100;

/// Builds random `LinkedList<i64>` values.
///
/// Typically you'll call `.size(...)`, `.range(...)`, `.seed(...)`, then `.build()`.
///
/// ```rust
/// use linklab::RandomListBuilder;
///
/// let a = RandomListBuilder::new().size(10).seed(7).build().unwrap();
/// let b = RandomListBuilder::new().size(10).seed(7).build().unwrap();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|v| (0..=100).contains(v)));
/// ```
#[derive(Debug, Clone)]
pub struct RandomListBuilder {
    size: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
}

impl Default for RandomListBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl RandomListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes to generate.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Inclusive range the values are drawn from.
    pub fn range(mut self, range: RangeInclusive<i64>) -> Self {
        self.min = *range.start();
        self.max = *range.end();
        self
    }

    /// Makes generation deterministic by seeding a ChaCha20 generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates the list with the configured seed, or the thread-local
    /// generator when no seed was set.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRange`] if the configured range holds no values.
    pub fn build(&self) -> Result<LinkedList<i64>> {
        match self.seed {
            Some(seed) => self.build_with(&mut ChaCha20Rng::seed_from_u64(seed)),
            None => self.build_with(&mut rand::thread_rng()),
        }
    }

    /// Generates the list from a caller-supplied generator; the seed is ignored.
    pub fn build_with<R: Rng>(&self, rng: &mut R) -> Result<LinkedList<i64>> {
        if self.min > self.max {
            return Err(Error::EmptyRange {
                low: self.min,
                high: self.max,
            });
        }
        trace!(
            "generating {} values in {}..={}",
            self.size,
            self.min,
            self.max
        );
        Ok((0..self.size)
            .map(|_| rng.gen_range(self.min..=self.max))
            .collect())
    }
}

/// A list of `size` values drawn uniformly from `0..=100`.
pub fn random_list(size: usize) -> LinkedList<i64> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| rng.gen_range(DEFAULT_MIN..=DEFAULT_MAX))
        .collect()
}
