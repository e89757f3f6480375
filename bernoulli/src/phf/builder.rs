// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;
use tracing::trace;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::filter::Fingerprint;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::hash::hash_item;
use crate::hash::reduce;
use crate::hash::splitmix64;
use crate::phf::SeededPerfectHash;

const DEFAULT_LOAD_FACTOR: f64 = 1.23;
const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Builder for creating [`SeededPerfectHash`] functions.
///
/// Construction sizes the slot range from the number of distinct keys and the load factor,
/// then tries up to `max_attempts` slot seeds. The first collision-free seed is kept; if none
/// is found, the seed with the fewest colliding keys is kept and its collision fraction becomes
/// the error rate.
///
/// # Examples
///
/// ```
/// use bernoulli::filter::PerfectHash;
/// use bernoulli::phf::SeededPerfectHash;
/// use bernoulli::phf::SeededPerfectHashBuilder;
///
/// let keys: Vec<u64> = (0..20).collect();
/// let hash: SeededPerfectHash<u64> = SeededPerfectHashBuilder::default()
///     .seed(42)
///     .load_factor(10.0)
///     .max_attempts(1_000)
///     .build(&keys)
///     .unwrap();
///
/// assert_eq!(hash.error_rate(), 0.0);
/// assert!(hash.max_slot() < 200);
/// ```
#[derive(Debug, Clone)]
pub struct SeededPerfectHashBuilder {
    seed: u32,
    load_factor: f64,
    max_attempts: u32,
}

impl Default for SeededPerfectHashBuilder {
    fn default() -> Self {
        Self {
            seed: DEFAULT_UPDATE_SEED,
            load_factor: DEFAULT_LOAD_FACTOR,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl SeededPerfectHashBuilder {
    /// Sets the base seed. The slot and fingerprint seeds are derived from it.
    ///
    /// Hash functions built with different seeds are not equal, and neither are the filters
    /// built on them.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the ratio of slots to distinct keys.
    ///
    /// Larger load factors make collision-free seeds easier to find at the cost of space.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is less than 1.0 or not finite.
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        assert!(
            load_factor.is_finite() && load_factor >= 1.0,
            "load_factor must be a finite number of at least 1.0"
        );
        self.load_factor = load_factor;
        self
    }

    /// Sets the maximum number of slot seeds to try.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is 0.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "max_attempts must be at least 1");
        self.max_attempts = max_attempts;
        self
    }

    /// Builds a seeded perfect hash for `keys`. Duplicate keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConstructionFailed`] if the slot range would not fit in memory.
    pub fn build<T, F>(&self, keys: &[T]) -> Result<SeededPerfectHash<T, F>, Error>
    where
        T: Hash + Eq,
        F: Fingerprint,
    {
        let mut seen = HashSet::with_capacity(keys.len());
        let distinct: Vec<&T> = keys.iter().filter(|key| seen.insert(*key)).collect();
        let num_slots = compute_num_slots::<F>(distinct.len(), self.load_factor)?;

        let mut rng_state = u64::from(self.seed);
        let fingerprint_seed = splitmix64(&mut rng_state) as u32;

        let mut occupied = Vec::new();
        occupied.try_reserve_exact(num_slots).map_err(|err| {
            Error::new(
                ErrorKind::ConstructionFailed,
                "failed to allocate perfect hash slots",
            )
            .with_context("slots", num_slots)
            .set_source(err)
        })?;
        occupied.resize(num_slots, false);
        let mut best_seed = self.seed;
        let mut best_lost = usize::MAX;
        let mut attempt_seed = self.seed;
        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                attempt_seed = splitmix64(&mut rng_state) as u32;
            }

            occupied.fill(false);
            let mut lost = 0usize;
            for key in &distinct {
                let slot = reduce(hash_item(*key, attempt_seed), num_slots);
                if occupied[slot] {
                    lost += 1;
                } else {
                    occupied[slot] = true;
                }
            }
            trace!(attempt, seed = attempt_seed, lost, "tried slot seed");

            if lost < best_lost {
                best_seed = attempt_seed;
                best_lost = lost;
            }
            if lost == 0 {
                break;
            }
        }

        let error_rate = if distinct.is_empty() {
            0.0
        } else {
            best_lost as f64 / distinct.len() as f64
        };
        debug!(
            keys = distinct.len(),
            slots = num_slots,
            seed = best_seed,
            error_rate,
            "built seeded perfect hash"
        );
        Ok(SeededPerfectHash::new(
            best_seed,
            fingerprint_seed,
            num_slots,
            error_rate,
        ))
    }

    /// Turns this configuration into a construction strategy for
    /// [`BernoulliFilter`](crate::filter::BernoulliFilter).
    pub fn strategy<T, F>(
        self,
    ) -> impl Fn(&[T]) -> Result<SeededPerfectHash<T, F>, Error> + Clone
    where
        T: Hash + Eq,
        F: Fingerprint,
    {
        move |keys: &[T]| self.build(keys)
    }
}

/// Returns `max(1, ceil(num_keys * load_factor))`, refusing slot counts whose fingerprint
/// table could never be allocated.
fn compute_num_slots<F: Fingerprint>(num_keys: usize, load_factor: f64) -> Result<usize, Error> {
    let max_slots = isize::MAX as usize / size_of::<F>();
    let estimated = (num_keys as f64 * load_factor).ceil();
    if estimated >= max_slots as f64 {
        return Err(Error::new(
            ErrorKind::ConstructionFailed,
            "key set too large to allocate perfect hash slots",
        )
        .with_context("keys", num_keys)
        .with_context("load_factor", load_factor)
        .with_context("slots", estimated));
    }
    Ok((estimated as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PerfectHash;

    #[test]
    fn test_num_slots() {
        assert_eq!(compute_num_slots::<u8>(0, 1.23).unwrap(), 1);
        assert_eq!(compute_num_slots::<u8>(100, 1.0).unwrap(), 100);
        assert_eq!(compute_num_slots::<u16>(100, 1.23).unwrap(), 123);
        let err = compute_num_slots::<u8>(usize::MAX, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);
    }

    #[test]
    fn test_num_slots_limited_by_fingerprint_width() {
        let err = compute_num_slots::<u8>(100, 1e17).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);

        // 2^60 one-byte slots fit the address space, 2^60 eight-byte slots do not.
        assert!(compute_num_slots::<u8>(1 << 60, 1.0).is_ok());
        let err = compute_num_slots::<u64>(1 << 60, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);
    }

    #[test]
    fn test_huge_load_factor_is_an_error() {
        let keys: Vec<u64> = (0..100).collect();
        let err = SeededPerfectHashBuilder::default()
            .load_factor(1e17)
            .build::<u64, u8>(&keys)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);
        assert_eq!(err.context("keys"), Some("100"));
    }

    #[test]
    fn test_empty_keys() {
        let hash: SeededPerfectHash<u64> = SeededPerfectHashBuilder::default()
            .build::<u64, u8>(&[])
            .unwrap();
        assert_eq!(hash.max_slot(), 0);
        assert_eq!(hash.error_rate(), 0.0);
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let keys = [1u64, 2, 2, 3, 3, 3];
        let hash: SeededPerfectHash<u64> = SeededPerfectHashBuilder::default()
            .load_factor(20.0)
            .max_attempts(500)
            .build(&keys)
            .unwrap();
        assert_eq!(hash.num_slots(), 60);
        assert_eq!(hash.error_rate(), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let keys: Vec<u64> = (0..500).collect();
        let builder = SeededPerfectHashBuilder::default().seed(7);
        let a: SeededPerfectHash<u64> = builder.build(&keys).unwrap();
        let b: SeededPerfectHash<u64> = builder.build(&keys).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_attempt_reports_collisions() {
        // 1000 keys in 1000 slots lose roughly a third of the keys to collisions.
        let keys: Vec<u64> = (0..1_000).collect();
        let hash: SeededPerfectHash<u64> = SeededPerfectHashBuilder::default()
            .load_factor(1.0)
            .max_attempts(1)
            .build(&keys)
            .unwrap();
        assert!(hash.error_rate() > 0.2, "error rate is {}", hash.error_rate());
        assert!(hash.error_rate() < 0.5, "error rate is {}", hash.error_rate());
    }

    #[test]
    #[should_panic(expected = "max_attempts must be at least 1")]
    fn test_zero_attempts() {
        let _ = SeededPerfectHashBuilder::default().max_attempts(0);
    }

    #[test]
    #[should_panic(expected = "load_factor must be a finite number of at least 1.0")]
    fn test_small_load_factor() {
        let _ = SeededPerfectHashBuilder::default().load_factor(0.5);
    }
}
