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

use std::fmt;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::filter::BernoulliFilter;
use crate::filter::Fingerprint;
use crate::filter::PerfectHash;
use crate::filter::sketch::build_fingerprints;

/// Builder for creating Bernoulli filters.
///
/// The builder owns the perfect hash construction strategy, a function from the input items to
/// a perfect hash, so one configuration can build any number of filters.
///
/// # Examples
///
/// ```
/// use bernoulli::filter::BernoulliFilter;
/// use bernoulli::phf::SeededPerfectHash;
/// use bernoulli::phf::SeededPerfectHashBuilder;
///
/// let builder = BernoulliFilter::<SeededPerfectHash<u64, u16>>::builder(
///     SeededPerfectHashBuilder::default().strategy::<u64, u16>(),
/// )
/// .max_false_positive_rate(0.001);
///
/// let keys: Vec<u64> = (0..100).collect();
/// let filter: BernoulliFilter<SeededPerfectHash<u64, u16>> = builder.build(&keys).unwrap();
/// assert!(filter.false_positive_rate() <= 0.001);
/// ```
#[derive(Clone)]
pub struct BernoulliFilterBuilder<S> {
    strategy: S,
    max_fpr: Option<f64>,
    max_fnr: Option<f64>,
    reject_collisions: bool,
}

impl<S> BernoulliFilterBuilder<S> {
    /// Creates a builder around a perfect hash construction strategy.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_fpr: None,
            max_fnr: None,
            reject_collisions: false,
        }
    }

    /// Sets the largest acceptable false positive rate.
    ///
    /// The false positive rate is fixed by the fingerprint width, so a target that the
    /// fingerprint type cannot meet fails the build before any hashing is done.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not in `[0.0, 1.0]`.
    pub fn max_false_positive_rate(mut self, rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&rate),
            "false positive rate must be between 0.0 and 1.0"
        );
        self.max_fpr = Some(rate);
        self
    }

    /// Sets the largest acceptable false negative rate.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not in `[0.0, 1.0]`.
    pub fn max_false_negative_rate(mut self, rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&rate),
            "false negative rate must be between 0.0 and 1.0"
        );
        self.max_fnr = Some(rate);
        self
    }

    /// Fails the build when two items land in the same slot instead of letting the later item
    /// overwrite the earlier one.
    ///
    /// Off by default.
    pub fn reject_collisions(mut self, reject: bool) -> Self {
        self.reject_collisions = reject;
        self
    }

    /// Clears every option, keeping the strategy.
    pub fn reset(self) -> Self {
        Self::new(self.strategy)
    }

    /// Builds a filter for `items`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::ConfigInvalid`] if a rate target cannot be met.
    /// - [`ErrorKind::SlotCollision`] if collisions are rejected and two items share a slot.
    /// - [`ErrorKind::ContractViolation`] if the perfect hash sends an item past `max_slot()`.
    /// - Any error reported by the strategy.
    pub fn build<P>(&self, items: &[P::Item]) -> Result<BernoulliFilter<P>, Error>
    where
        P: PerfectHash,
        S: Fn(&[P::Item]) -> Result<P, Error>,
    {
        if let Some(target) = self.max_fpr {
            let fpr = P::Fingerprint::false_positive_rate();
            if fpr > target {
                return Err(Error::new(
                    ErrorKind::ConfigInvalid,
                    "fingerprint width cannot meet the false positive rate target",
                )
                .with_context("target", target)
                .with_context("fpr", fpr));
            }
        }

        let hash = (self.strategy)(items)?;
        let fingerprints = build_fingerprints(&hash, items, self.reject_collisions)?;
        let filter = BernoulliFilter { hash, fingerprints };

        if let Some(target) = self.max_fnr {
            let fnr = filter.false_negative_rate();
            if fnr > target {
                return Err(Error::new(
                    ErrorKind::ConfigInvalid,
                    "perfect hash error rate exceeds the false negative rate target",
                )
                .with_context("target", target)
                .with_context("fnr", fnr));
            }
        }

        Ok(filter)
    }
}

impl<S> fmt::Debug for BernoulliFilterBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BernoulliFilterBuilder")
            .field("max_fpr", &self.max_fpr)
            .field("max_fnr", &self.max_fnr)
            .field("reject_collisions", &self.reject_collisions)
            .finish_non_exhaustive()
    }
}
