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

use std::cmp::Ordering;

use tracing::Level;
use tracing::debug;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::filter::BernoulliFilterBuilder;
use crate::filter::Fingerprint;
use crate::filter::PerfectHash;
use crate::filter::Query;

/// Rate-distorted perfect hash filter, an immutable Bernoulli set.
///
/// The filter stores one fingerprint per slot of its perfect hash function. An element is
/// reported as a member when the fingerprint stored at its slot equals its own fingerprint.
///
/// - False positives happen when a non-member's fingerprint matches the stored one, with
///   probability [`false_positive_rate()`](Self::false_positive_rate).
/// - False negatives happen when the perfect hash misroutes a member, with probability
///   [`false_negative_rate()`](Self::false_negative_rate), and additionally when two input
///   elements share a slot: the later one overwrites the earlier one's fingerprint.
///
/// Equality is representational: two filters are equal when their perfect hash functions and
/// fingerprint tables are equal. Filters for the same set built through different hash
/// functions, or through one hash function with a different input order that changes a
/// collision outcome, may compare unequal.
///
/// Filters are only partially ordered. `a <= b` holds exactly when `a == b`, and neither
/// `a < b` nor `a > b` ever holds.
///
/// # Examples
///
/// ```
/// use bernoulli::filter::BernoulliFilter;
/// use bernoulli::phf::SeededPerfectHash;
/// use bernoulli::phf::SeededPerfectHashBuilder;
///
/// let words = ["alpha", "beta", "gamma"];
/// let strategy = SeededPerfectHashBuilder::default()
///     .load_factor(4.0)
///     .max_attempts(200)
///     .strategy::<&str, u32>();
/// let filter: BernoulliFilter<SeededPerfectHash<&str, u32>> =
///     BernoulliFilter::build(&words, strategy).unwrap();
///
/// assert!(filter.contains(&"alpha"));
/// assert!(filter.contains(&"gamma"));
/// ```
#[derive(Debug, Clone)]
pub struct BernoulliFilter<P: PerfectHash> {
    pub(super) hash: P,
    pub(super) fingerprints: Vec<P::Fingerprint>,
}

impl<P: PerfectHash> BernoulliFilter<P> {
    /// Creates a builder around a perfect hash construction strategy.
    ///
    /// See [`BernoulliFilterBuilder`] for the available options.
    pub fn builder<S>(strategy: S) -> BernoulliFilterBuilder<S>
    where
        S: Fn(&[P::Item]) -> Result<P, Error>,
    {
        BernoulliFilterBuilder::new(strategy)
    }

    /// Builds a filter for `items`, constructing the perfect hash with `strategy`.
    ///
    /// The strategy receives the same items that are then written into the fingerprint table.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `strategy`, and
    /// [`ErrorKind::ContractViolation`] if the constructed perfect hash sends an item past
    /// `max_slot()`.
    pub fn build<S>(items: &[P::Item], strategy: S) -> Result<Self, Error>
    where
        S: FnOnce(&[P::Item]) -> Result<P, Error>,
    {
        let hash = strategy(items)?;
        Self::from_hash(hash, items)
    }

    /// Builds a filter for `items` over an already constructed perfect hash.
    ///
    /// Items are written in order; when two items share a slot the later one wins.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ContractViolation`] if `hash` sends an item past `max_slot()`, or if
    /// `max_slot()` is too large for the fingerprint table to be allocated.
    pub fn from_hash(hash: P, items: &[P::Item]) -> Result<Self, Error> {
        let fingerprints = build_fingerprints(&hash, items, false)?;
        Ok(Self { hash, fingerprints })
    }

    /// Returns `true` if `item` is probably a member.
    ///
    /// # Panics
    ///
    /// Panics if the perfect hash sends `item` past `max_slot()`. Use
    /// [`try_contains()`](Self::try_contains) to handle that as an error.
    pub fn contains(&self, item: &P::Item) -> bool {
        match self.try_contains(item) {
            Ok(found) => found,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns whether `item` is probably a member.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ContractViolation`] if the perfect hash sends `item` past
    /// `max_slot()`.
    pub fn try_contains(&self, item: &P::Item) -> Result<bool, Error> {
        let slot = self.hash.slot(item);
        match self.fingerprints.get(slot) {
            Some(stored) => Ok(*stored == self.hash.fingerprint(item)),
            None => Err(Error::slot_out_of_range(slot, self.fingerprints.len() - 1)),
        }
    }

    /// Returns the false positive rate, `1 / P::Fingerprint::MAX`.
    ///
    /// This depends only on the fingerprint width.
    pub fn false_positive_rate(&self) -> f64 {
        P::Fingerprint::false_positive_rate()
    }

    /// Returns the false negative rate.
    ///
    /// A member is misrouted by the perfect hash with probability `error_rate()`, and the
    /// misroute goes unnoticed only if its fingerprint still matches, so the rate is
    /// `error_rate() * (1 - false_positive_rate())`.
    ///
    /// Members lost to slot collisions during construction are not counted here unless the
    /// perfect hash includes them in its own `error_rate()`.
    pub fn false_negative_rate(&self) -> f64 {
        self.hash.error_rate() * (1.0 - self.false_positive_rate())
    }

    /// Returns a query view over this filter.
    pub fn query(&self) -> Query<'_, P> {
        Query::new(self)
    }

    /// Returns the perfect hash function.
    pub fn hash(&self) -> &P {
        &self.hash
    }

    /// Returns the fingerprint table, indexed by slot.
    pub fn fingerprints(&self) -> &[P::Fingerprint] {
        &self.fingerprints
    }

    /// Returns the number of slots, `max_slot() + 1`.
    pub fn num_slots(&self) -> usize {
        self.fingerprints.len()
    }
}

impl<P: PerfectHash> PartialEq for BernoulliFilter<P> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.fingerprints == other.fingerprints
    }
}

impl<P: PerfectHash + Eq> Eq for BernoulliFilter<P> {}

impl<P: PerfectHash> PartialOrd for BernoulliFilter<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self == other).then_some(Ordering::Equal)
    }
}

/// Writes the fingerprint of every item into its slot.
///
/// With `reject_collisions` set, a second write to the same slot fails with
/// [`ErrorKind::SlotCollision`]; otherwise the later write wins.
pub(super) fn build_fingerprints<P: PerfectHash>(
    hash: &P,
    items: &[P::Item],
    reject_collisions: bool,
) -> Result<Vec<P::Fingerprint>, Error> {
    let max_slot = hash.max_slot();
    let num_slots = max_slot.checked_add(1).ok_or_else(|| {
        Error::new(ErrorKind::ContractViolation, "max_slot must be less than usize::MAX")
    })?;

    let mut fingerprints = Vec::new();
    fingerprints.try_reserve_exact(num_slots).map_err(|err| {
        Error::new(
            ErrorKind::ContractViolation,
            "max_slot is too large to allocate a fingerprint table",
        )
        .with_context("slots", num_slots)
        .set_source(err)
    })?;
    fingerprints.resize(num_slots, P::Fingerprint::default());

    // Only needed to reject collisions or to report how many happened.
    let mut written = (reject_collisions || tracing::enabled!(Level::DEBUG))
        .then(|| vec![false; num_slots]);
    let mut collisions = 0usize;

    for (index, item) in items.iter().enumerate() {
        let slot = hash.slot(item);
        if slot > max_slot {
            return Err(Error::slot_out_of_range(slot, max_slot).with_context("index", index));
        }

        if let Some(written) = written.as_mut() {
            if written[slot] {
                if reject_collisions {
                    return Err(Error::new(
                        ErrorKind::SlotCollision,
                        "two items were assigned the same slot",
                    )
                    .with_context("slot", slot)
                    .with_context("index", index));
                }
                collisions += 1;
            }
            written[slot] = true;
        }
        fingerprints[slot] = hash.fingerprint(item);
    }

    debug!(
        slots = num_slots,
        items = items.len(),
        collisions,
        "built fingerprint table"
    );
    Ok(fingerprints)
}
