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

use crate::error::Error;
use crate::filter::BernoulliFilter;
use crate::filter::PerfectHash;

/// A read-only view for asking several membership questions of one filter.
///
/// # Examples
///
/// ```
/// use bernoulli::filter::BernoulliFilter;
/// use bernoulli::phf::SeededPerfectHash;
/// use bernoulli::phf::SeededPerfectHashBuilder;
///
/// let keys: Vec<u64> = (0..16).collect();
/// let strategy = SeededPerfectHashBuilder::default()
///     .load_factor(8.0)
///     .max_attempts(500)
///     .strategy::<u64, u32>();
/// let filter: BernoulliFilter<SeededPerfectHash<u64, u32>> =
///     BernoulliFilter::build(&keys, strategy).unwrap();
///
/// let query = filter.query();
/// assert!(query.contains_any(&[3, 1_000]));
/// assert_eq!(query.contains_all(&[3, 4]), vec![true, true]);
/// ```
#[derive(Debug)]
pub struct Query<'a, P: PerfectHash> {
    filter: &'a BernoulliFilter<P>,
}

impl<P: PerfectHash> Clone for Query<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PerfectHash> Copy for Query<'_, P> {}

impl<'a, P: PerfectHash> Query<'a, P> {
    /// Creates a query view over `filter`.
    pub fn new(filter: &'a BernoulliFilter<P>) -> Self {
        Self { filter }
    }

    /// Returns `true` if `item` is probably a member.
    ///
    /// # Panics
    ///
    /// Panics if the perfect hash sends an item past `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn contains(&self, item: &P::Item) -> bool {
        self.filter.contains(item)
    }

    /// Returns whether `item` is probably a member.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ContractViolation`](crate::error::ErrorKind::ContractViolation) if
    /// the perfect hash sends `item` past `max_slot()`.
    pub fn try_contains(&self, item: &P::Item) -> Result<bool, Error> {
        self.filter.try_contains(item)
    }

    /// Tests every item, returning the results in order.
    ///
    /// # Panics
    ///
    /// Panics if the perfect hash sends an item past `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn contains_all<'i, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'i P::Item>,
        P::Item: 'i,
    {
        items.into_iter().map(|item| self.contains(item)).collect()
    }

    /// Tests every item, stopping at the first contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ContractViolation`](crate::error::ErrorKind::ContractViolation) if
    /// the perfect hash sends any item past `max_slot()`.
    pub fn try_contains_all<'i, I>(&self, items: I) -> Result<Vec<bool>, Error>
    where
        I: IntoIterator<Item = &'i P::Item>,
        P::Item: 'i,
    {
        items
            .into_iter()
            .map(|item| self.try_contains(item))
            .collect()
    }

    /// Returns `true` if any item is probably a member.
    ///
    /// # Panics
    ///
    /// Panics if the perfect hash sends an item past `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn contains_any<'i, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'i P::Item>,
        P::Item: 'i,
    {
        items.into_iter().any(|item| self.contains(item))
    }

    /// Counts the items that are probably members.
    ///
    /// # Panics
    ///
    /// Panics if the perfect hash sends an item past `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn count_members<'i, I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = &'i P::Item>,
        P::Item: 'i,
    {
        items.into_iter().filter(|item| self.contains(item)).count()
    }

    /// Returns the false positive rate of the filter.
    pub fn false_positive_rate(&self) -> f64 {
        self.filter.false_positive_rate()
    }

    /// Returns the false negative rate of the filter.
    pub fn false_negative_rate(&self) -> f64 {
        self.filter.false_negative_rate()
    }

    /// Returns `1 - (false_positive_rate + false_negative_rate)`.
    pub fn accuracy(&self) -> f64 {
        1.0 - (self.false_positive_rate() + self.false_negative_rate())
    }

    /// Returns a query view over `other`.
    pub fn with_filter<'b>(&self, other: &'b BernoulliFilter<P>) -> Query<'b, P> {
        Query::new(other)
    }

    /// Returns the filter this view reads from.
    pub fn filter(&self) -> &'a BernoulliFilter<P> {
        self.filter
    }
}
