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

use std::slice;

use crate::error::Error;
use crate::filter::BernoulliFilter;
use crate::filter::PerfectHash;

/// A collection of filters that are queried together.
///
/// The filters themselves stay immutable; only the collection grows or shrinks.
#[derive(Debug, Clone)]
pub struct FilterBatch<P: PerfectHash> {
    filters: Vec<BernoulliFilter<P>>,
}

impl<P: PerfectHash> Default for FilterBatch<P> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<P: PerfectHash> FilterBatch<P> {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the batch.
    pub fn add(&mut self, filter: BernoulliFilter<P>) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Tests `item` against every filter, returning the results in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if a filter's perfect hash sends `item` past its `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn test_all(&self, item: &P::Item) -> Vec<bool> {
        self.filters.iter().map(|f| f.contains(item)).collect()
    }

    /// Tests `item` against every filter, stopping at the first contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ContractViolation`](crate::error::ErrorKind::ContractViolation) if
    /// any filter's perfect hash sends `item` past its `max_slot()`.
    pub fn try_test_all(&self, item: &P::Item) -> Result<Vec<bool>, Error> {
        self.filters.iter().map(|f| f.try_contains(item)).collect()
    }

    /// Returns `true` if any filter probably contains `item`.
    ///
    /// # Panics
    ///
    /// Panics if a filter's perfect hash sends `item` past its `max_slot()`, like
    /// [`BernoulliFilter::contains`].
    pub fn test_any(&self, item: &P::Item) -> bool {
        self.filters.iter().any(|f| f.contains(item))
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the batch holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Removes every filter.
    pub fn clear(&mut self) -> &mut Self {
        self.filters.clear();
        self
    }

    /// Iterates over the filters in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, BernoulliFilter<P>> {
        self.filters.iter()
    }
}

impl<P: PerfectHash> FromIterator<BernoulliFilter<P>> for FilterBatch<P> {
    fn from_iter<I: IntoIterator<Item = BernoulliFilter<P>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl<'a, P: PerfectHash> IntoIterator for &'a FilterBatch<P> {
    type Item = &'a BernoulliFilter<P>;
    type IntoIter = slice::Iter<'a, BernoulliFilter<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
