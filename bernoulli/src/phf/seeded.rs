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
use std::hash::Hash;
use std::marker::PhantomData;

use crate::filter::Fingerprint;
use crate::filter::PerfectHash;
use crate::hash::hash_item;
use crate::hash::reduce;

/// A seeded hash into a fixed number of slots, chosen to place a known key set with as few
/// collisions as possible.
///
/// The slot hash and the fingerprint hash are both MurmurHash3 with independent seeds. When
/// construction finds a collision-free seed the function is a true perfect hash and its error
/// rate is zero; otherwise the error rate is the fraction of keys that lost their slot to
/// another key.
///
/// Use [`SeededPerfectHashBuilder`](crate::phf::SeededPerfectHashBuilder) to construct instances.
pub struct SeededPerfectHash<T, F = u8> {
    slot_seed: u32,
    fingerprint_seed: u32,
    num_slots: usize,
    error_rate: f64,
    _marker: PhantomData<fn(&T) -> F>,
}

impl<T, F> SeededPerfectHash<T, F> {
    pub(super) fn new(
        slot_seed: u32,
        fingerprint_seed: u32,
        num_slots: usize,
        error_rate: f64,
    ) -> Self {
        debug_assert!(num_slots > 0, "a perfect hash needs at least one slot");
        Self {
            slot_seed,
            fingerprint_seed,
            num_slots,
            error_rate,
            _marker: PhantomData,
        }
    }

    /// Returns the seed of the slot hash.
    pub fn slot_seed(&self) -> u32 {
        self.slot_seed
    }

    /// Returns the seed of the fingerprint hash.
    pub fn fingerprint_seed(&self) -> u32 {
        self.fingerprint_seed
    }

    /// Returns the number of slots, `max_slot() + 1`.
    pub fn num_slots(&self) -> usize {
        self.num_slots
    }
}

impl<T: Hash, F: Fingerprint> PerfectHash for SeededPerfectHash<T, F> {
    type Item = T;
    type Fingerprint = F;

    fn slot(&self, item: &T) -> usize {
        reduce(hash_item(item, self.slot_seed), self.num_slots)
    }

    fn fingerprint(&self, item: &T) -> F {
        F::from_hash(hash_item(item, self.fingerprint_seed))
    }

    fn max_slot(&self) -> usize {
        self.num_slots - 1
    }

    fn error_rate(&self) -> f64 {
        self.error_rate
    }
}

impl<T, F> Clone for SeededPerfectHash<T, F> {
    fn clone(&self) -> Self {
        Self::new(
            self.slot_seed,
            self.fingerprint_seed,
            self.num_slots,
            self.error_rate,
        )
    }
}

impl<T, F> PartialEq for SeededPerfectHash<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.slot_seed == other.slot_seed
            && self.fingerprint_seed == other.fingerprint_seed
            && self.num_slots == other.num_slots
            && self.error_rate == other.error_rate
    }
}

// The builder only produces finite error rates.
impl<T, F> Eq for SeededPerfectHash<T, F> {}

impl<T, F> fmt::Debug for SeededPerfectHash<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededPerfectHash")
            .field("slot_seed", &self.slot_seed)
            .field("fingerprint_seed", &self.fingerprint_seed)
            .field("num_slots", &self.num_slots)
            .field("error_rate", &self.error_rate)
            .finish()
    }
}
