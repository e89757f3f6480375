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

#![allow(dead_code)]

use std::collections::HashMap;

use bernoulli::error::Error;
use bernoulli::filter::PerfectHash;

/// A hand-wired perfect hash over `u32` for tests.
///
/// Known items go to the slot recorded for them; anything else goes to `item % (max_slot + 1)`.
/// The fingerprint of an item is its low byte.
#[derive(Debug, Clone, PartialEq)]
pub struct TableHash {
    pub slots: HashMap<u32, usize>,
    pub max_slot: usize,
    pub error_rate: f64,
}

impl TableHash {
    pub fn new(pairs: &[(u32, usize)], max_slot: usize) -> Self {
        Self {
            slots: pairs.iter().copied().collect(),
            max_slot,
            error_rate: 0.0,
        }
    }

    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    /// Assigns slots in enumeration order, skipping repeated items.
    pub fn sequential(items: &[u32]) -> Self {
        let mut slots = HashMap::new();
        for item in items {
            let next = slots.len();
            slots.entry(*item).or_insert(next);
        }
        let max_slot = slots.len().saturating_sub(1);
        Self {
            slots,
            max_slot,
            error_rate: 0.0,
        }
    }
}

impl PerfectHash for TableHash {
    type Item = u32;
    type Fingerprint = u8;

    fn slot(&self, item: &u32) -> usize {
        match self.slots.get(item) {
            Some(slot) => *slot,
            None => *item as usize % (self.max_slot + 1),
        }
    }

    fn fingerprint(&self, item: &u32) -> u8 {
        *item as u8
    }

    fn max_slot(&self) -> usize {
        self.max_slot
    }

    fn error_rate(&self) -> f64 {
        self.error_rate
    }
}

/// Construction strategy that numbers items in order and reports `error_rate`.
pub fn sequential_strategy(
    error_rate: f64,
) -> impl Fn(&[u32]) -> Result<TableHash, Error> + Clone {
    move |items: &[u32]| Ok(TableHash::sequential(items).with_error_rate(error_rate))
}
