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

use bernoulli::filter::BernoulliFilter;
use bernoulli::filter::PerfectHash;
use bernoulli::phf::SeededPerfectHash;
use bernoulli::phf::SeededPerfectHashBuilder;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;

type Filter16 = BernoulliFilter<SeededPerfectHash<u64, u16>>;

#[test]
fn test_small_set_has_no_false_negatives() {
    let keys: Vec<u64> = (0..50).collect();
    let strategy = SeededPerfectHashBuilder::default()
        .load_factor(50.0)
        .max_attempts(1_000)
        .strategy::<u64, u16>();
    let filter: Filter16 = Filter16::builder(strategy)
        .reject_collisions(true)
        .build(&keys)
        .unwrap();

    assert_that!(filter.hash().error_rate(), eq(0.0));
    assert_that!(filter.false_negative_rate(), eq(0.0));
    for key in &keys {
        assert!(filter.contains(key));
    }
}

#[test]
fn test_error_rate_counts_collision_losses() {
    let keys: Vec<u64> = (0..10_000).collect();
    let strategy = SeededPerfectHashBuilder::default().strategy::<u64, u32>();
    let filter: BernoulliFilter<SeededPerfectHash<u64, u32>> =
        BernoulliFilter::build(&keys, strategy).unwrap();

    let misses = keys.iter().filter(|key| !filter.contains(key)).count();
    let lost = (filter.hash().error_rate() * keys.len() as f64).round() as usize;

    // Each colliding slot keeps exactly one key; 32-bit fingerprints make accidental matches
    // between the losers and the winner vanishingly rare.
    assert_eq!(misses, lost);
    assert!(lost > 0);
    assert!(filter.false_negative_rate() < filter.hash().error_rate());
}

#[test]
fn test_observed_false_positive_rate() {
    let keys: Vec<u64> = (0..2_000).collect();
    let strategy = SeededPerfectHashBuilder::default().strategy::<u64, u8>();
    let filter: BernoulliFilter<SeededPerfectHash<u64, u8>> =
        BernoulliFilter::build(&keys, strategy).unwrap();

    let probes = 100_000u64;
    let hits = (1_000_000..1_000_000 + probes)
        .filter(|key| filter.contains(key))
        .count();
    let observed = hits as f64 / probes as f64;

    assert_that!(observed, ge(0.5 * filter.false_positive_rate()));
    assert_that!(observed, le(1.5 * filter.false_positive_rate()));
}

#[test]
fn test_seed_determines_representation() {
    let keys: Vec<&str> = vec!["ant", "bee", "cat", "dog", "eel", "fox"];
    let build = |seed: u32| {
        let strategy = SeededPerfectHashBuilder::default()
            .seed(seed)
            .load_factor(6.0)
            .max_attempts(200)
            .strategy::<&str, u16>();
        let filter: BernoulliFilter<SeededPerfectHash<&str, u16>> =
            BernoulliFilter::build(&keys, strategy).unwrap();
        filter
    };

    let a = build(1);
    let b = build(1);
    let c = build(2);

    fn assert_eq_impl<T: Eq>(_: &T) {}
    assert_eq_impl(&a);

    assert_eq!(a, b);
    assert_ne!(a, c);
    for key in &keys {
        assert!(a.contains(key));
        assert!(c.contains(key));
    }
}

#[test]
fn test_empty_input() {
    let strategy = SeededPerfectHashBuilder::default().strategy::<u64, u16>();
    let filter = Filter16::build(&[], strategy).unwrap();

    assert_eq!(filter.num_slots(), 1);
    assert_eq!(filter.false_negative_rate(), 0.0);
    let hits = (0..10_000u64).filter(|key| filter.contains(key)).count();
    // Only keys whose fingerprint is zero match the empty slot.
    assert!(hits < 10, "hits = {hits}");
}
