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

//! Rate-distorted perfect hash filters for probabilistic set membership testing.
//!
//! A [`BernoulliFilter`] is built once from a set of items and a [`PerfectHash`] over them. It
//! keeps one fingerprint per slot of the perfect hash and answers membership queries by
//! comparing fingerprints, so it errs in both directions:
//!
//! - **False positives** at rate `1 / Fingerprint::MAX`, set by the fingerprint width.
//! - **False negatives** at the perfect hash's own error rate, plus any member whose slot was
//!   taken by a later item during construction.
//!
//! # Usage
//!
//! ```rust
//! use bernoulli::filter::BernoulliFilter;
//! use bernoulli::phf::SeededPerfectHash;
//! use bernoulli::phf::SeededPerfectHashBuilder;
//!
//! type Filter = BernoulliFilter<SeededPerfectHash<u64, u8>>;
//!
//! let keys: Vec<u64> = (0..10).collect();
//! let strategy = SeededPerfectHashBuilder::default()
//!     .load_factor(10.0)
//!     .max_attempts(1_000)
//!     .strategy::<u64, u8>();
//! let filter: Filter = Filter::builder(strategy)
//!     .reject_collisions(true)
//!     .build(&keys)
//!     .unwrap();
//!
//! assert!(filter.contains(&7));
//! assert_eq!(filter.false_negative_rate(), 0.0);
//! ```
//!
//! # Notes
//!
//! - Filters are immutable once built.
//! - The perfect hash is supplied by the caller, either built or as a construction strategy.
//!   The [`phf`](crate::phf) module provides one implementation.

mod batch;
mod builder;
mod capability;
mod query;
mod sketch;

pub use self::batch::FilterBatch;
pub use self::builder::BernoulliFilterBuilder;
pub use self::capability::Fingerprint;
pub use self::capability::PerfectHash;
pub use self::query::Query;
pub use self::sketch::BernoulliFilter;
