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

//! # Bernoulli sets
//!
//! A Bernoulli set is a probabilistic membership structure that has both a false positive rate
//! and a false negative rate. This crate provides the rate-distorted perfect hash filter, which
//! realizes a Bernoulli set on top of any perfect hash function: the perfect hash assigns every
//! element a slot, and the filter stores a fingerprint of the element in that slot.
//!
//! The false positive rate is fixed by the fingerprint width, and the false negative rate is
//! inherited from the error rate of the perfect hash function, so the two can be tuned
//! independently.
//!
//! # Usage
//!
//! ```rust
//! use bernoulli::filter::BernoulliFilter;
//! use bernoulli::phf::SeededPerfectHash;
//! use bernoulli::phf::SeededPerfectHashBuilder;
//!
//! let keys: Vec<u64> = (0..1_000).collect();
//! let strategy = SeededPerfectHashBuilder::default().max_attempts(64).strategy::<u64, u16>();
//! let filter: BernoulliFilter<SeededPerfectHash<u64, u16>> =
//!     BernoulliFilter::build(&keys, strategy).unwrap();
//!
//! assert!(filter.false_positive_rate() < 1e-4);
//! ```
//!
//! This library is divided into modules that constitute distinct groups of functionality.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod error;
pub mod filter;
pub mod phf;

mod hash;
