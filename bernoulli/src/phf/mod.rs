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

//! Seeded perfect hash functions for building Bernoulli filters.
//!
//! Filters accept any [`PerfectHash`](crate::filter::PerfectHash). This module provides a
//! simple one: a MurmurHash3 slot hash whose seed is searched until the key set is placed
//! without collisions, or until the attempt budget runs out.
//!
//! # Usage
//!
//! ```rust
//! use bernoulli::filter::BernoulliFilter;
//! use bernoulli::phf::SeededPerfectHash;
//! use bernoulli::phf::SeededPerfectHashBuilder;
//!
//! let keys = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
//! let strategy = SeededPerfectHashBuilder::default()
//!     .load_factor(8.0)
//!     .max_attempts(500)
//!     .strategy::<String, u16>();
//! let filter: BernoulliFilter<SeededPerfectHash<String, u16>> =
//!     BernoulliFilter::build(&keys, strategy).unwrap();
//!
//! assert!(filter.contains(&"green".to_string()));
//! ```

mod builder;
mod seeded;

pub use self::builder::SeededPerfectHashBuilder;
pub use self::seeded::SeededPerfectHash;
