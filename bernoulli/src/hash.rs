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

use std::hash::Hash;

/// The seed 9001 is the conventional default update seed. Slot and fingerprint hashes built
/// from the same seed are only comparable with each other, so filters that must compare equal
/// need to agree on it.
pub(crate) const DEFAULT_UPDATE_SEED: u32 = 9001;

/// Hashes `item` with 128-bit MurmurHash3 and returns the low 64 bits.
#[inline]
pub(crate) fn hash_item<T: Hash + ?Sized>(item: &T, seed: u32) -> u64 {
    let mut hasher = mur3::Hasher128::with_seed(seed);
    item.hash(&mut hasher);
    hasher.finish128().0
}

/// Maps a 64-bit hash uniformly into `[0, n)` without a division.
#[inline]
pub(crate) fn reduce(hash: u64, n: usize) -> usize {
    ((hash as u128 * n as u128) >> 64) as usize
}

/// Folds a 64-bit hash so the high bits contribute to narrow fingerprints.
#[inline]
pub(crate) fn fold(hash: u64) -> u64 {
    hash ^ (hash >> 32)
}

#[inline]
pub(crate) fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
