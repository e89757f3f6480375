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

use crate::hash::fold;

/// A fixed-width unsigned fingerprint stored in each slot of a filter.
///
/// The default value (zero) marks an unoccupied slot.
pub trait Fingerprint: Copy + Default + Eq + fmt::Debug + private::Sealed {
    /// The largest representable fingerprint.
    const MAX: u64;

    /// Truncates a 64-bit hash to a fingerprint.
    fn from_hash(hash: u64) -> Self;

    /// Probability that a non-member matches the fingerprint stored in its slot.
    ///
    /// This is `1 / MAX`, which assumes fingerprints are uniformly distributed and ignores the
    /// interaction with the zero sentinel of unoccupied slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use bernoulli::filter::Fingerprint;
    ///
    /// assert!((u8::false_positive_rate() - 1.0 / 255.0).abs() < 1e-12);
    /// ```
    fn false_positive_rate() -> f64 {
        1.0 / Self::MAX as f64
    }
}

macro_rules! impl_fingerprint {
    ($($t:ty),*) => {
        $(
            impl Fingerprint for $t {
                const MAX: u64 = <$t>::MAX as u64;

                #[inline]
                fn from_hash(hash: u64) -> Self {
                    fold(hash) as $t
                }
            }

            impl private::Sealed for $t {}
        )*
    };
}

impl_fingerprint!(u8, u16, u32, u64);

mod private {
    pub trait Sealed {}
}

/// A perfect hash function together with its fingerprint hash.
///
/// Implementations map every element to a slot in `[0, max_slot()]`. A rate-distorted perfect
/// hash may send some members to the wrong slot; `error_rate()` reports how often that happens.
///
/// Returning a slot past `max_slot()` breaks the contract. Filters detect this and report
/// [`ErrorKind::ContractViolation`](crate::error::ErrorKind::ContractViolation).
///
/// # Examples
///
/// ```
/// use bernoulli::filter::PerfectHash;
///
/// /// Small integers hash to themselves.
/// #[derive(PartialEq)]
/// struct Identity {
///     max: usize,
/// }
///
/// impl PerfectHash for Identity {
///     type Item = usize;
///     type Fingerprint = u8;
///
///     fn slot(&self, item: &usize) -> usize {
///         *item
///     }
///
///     fn fingerprint(&self, item: &usize) -> u8 {
///         *item as u8 | 1
///     }
///
///     fn max_slot(&self) -> usize {
///         self.max
///     }
///
///     fn error_rate(&self) -> f64 {
///         0.0
///     }
/// }
/// ```
pub trait PerfectHash: PartialEq {
    /// The element type this function is defined over.
    type Item;
    /// The fingerprint stored per slot.
    type Fingerprint: Fingerprint;

    /// Returns the slot of `item`.
    fn slot(&self, item: &Self::Item) -> usize;

    /// Returns the fingerprint of `item`.
    fn fingerprint(&self, item: &Self::Item) -> Self::Fingerprint;

    /// Returns the largest slot this function produces.
    fn max_slot(&self) -> usize;

    /// Returns the probability that a member is sent to the wrong slot.
    fn error_rate(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_widths() {
        assert_eq!(<u8 as Fingerprint>::MAX, 255);
        assert_eq!(<u16 as Fingerprint>::MAX, 65_535);
        assert_eq!(<u64 as Fingerprint>::MAX, u64::MAX);
        assert!(u32::false_positive_rate() < u16::false_positive_rate());
    }

    #[test]
    fn test_from_hash_folds_high_bits() {
        assert_eq!(u8::from_hash(0x0000_0001_0000_0000), 1);
        assert_eq!(u32::from_hash(0xffff_ffff_0000_0000), 0xffff_ffff);
        assert_eq!(u64::from_hash(0), 0);
    }
}
