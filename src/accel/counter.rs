// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Geometric triple counting over a frequency index.
//!
//! Each distinct value is visited once as the middle of a triple. Its
//! contribution is the degenerate term (all three positions hold the middle
//! value) plus one term per outer pair from [crate::ratio::outer_pairs]:
//!
//! - ordered: `P(c, 3) + 2 * sum(c * cL * cR)`
//! - unordered: `C(c, 2) * (c - 2) + sum(c * cL * cR)`
//!
//! so the ordered count is always exactly twice the unordered count.

use log::*;
use rayon::prelude::*;

use crate::arith::{self, Factorizer};
use crate::config::{CountConfig, Mode};
use crate::errors::{Result, TripleError};
use crate::freq::FrequencyIndex;
use crate::ratio::outer_pairs;

/// Count geometric triples in a sequence with the default configuration.
pub fn count_triples(seq: &[i64], mode: Mode) -> Result<u64> {
    count_triples_with(seq, mode, &CountConfig::default())
}

/// Count geometric triples in a sequence.
pub fn count_triples_with(seq: &[i64], mode: Mode, config: &CountConfig) -> Result<u64> {
    let index = FrequencyIndex::build(seq, config)?;
    count(&index, mode, config)
}

/// Count geometric triples from a prebuilt index.
///
/// Middle values are sharded across the rayon pool once there are at least
/// `config.parallel_threshold` of them; the result does not depend on which
/// path is taken.
pub fn count(index: &FrequencyIndex, mode: Mode, config: &CountConfig) -> Result<u64> {
    config.validate()?;
    if index.max_value() > config.limit {
        return Err(TripleError::InvalidInput(format!(
            "indexed value {} exceeds limit {}",
            index.max_value(),
            config.limit
        )));
    }

    let mids = index.distinct_values();
    let factorizer = Factorizer::for_max(index.max_value());
    let counter = TripleCounter {
        index,
        factorizer: &factorizer,
        mode,
        bound: index.max_value(),
    };

    let total = if mids.len() >= config.parallel_threshold {
        debug!(
            "counting {} triples over {} middle values in parallel",
            mode,
            mids.len()
        );
        mids.par_iter()
            .map(|mid| counter.middle(*mid))
            .try_reduce(|| 0, arith::add)?
    } else {
        debug!(
            "counting {} triples over {} middle values",
            mode,
            mids.len()
        );
        mids.iter()
            .try_fold(0, |acc, mid| arith::add(acc, counter.middle(*mid)?))?
    };

    debug!(
        "found {} {} triples among {} values",
        total,
        mode,
        index.total()
    );
    Ok(total)
}

/// Shared read-only state for per-middle-value counting.
struct TripleCounter<'a> {
    index: &'a FrequencyIndex,
    factorizer: &'a Factorizer,
    mode: Mode,
    /// Largest outer value worth looking up.
    bound: u64,
}

impl TripleCounter<'_> {
    /// Triples whose middle position holds `mid`.
    fn middle(&self, mid: u64) -> Result<u64> {
        let c = self.index.count(mid);
        let mut total = match self.mode {
            Mode::Ordered => arith::perm3(c)?,
            Mode::Unordered => arith::pairs_with_third(c)?,
        };

        let factors = self.factorizer.factorize(mid);
        for pair in outer_pairs(mid, &factors, self.bound) {
            let cl = self.index.count(pair.left);
            if cl == 0 {
                continue;
            }
            let cr = self.index.count(pair.right);
            if cr == 0 {
                continue;
            }
            trace!("middle {}: outer pair {} / {}", mid, pair.left, pair.right);
            let term = arith::mul3(c, cl, cr)?;
            let term = match self.mode {
                // the pair and its mirror
                Mode::Ordered => arith::add(term, term)?,
                Mode::Unordered => term,
            };
            total = arith::add(total, term)?;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::naive::count_triples_naive;

    fn naive(seq: &[i64], mode: Mode) -> u64 {
        count_triples_naive(seq, mode, &CountConfig::default()).unwrap()
    }

    fn both(seq: &[i64]) -> (u64, u64) {
        (
            count_triples(seq, Mode::Ordered).unwrap(),
            count_triples(seq, Mode::Unordered).unwrap(),
        )
    }

    #[test]
    fn test_empty_and_short() {
        assert_eq!(both(&[]), (0, 0));
        assert_eq!(both(&[4]), (0, 0));
        assert_eq!(both(&[4, 4]), (0, 0));
    }

    #[test]
    fn test_repeated_sevens() {
        let seq = [1, 7, 7, 2, 7];
        let (ordered, unordered) = both(&seq);
        assert_eq!(ordered, naive(&seq, Mode::Ordered));
        assert_eq!(unordered, naive(&seq, Mode::Unordered));
        // only the three sevens form a triple
        assert_eq!(ordered, 6);
    }

    #[test]
    fn test_middle_first() {
        let seq = [6, 2, 18];
        let (ordered, unordered) = both(&seq);
        assert_eq!(ordered, naive(&seq, Mode::Ordered));
        assert_eq!(unordered, naive(&seq, Mode::Unordered));
        assert_eq!(ordered, 2);
    }

    #[test]
    fn test_all_equal_small() {
        assert_eq!(both(&[2, 2, 2]), (6, 3));
    }

    #[test]
    fn test_all_equal_formula() {
        for c in 0..12u64 {
            let seq = vec![9; c as usize];
            let expected = if c >= 3 { c * (c - 1) * (c - 2) } else { 0 };
            assert_eq!(both(&seq), (expected, expected / 2), "{} copies", c);
        }
    }

    #[test]
    fn test_doubled_chain() {
        let seq = [1, 1, 2, 2, 4, 4, 8, 8];
        let (ordered, unordered) = both(&seq);
        assert_eq!(ordered, naive(&seq, Mode::Ordered));
        assert_eq!(unordered, naive(&seq, Mode::Unordered));
        // 1-2-4 and 2-4-8, 2*2*2 index choices each, both directions
        assert_eq!(ordered, 32);
    }

    #[test]
    fn test_fractional_ratio() {
        let seq = [9, 4, 6];
        assert_eq!(both(&seq), (2, 1));
        assert_eq!(naive(&seq, Mode::Ordered), 2);
    }

    #[test]
    fn test_limit_boundary() {
        let seq = [25, 50, 100];
        let at = CountConfig::with_limit(100);
        assert_eq!(count_triples_with(&seq, Mode::Ordered, &at).unwrap(), 2);

        let below = CountConfig::with_limit(99);
        assert!(matches!(
            count_triples_with(&seq, Mode::Ordered, &below),
            Err(TripleError::InvalidInput(_))
        ));
        // the partner 100 would be one past the limit
        assert_eq!(
            count_triples_with(&[25, 50], Mode::Ordered, &below).unwrap(),
            0
        );
    }

    #[test]
    fn test_large_values() {
        let seq = [999_999_937, 999_999_937, 999_999_937, 31_622, 1, 1_000_000_000];
        let (ordered, unordered) = both(&seq);
        assert_eq!(ordered, naive(&seq, Mode::Ordered));
        assert_eq!(ordered, 2 * unordered);
    }

    #[test]
    fn test_index_over_limit() {
        let index = FrequencyIndex::build(&[10, 20], &CountConfig::default()).unwrap();
        assert!(matches!(
            count(&index, Mode::Ordered, &CountConfig::with_limit(15)),
            Err(TripleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflow() {
        let seq = vec![5; 3_000_000];
        assert_eq!(
            count_triples(&seq, Mode::Ordered),
            Err(TripleError::Overflow)
        );
        let parallel = CountConfig {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert_eq!(
            count_triples_with(&seq, Mode::Ordered, &parallel),
            Err(TripleError::Overflow)
        );
        assert_eq!(
            count_triples(&seq, Mode::Unordered).unwrap(),
            arith::pairs_with_third(3_000_000).unwrap()
        );
    }

    fn smooth() -> impl Strategy<Value = i64> {
        prop::sample::select(vec![1i64, 2, 3, 4, 6, 8, 9, 12, 16, 18, 24, 27, 36, 48])
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn ordered_matches_naive(seq in prop::collection::vec(1i64..=12, 0..40)) {
            prop_assert_eq!(
                count_triples(&seq, Mode::Ordered).unwrap(),
                naive(&seq, Mode::Ordered)
            );
        }

        #[test]
        fn unordered_matches_naive(seq in prop::collection::vec(1i64..=12, 0..40)) {
            prop_assert_eq!(
                count_triples(&seq, Mode::Unordered).unwrap(),
                naive(&seq, Mode::Unordered)
            );
        }

        /// Values built from 2s and 3s are dense in non-integer ratios.
        #[test]
        fn smooth_values_match_naive(seq in prop::collection::vec(smooth(), 0..30)) {
            prop_assert_eq!(
                count_triples(&seq, Mode::Ordered).unwrap(),
                naive(&seq, Mode::Ordered)
            );
        }

        #[test]
        fn tight_limit_matches_naive(seq in prop::collection::vec(1i64..=20, 0..30)) {
            let cfg = CountConfig::with_limit(20);
            prop_assert_eq!(
                count_triples_with(&seq, Mode::Ordered, &cfg).unwrap(),
                count_triples_naive(&seq, Mode::Ordered, &cfg).unwrap()
            );
        }

        #[test]
        fn ordered_is_twice_unordered(seq in prop::collection::vec(1i64..=64, 0..300)) {
            let (ordered, unordered) = both(&seq);
            prop_assert_eq!(ordered, 2 * unordered);
        }

        #[test]
        fn parallel_matches_sequential(seq in prop::collection::vec(1i64..=500, 0..300)) {
            let parallel = CountConfig {
                parallel_threshold: 0,
                ..Default::default()
            };
            for mode in [Mode::Ordered, Mode::Unordered] {
                prop_assert_eq!(
                    count_triples_with(&seq, mode, &parallel).unwrap(),
                    count_triples(&seq, mode).unwrap()
                );
            }
        }

        #[test]
        fn counting_is_idempotent(seq in prop::collection::vec(1i64..=100, 0..200)) {
            let index = FrequencyIndex::build(&seq, &CountConfig::default()).unwrap();
            let cfg = CountConfig::default();
            let first = count(&index, Mode::Ordered, &cfg).unwrap();
            prop_assert_eq!(count(&index, Mode::Ordered, &cfg).unwrap(), first);
            prop_assert_eq!(count_triples(&seq, Mode::Ordered).unwrap(), first);
        }

        #[test]
        fn appending_existing_value_never_decreases(
            seq in prop::collection::vec(1i64..=16, 1..60),
            pick in any::<prop::sample::Index>(),
        ) {
            let before = count_triples(&seq, Mode::Ordered).unwrap();
            let mut grown = seq.clone();
            grown.push(seq[pick.index(seq.len())]);
            prop_assert!(count_triples(&grown, Mode::Ordered).unwrap() >= before);
        }
    }
}
