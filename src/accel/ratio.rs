// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Enumeration of the outer values that pair with a middle value.
//!
//! A triple with middle value `m` has outer values `m / r` and `m * r` for
//! some ratio `r`. For integer outer values `r` is a reduced fraction `p / q`
//! with `p * q` dividing `m`, so it need not be an integer: `(4, 6, 9)` has
//! `r = 3/2`. Equivalently the lower outer value is a divisor of `m²`, and we
//! generate those divisors from the factorization of `m` by letting each prime
//! exponent run over `0..=2e`.
//!
//! Only ratios `r > 1` are produced. The ratio set is closed under `r -> 1/r`,
//! so each `r > 1` stands for exactly one mirrored pair as well; callers weight
//! it by mode rather than enumerating the mirror.

/// Outer pair `(left, right)` for a middle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OuterPair {
    pub left: u64,
    pub right: u64,
}

/// All outer pairs of `mid` with `left < mid < right <= limit`.
///
/// `factors` is the prime factorization of `mid`. Pairs are returned in
/// increasing order of `left`.
pub fn outer_pairs(mid: u64, factors: &[(u64, u32)], limit: u64) -> Vec<OuterPair> {
    let mid = mid as u128;
    let square = mid * mid;
    // right <= limit  <=>  left >= ceil(square / limit)
    let floor = square.div_ceil(limit as u128);
    if floor >= mid {
        return Vec::new();
    }

    let mut lefts = Vec::new();
    walk(factors, 1, mid, &mut lefts);

    let mut pairs: Vec<OuterPair> = lefts
        .into_iter()
        .filter(|l| *l >= floor)
        .map(|l| OuterPair {
            left: l as u64,
            right: (square / l) as u64,
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Collect divisors of `m²` below `below`, from the factorization of `m`.
fn walk(factors: &[(u64, u32)], acc: u128, below: u128, out: &mut Vec<u128>) {
    match factors.split_first() {
        None => {
            if acc < below {
                out.push(acc);
            }
        }
        Some((&(p, e), rest)) => {
            let mut val = acc;
            for _ in 0..=2 * e {
                walk(rest, val, below, out);
                val *= p as u128;
                // products only grow from here
                if val >= below {
                    break;
                }
            }
        }
    }
}
