// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Checked counting arithmetic and integer factorization.

use log::*;

use crate::errors::{Result, TripleError};

/// Largest sieve we will build; larger values fall back to odd trial division.
const MAX_SIEVE: u64 = 1 << 20;

pub(crate) fn add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(TripleError::Overflow)
}

pub(crate) fn mul3(a: u64, b: u64, c: u64) -> Result<u64> {
    a.checked_mul(b)
        .and_then(|ab| ab.checked_mul(c))
        .ok_or(TripleError::Overflow)
}

/// Ordered selections of 3 distinct items out of `c`, `P(c, 3)`.
pub(crate) fn perm3(c: u64) -> Result<u64> {
    if c < 3 {
        return Ok(0);
    }
    mul3(c, c - 1, c - 2)
}

/// Unordered pairs out of `c` times a distinct third item, `C(c, 2) * (c - 2)`.
///
/// This is `P(c, 3) / 2`, computed without the intermediate doubling.
pub(crate) fn pairs_with_third(c: u64) -> Result<u64> {
    if c < 3 {
        return Ok(0);
    }
    let (a, b) = if c % 2 == 0 {
        (c / 2, c - 1)
    } else {
        (c, (c - 1) / 2)
    };
    mul3(a, b, c - 2)
}

/// Integer square root (floor).
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Trial-division factorizer backed by a prime sieve.
///
/// Built once per count and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct Factorizer {
    primes: Vec<u64>,
    bound: u64,
}

impl Factorizer {
    /// Create a factorizer able to factor every value up to `max_value`.
    pub fn for_max(max_value: u64) -> Factorizer {
        let bound = isqrt(max_value).min(MAX_SIEVE);
        let primes = sieve(bound);
        debug!(
            "sieved {} primes up to {} for values up to {}",
            primes.len(),
            bound,
            max_value
        );
        Factorizer { primes, bound }
    }

    /// Prime factorization of `n` as `(prime, exponent)` pairs in increasing order.
    pub fn factorize(&self, n: u64) -> Vec<(u64, u32)> {
        let mut rest = n;
        let mut factors = Vec::new();
        for &p in &self.primes {
            if p * p > rest {
                break;
            }
            strip(&mut rest, p, &mut factors);
        }

        // values beyond the sieve square
        if rest > 1 && self.bound.checked_mul(self.bound).map_or(false, |b2| b2 < rest) {
            let mut d = (self.bound + 1) | 1;
            while d.checked_mul(d).map_or(false, |d2| d2 <= rest) {
                strip(&mut rest, d, &mut factors);
                d += 2;
            }
        }

        if rest > 1 {
            factors.push((rest, 1));
        }
        factors
    }
}

fn strip(rest: &mut u64, p: u64, factors: &mut Vec<(u64, u32)>) {
    let mut e = 0;
    while *rest % p == 0 {
        *rest /= p;
        e += 1;
    }
    if e > 0 {
        factors.push((p, e));
    }
}

/// Sieve of Eratosthenes, returning all primes `<= n`.
fn sieve(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let n = n as usize;
    let mut composite = vec![false; n + 1];
    let mut primes = Vec::new();
    for i in 2..=n {
        if composite[i] {
            continue;
        }
        primes.push(i as u64);
        let mut j = i * i;
        while j <= n {
            composite[j] = true;
            j += i;
        }
    }
    primes
}
