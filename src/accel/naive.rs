// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Cubic reference scan for geometric triples.
//!
//! This is the definition the indexed counter must agree with. It is only
//! practical for short sequences.

use log::*;

use crate::arith;
use crate::config::{CountConfig, Mode};
use crate::errors::Result;
use crate::freq::check_value;

/// Count index triples `(i, j, k)` with `seq[j]² == seq[i] * seq[k]` by scanning.
///
/// Indices are pairwise distinct. In [Mode::Unordered] the outer pair is only
/// counted with `i < k`.
pub fn count_triples_naive(seq: &[i64], mode: Mode, config: &CountConfig) -> Result<u64> {
    let mut count = 0;
    scan(seq, mode, config, |_| {
        count = arith::add(count, 1)?;
        Ok(())
    })?;
    Ok(count)
}

/// List the matching index triples `(i, j, k)`, in scan order (`j` outermost).
///
/// Selects the same triples [count_triples_naive] counts; useful for finding
/// which triples a disagreeing count missed or doubled.
pub fn list_triples(
    seq: &[i64],
    mode: Mode,
    config: &CountConfig,
) -> Result<Vec<(usize, usize, usize)>> {
    let mut triples = Vec::new();
    scan(seq, mode, config, |t| {
        triples.push(t);
        Ok(())
    })?;
    Ok(triples)
}

fn scan<F>(seq: &[i64], mode: Mode, config: &CountConfig, mut found: F) -> Result<()>
where
    F: FnMut((usize, usize, usize)) -> Result<()>,
{
    config.validate()?;
    let vals = seq
        .iter()
        .enumerate()
        .map(|(i, v)| check_value(i, *v, config.limit).map(|v| v as u128))
        .collect::<Result<Vec<_>>>()?;

    let n = vals.len();
    trace!("scanning {} values for {} triples", n, mode);
    for j in 0..n {
        let square = vals[j] * vals[j];
        for i in 0..n {
            if i == j {
                continue;
            }
            let start = match mode {
                Mode::Ordered => 0,
                Mode::Unordered => i + 1,
            };
            for k in start..n {
                if k == i || k == j {
                    continue;
                }
                if vals[i] * vals[k] == square {
                    found((i, j, k))?;
                }
            }
        }
    }

    Ok(())
}
