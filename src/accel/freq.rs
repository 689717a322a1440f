// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Value multiplicity index over an input sequence.

use std::collections::HashMap;

use log::*;
use rustc_hash::FxBuildHasher;

use crate::config::CountConfig;
use crate::errors::{Result, TripleError};

/// Mapping from each distinct value to the number of positions holding it.
///
/// Counts sum to the sequence length and every stored count is at least 1.
#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    counts: HashMap<u64, u64, FxBuildHasher>,
    total: u64,
    max_value: u64,
}

/// Check that a sequence element lies in `[1, limit]`.
pub(crate) fn check_value(position: usize, value: i64, limit: u64) -> Result<u64> {
    if value >= 1 && value as u64 <= limit {
        Ok(value as u64)
    } else {
        Err(TripleError::out_of_range(position, value, limit))
    }
}

impl FrequencyIndex {
    /// Index a sequence, rejecting values outside `[1, config.limit]`.
    pub fn build(seq: &[i64], config: &CountConfig) -> Result<FrequencyIndex> {
        config.validate()?;
        let mut counts = HashMap::with_hasher(FxBuildHasher);
        let mut max_value = 0;
        for (i, v) in seq.iter().enumerate() {
            let v = check_value(i, *v, config.limit)?;
            *counts.entry(v).or_default() += 1;
            max_value = max_value.max(v);
        }
        trace!(
            "indexed {} values into {} distinct entries",
            seq.len(),
            counts.len()
        );
        Ok(FrequencyIndex {
            counts,
            total: seq.len() as u64,
            max_value,
        })
    }

    /// Multiplicity of a value (0 if absent).
    pub fn count(&self, value: u64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Iterate `(value, multiplicity)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(v, c)| (*v, *c))
    }

    /// The distinct values, sorted ascending.
    pub fn distinct_values(&self) -> Vec<u64> {
        let mut vals: Vec<u64> = self.counts.keys().copied().collect();
        vals.sort_unstable();
        vals
    }

    pub fn n_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Length of the indexed sequence.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest value present, or 0 for an empty sequence.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }
}
