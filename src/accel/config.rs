// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Counting modes and configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TripleError};

/// Default upper bound on element values.
pub const DEFAULT_LIMIT: u64 = 1_000_000_000;

/// Default number of distinct values at which counting moves to the thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// How the outer positions of a triple are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every assignment of pairwise-distinct indices `(i, j, k)` counts.
    Ordered,
    /// The outer pair `{i, k}` is one selection; equivalent to requiring `i < k`.
    Unordered,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ordered => f.write_str("ordered"),
            Mode::Unordered => f.write_str("unordered"),
        }
    }
}

impl FromStr for Mode {
    type Err = TripleError;

    fn from_str(s: &str) -> Result<Mode> {
        match s.to_ascii_lowercase().as_str() {
            "ordered" => Ok(Mode::Ordered),
            "unordered" => Ok(Mode::Unordered),
            _ => Err(TripleError::InvalidConfig(format!("unknown mode '{}'", s))),
        }
    }
}

/// Tunable parameters for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    /// Largest permitted element value; also bounds the outer values tried.
    pub limit: u64,
    /// Distinct-value count at or above which middle values are sharded
    /// across the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig {
            limit: DEFAULT_LIMIT,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CountConfig {
    pub fn with_limit(limit: u64) -> Self {
        CountConfig {
            limit,
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: CountConfig =
            serde_json::from_str(json).map_err(|e| TripleError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(TripleError::InvalidConfig(
                "value limit must be at least 1".into(),
            ));
        }
        if self.limit > i64::MAX as u64 {
            return Err(TripleError::InvalidConfig(format!(
                "value limit {} exceeds {}",
                self.limit,
                i64::MAX
            )));
        }
        Ok(())
    }
}
