// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Error types for triple counting.

use thiserror::Error;

/// Failures surfaced by the counting routines.
///
/// Counting is a pure function of its input, so none of these are retryable:
/// the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripleError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid type: {0}")]
    InvalidType(String),
    #[error("triple count exceeds the range of a 64-bit accumulator")]
    Overflow,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TripleError>;

impl TripleError {
    pub(crate) fn out_of_range(position: usize, value: i64, limit: u64) -> TripleError {
        TripleError::InvalidInput(format!(
            "value {} at position {} is outside [1, {}]",
            value, position, limit
        ))
    }
}

#[cfg(feature = "python")]
impl From<TripleError> for pyo3::PyErr {
    fn from(err: TripleError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyOverflowError, PyTypeError, PyValueError};
        match err {
            TripleError::Overflow => PyOverflowError::new_err(err.to_string()),
            TripleError::InvalidType(_) => PyTypeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[test]
fn test_range_message() {
    let err = TripleError::out_of_range(3, -2, 100);
    assert_eq!(
        err.to_string(),
        "invalid input: value -2 at position 3 is outside [1, 100]"
    );
}
