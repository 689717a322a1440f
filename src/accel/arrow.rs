// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Arrow conversion utilities.

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::Int64Type;
use arrow_schema::DataType;
use log::*;

use crate::errors::{Result, TripleError};

/// Extract an integer sequence from an Arrow array.
///
/// Any signed or unsigned integer type is accepted. Nulls, and unsigned values
/// that do not fit in an `i64`, are rejected.
pub fn sequence_from_arrow(array: &dyn Array) -> Result<Vec<i64>> {
    if !array.data_type().is_integer() {
        return Err(TripleError::InvalidType(format!(
            "invalid sequence type {}, expected an integer type",
            array.data_type()
        )));
    }
    if array.null_count() > 0 {
        return Err(TripleError::InvalidInput(format!(
            "sequence has {} null values",
            array.null_count()
        )));
    }

    trace!(
        "casting {} values from {} to {}",
        array.len(),
        array.data_type(),
        DataType::Int64
    );
    let converted = cast(array, &DataType::Int64)
        .map_err(|e| TripleError::InvalidInput(format!("cannot convert sequence: {}", e)))?;
    // the safe cast nulls out values it cannot represent
    if converted.null_count() > 0 {
        return Err(TripleError::InvalidInput(format!(
            "{} sequence values do not fit in a 64-bit signed integer",
            converted.null_count()
        )));
    }

    Ok(converted.as_primitive::<Int64Type>().values().to_vec())
}
