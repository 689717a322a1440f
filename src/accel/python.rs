// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Python entry points.

use arrow::{
    array::{make_array, ArrayData},
    pyarrow::PyArrowType,
};
use log::*;
use numpy::{prelude::*, PyReadonlyArray1};
use pyo3::{exceptions::PyRuntimeError, prelude::*};

use crate::{
    arrow::sequence_from_arrow, config::CountConfig, config::Mode, counter, naive, parallel,
};

fn parse_args(mode: &str, config: Option<&str>) -> PyResult<(Mode, CountConfig)> {
    let mode: Mode = mode.parse()?;
    let config = match config {
        Some(json) => CountConfig::from_json(json)?,
        None => CountConfig::default(),
    };
    Ok((mode, config))
}

/// Count geometric triples in a PyArrow integer array.
#[pyfunction]
#[pyo3(signature = (values, mode="ordered", config=None))]
pub fn count_triples<'py>(
    py: Python<'py>,
    values: PyArrowType<ArrayData>,
    mode: &str,
    config: Option<&str>,
) -> PyResult<u64> {
    let (mode, config) = parse_args(mode, config)?;
    let values = make_array(values.0);
    let seq = sequence_from_arrow(values.as_ref())?;
    debug!("counting {} triples in {} arrow values", mode, seq.len());

    let count = py.allow_threads(move || counter::count_triples_with(&seq, mode, &config))?;
    Ok(count)
}

/// Count geometric triples in a 1-D NumPy int64 array.
#[pyfunction]
#[pyo3(signature = (values, mode="ordered", config=None))]
pub fn count_triples_array<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, i64>,
    mode: &str,
    config: Option<&str>,
) -> PyResult<u64> {
    let (mode, config) = parse_args(mode, config)?;
    debug!(
        "counting {} triples in {} array values",
        mode,
        values.len()
    );
    let seq: Vec<i64> = values.as_array().iter().copied().collect();

    let count = py.allow_threads(move || counter::count_triples_with(&seq, mode, &config))?;
    Ok(count)
}

/// Count geometric triples by exhaustive scan, for cross-checking.
#[pyfunction]
#[pyo3(signature = (values, mode="ordered", config=None))]
pub fn count_triples_naive<'py>(
    py: Python<'py>,
    values: Vec<i64>,
    mode: &str,
    config: Option<&str>,
) -> PyResult<u64> {
    let (mode, config) = parse_args(mode, config)?;
    let count =
        py.allow_threads(move || naive::count_triples_naive(&values, mode, &config))?;
    Ok(count)
}

/// List the matching `(i, j, k)` index triples, for debugging count mismatches.
#[pyfunction]
#[pyo3(signature = (values, mode="ordered", config=None))]
pub fn list_triples_naive<'py>(
    py: Python<'py>,
    values: Vec<i64>,
    mode: &str,
    config: Option<&str>,
) -> PyResult<Vec<(usize, usize, usize)>> {
    let (mode, config) = parse_args(mode, config)?;
    let triples = py.allow_threads(move || naive::list_triples(&values, mode, &config))?;
    Ok(triples)
}

#[pyfunction]
pub fn init_accel_pool(n_threads: usize) -> PyResult<()> {
    parallel::init_pool(n_threads).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pyfunction]
pub fn thread_count() -> PyResult<usize> {
    Ok(parallel::thread_count())
}
