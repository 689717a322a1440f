// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Counting of geometric index triples `a[j]² = a[i] * a[k]`.

pub mod arith;
pub mod arrow;
pub mod config;
pub mod counter;
pub mod errors;
pub mod freq;
pub mod naive;
pub mod parallel;
pub mod ratio;

#[cfg(feature = "python")]
mod python;

pub use config::{CountConfig, Mode, DEFAULT_LIMIT};
pub use counter::{count, count_triples, count_triples_with};
pub use errors::{Result, TripleError};
pub use freq::FrequencyIndex;
pub use naive::{count_triples_naive, list_triples};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Entry point for the triple-counting accelerator module.
#[cfg(feature = "python")]
#[pymodule]
fn _accel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(python::count_triples, m)?)?;
    m.add_function(wrap_pyfunction!(python::count_triples_array, m)?)?;
    m.add_function(wrap_pyfunction!(python::count_triples_naive, m)?)?;
    m.add_function(wrap_pyfunction!(python::list_triples_naive, m)?)?;
    m.add_function(wrap_pyfunction!(python::init_accel_pool, m)?)?;
    m.add_function(wrap_pyfunction!(python::thread_count, m)?)?;
    m.add("DEFAULT_LIMIT", DEFAULT_LIMIT)?;

    Ok(())
}
