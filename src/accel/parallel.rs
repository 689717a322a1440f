// This file is part of LensKit.
// Copyright (C) 2018-2023 Boise State University.
// Copyright (C) 2023-2025 Drexel University.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

use log::*;
use rayon::{current_num_threads, ThreadPoolBuilder};

use crate::errors::{Result, TripleError};

/// Configure the global counting pool. Only the first call can succeed.
pub fn init_pool(n_threads: usize) -> Result<()> {
    debug!(
        "initializing counting thread pool with {} threads",
        n_threads
    );
    ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
        .map_err(|e| TripleError::InvalidConfig(format!("rayon initialization error: {}", e)))
}

pub fn thread_count() -> usize {
    current_num_threads()
}

#[test]
fn test_thread_count_positive() {
    assert!(thread_count() >= 1);
}
