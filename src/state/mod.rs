// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable solver state that is not part of the candidate tables.

pub mod statistics;

pub use statistics::{Counters, Statistics};
