// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid geometry.
//!
//! This module contains the order-generic building blocks shared by the
//! solver and the canonicalizer:
//! - Order: compile-time sizes derived from the grid order
//! - HouseType and house indexing: rows, columns and blocks
//! - O2Bits: one-word candidate sets over `0..O²`
//! - Grid: O⁴ cells, each solved or unsolved

pub mod grid;
pub mod house;
pub mod o2_bits;
pub mod order;

// Re-export for convenience
pub use grid::{Grid, GridParseError, SYMBOL_ALPHABET};
pub use house::HouseType;
pub use o2_bits::O2Bits;
pub use order::{is_order_compiled, is_order_supported, Order, MAX_ORDER, MIN_ORDER};
