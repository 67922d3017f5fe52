// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Order-generic Sudoku grids: solving by candidate propagation, and
//! canonical forms under the grid symmetry group.
//!
//! A grid of order O has O² rows, O² columns and O² blocks of O×O cells,
//! filled with the symbols `0..O²`. Orders 2 through 8 are supported; the
//! order is a const generic, so `Grid<3>` is the classic 9×9 grid.
//!
//! # Architecture
//!
//! ## Propagation
//!
//! [`propagation::CandsPovs`] keeps every candidate set twice, once per
//! point of view:
//! - cell → symbol: which symbols a cell may still hold
//! - symbol → cell: where in a house a symbol may still go
//!
//! Every removal runs to a fixed point, firing naked singles on one side and
//! hidden singles on the other, and reports a
//! [`propagation::Contradiction`] instead of failing.
//!
//! ## Search
//!
//! [`FastSolver`] is a pull-based enumerator. Propagation stalls are broken
//! by guessing, and each guess pushes a snapshot onto the [`Trail`].
//! Solutions come out one at a time from
//! [`FastSolver::get_next_solution`] (or through `Iterator`).
//!
//! ## Symmetry
//!
//! [`Transformation`] is a member of the symmetry group (relabelling, line
//! and chute permutation, transposition). [`canonicalize`] picks the
//! transformation that takes a solved grid to the representative of its
//! class, using a binomial model of label co-occurrence to order labels,
//! lines and chutes, and [`symmetry::TieLinks`] to track what is still tied.
//! What the model leaves tied is settled by an individualize-and-refine
//! search whose memory grows with its depth only.
//!
//! # Example
//!
//! ```
//! use ordoku::{canonicalize, FastSolver, Grid};
//!
//! let puzzle: Grid<2> = "0... ..0. .0.2 ..1.".parse().unwrap();
//! for solution in FastSolver::new(&puzzle) {
//!     let canon = canonicalize(&solution).apply(&solution);
//!     assert!(canon.is_solution());
//! }
//! ```

pub mod engine;
pub mod geometry;
pub mod propagation;
pub mod state;
pub mod symmetry;
pub mod trail;

// Re-export commonly used types
pub use engine::{count_solutions, FastSolver, FindStat};
pub use geometry::{Grid, GridParseError, HouseType, O2Bits};
pub use propagation::{CandsLayout, CandsPovs, Contradiction, RemoveStatus};
pub use state::{Counters, Statistics};
pub use symmetry::{
    canonicalize, canonicalize_buffer, canonicalize_in_place, TieLinks, Transformation,
};
pub use trail::Trail;
