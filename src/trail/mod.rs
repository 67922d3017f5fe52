// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Choice-point trail for the backtracking solver.
//!
//! Each guess pushes a checkpoint holding a full copy of the candidate state
//! taken just before the guess, the guessed cell, and the symbols of that
//! cell not tried yet. Rewinding restores the copy, so no per-change undo log
//! is needed. Depth is bounded by the number of cells, since every guess
//! solves at least one more cell.

use crate::geometry::{O2Bits, Order};
use crate::propagation::CandsPovs;

/// A saved search state created when the solver guesses a value.
#[derive(Debug, Clone)]
pub struct ChoicePoint<const O: usize> {
    /// Candidate state before the guess.
    snapshot: CandsPovs<O>,
    /// The guessed cell.
    cell: usize,
    /// Candidates of `cell` still to try.
    untried: O2Bits<O>,
}

impl<const O: usize> ChoicePoint<O> {
    pub fn cell(&self) -> usize {
        self.cell
    }

    pub fn untried(&self) -> O2Bits<O> {
        self.untried
    }

    pub fn snapshot(&self) -> &CandsPovs<O> {
        &self.snapshot
    }

    /// Take the lowest untried symbol.
    pub fn next_symbol(&mut self) -> Option<u8> {
        let sym = self.untried.first()?;
        self.untried.remove(sym);
        Some(sym)
    }
}

/// Stack of choice points, innermost last.
#[derive(Debug, Clone)]
pub struct Trail<const O: usize> {
    frames: Vec<ChoicePoint<O>>,
}

impl<const O: usize> Trail<O> {
    /// Deepest possible stack.
    pub const MAX_DEPTH: usize = Order::<O>::O4;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Record a checkpoint before guessing at `cell`.
    ///
    /// Returns the new depth.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_DEPTH (indicates a bug in the solver).
    pub fn checkpoint(&mut self, snapshot: CandsPovs<O>, cell: usize) -> usize {
        if self.frames.len() >= Self::MAX_DEPTH {
            panic!("Trail overflow: exceeded {} choice points", Self::MAX_DEPTH);
        }
        let untried = snapshot.unsolved_cands(cell);
        self.frames.push(ChoicePoint {
            snapshot,
            cell,
            untried,
        });
        self.frames.len()
    }

    /// The innermost choice point.
    pub fn top_mut(&mut self) -> Option<&mut ChoicePoint<O>> {
        self.frames.last_mut()
    }

    /// Drop the innermost choice point.
    ///
    /// Returns true if there was one.
    pub fn rewind(&mut self) -> bool {
        self.frames.pop().is_some()
    }

    /// Number of active choice points.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl<const O: usize> Default for Trail<O> {
    fn default() -> Self {
        Self::new()
    }
}
