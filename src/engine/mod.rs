// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search over propagated candidates.
//!
//! [`FastSolver`] is a pull-based state machine. Each call to
//! [`FastSolver::get_next_solution`] resumes the search where the previous
//! call stopped and runs until the next complete grid or exhaustion:
//!
//! 1. **propagate**: every assignment goes through
//!    [`CandsPovs::solve_cell`], which runs elimination to a fixed point.
//! 2. **guess**: when cells remain unsolved, pick the cell with the fewest
//!    candidates (lowest index on ties), push a choice point onto the
//!    [`Trail`], and try its lowest candidate.
//! 3. **unwind**: on a contradiction, restore the innermost choice point and
//!    try its next candidate; pop it when none remain.
//! 4. **yield**: with no unsolved cells the grid is a solution. The next call
//!    first unwinds as if that solution had been a contradiction.
//! 5. **exhausted**: popping the outermost choice point ends the search, and
//!    every later call returns `None`.
//!
//! # Example
//!
//! ```
//! use ordoku::engine::FastSolver;
//! use ordoku::geometry::Grid;
//!
//! let puzzle: Grid<2> = "0... ..0. .0.2 ..1.".parse().unwrap();
//! let mut solver = FastSolver::new(&puzzle);
//! while let Some(solution) = solver.get_next_solution() {
//!     assert!(solution.is_solution());
//!     assert!(solution.agrees_with(&puzzle));
//! }
//! assert!(solver.get_next_solution().is_none());
//! ```

pub mod find_stat;

pub use find_stat::FindStat;

use crate::geometry::{Grid, Order};
use crate::propagation::{CandsLayout, CandsPovs, RemoveStatus};
use crate::state::{Counters, Statistics};
use crate::trail::Trail;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Lazy enumerator of all completions of a puzzle.
///
/// Not `Clone`: it owns the search state exclusively.
#[derive(Debug)]
pub struct FastSolver<const O: usize> {
    cands: CandsPovs<O>,
    trail: Trail<O>,
    statistics: Statistics,
    /// A solution was handed out; the next search step must move past it.
    resume_after_solution: bool,
    exhausted: bool,
}

impl<const O: usize> FastSolver<O> {
    /// Start solving `puzzle` with the default candidate layout for `O`.
    ///
    /// Any grid is accepted. A puzzle that breaks the one-symbol-per-house
    /// rule simply has no solutions.
    pub fn new(puzzle: &Grid<O>) -> Self {
        Self::with_layout(puzzle, CandsLayout::for_order(O))
    }

    /// Start solving `puzzle` with an explicit candidate layout.
    pub fn with_layout(puzzle: &Grid<O>, layout: CandsLayout) -> Self {
        let mut solver = Self {
            cands: CandsPovs::new(layout),
            trail: Trail::new(),
            statistics: Statistics::new(),
            resume_after_solution: false,
            exhausted: false,
        };
        for (cell, value) in puzzle.cells().iter().enumerate() {
            let Some(sym) = *value else {
                continue;
            };
            if let RemoveStatus::Contradiction(contradiction) = solver.cands.solve_cell(cell, sym)
            {
                debug!(%contradiction, "puzzle givens are contradictory");
                solver.statistics.record_contradiction(&contradiction);
                solver.exhausted = true;
                break;
            }
        }
        solver
    }

    /// The next solution, or `None` once every solution has been returned.
    pub fn get_next_solution(&mut self) -> Option<Grid<O>> {
        if self.find_next().found_any() {
            Some(self.cands.to_grid())
        } else {
            None
        }
    }

    /// Advance the search to the next solution.
    ///
    /// When the result has `found_any()`, the solution can be read with
    /// [`FastSolver::current_solution`] until the next call.
    pub fn find_next(&mut self) -> FindStat {
        if self.exhausted {
            return FindStat::null();
        }
        let mut stat = FindStat::null();
        if self.resume_after_solution {
            self.resume_after_solution = false;
            stat = stat.merge(self.try_next_choice());
        }
        while !self.exhausted {
            if self.cands.num_unsolved() == 0 {
                self.resume_after_solution = true;
                self.statistics.increment_counter(Counters::Solutions);
                debug!(depth = self.trail.depth(), "found solution");
                return stat.merge(FindStat::found_any_solution());
            }
            let cell = self.pick_guess_cell();
            stat = stat.merge(self.guess(cell));
        }
        debug!(statistics = %self.statistics, "search exhausted");
        stat
    }

    /// The solution found by the last successful [`FastSolver::find_next`].
    pub fn current_solution(&self) -> Option<Grid<O>> {
        if self.resume_after_solution {
            Some(self.cands.to_grid())
        } else {
            None
        }
    }

    /// Whether the search has finished.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of open choice points.
    pub fn depth(&self) -> usize {
        self.trail.depth()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Unsolved cell with the fewest candidates, lowest index on ties.
    fn pick_guess_cell(&self) -> usize {
        let mut best_cell = 0;
        let mut best_count = u32::MAX;
        for cell in 0..Order::<O>::O4 {
            let count = self.cands.cell_cands(cell).count();
            if count > 1 && count < best_count {
                best_cell = cell;
                best_count = count;
                if count == 2 {
                    break;
                }
            }
        }
        debug_assert!(best_count != u32::MAX, "guess requested with no unsolved cell");
        best_cell
    }

    /// Push a choice point for `cell` and try its first candidate.
    fn guess(&mut self, cell: usize) -> FindStat {
        self.cands.gc();
        let depth = self.trail.checkpoint(self.cands.clone(), cell);
        self.statistics.increment_counter(Counters::Guesses);
        trace!(cell, depth, cands = %self.cands.unsolved_cands(cell), "guess");
        self.try_next_choice()
    }

    /// Assign the next untried candidate of the innermost choice point,
    /// popping exhausted choice points on the way.
    fn try_next_choice(&mut self) -> FindStat {
        let mut stat = FindStat::null();
        loop {
            let Some(frame) = self.trail.top_mut() else {
                self.exhausted = true;
                return stat.merge(FindStat::unwound_root());
            };
            let Some(sym) = frame.next_symbol() else {
                self.trail.rewind();
                self.statistics.increment_counter(Counters::Unwinds);
                trace!(depth = self.trail.depth(), "unwind");
                stat = stat.merge(FindStat::unwound_guess());
                continue;
            };
            let cell = frame.cell();
            self.cands = frame.snapshot().clone();
            match self.cands.solve_cell(cell, sym) {
                RemoveStatus::Contradiction(contradiction) => {
                    self.statistics.record_contradiction(&contradiction);
                    trace!(cell, sym, %contradiction, "rejected");
                }
                RemoveStatus::NoOp | RemoveStatus::Progress => return stat,
            }
        }
    }
}

impl<const O: usize> Iterator for FastSolver<O> {
    type Item = Grid<O>;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_next_solution()
    }
}

// Exhaustion is permanent: `find_next` returns early once `exhausted` is set.
impl<const O: usize> FusedIterator for FastSolver<O> {}

/// Count the solutions of `puzzle`, stopping at `limit`.
pub fn count_solutions<const O: usize>(puzzle: &Grid<O>, limit: usize) -> usize {
    FastSolver::new(puzzle).take(limit).count()
}
