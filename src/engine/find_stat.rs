// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! What one search step did.

/// Summary of a call to [`FastSolver::find_next`](super::FastSolver::find_next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub struct FindStat {
    did_unwind: bool,
    did_unwind_root: bool,
    found_any: bool,
}

impl FindStat {
    /// Nothing happened.
    pub const fn null() -> Self {
        Self {
            did_unwind: false,
            did_unwind_root: false,
            found_any: false,
        }
    }

    pub const fn found_any_solution() -> Self {
        Self {
            did_unwind: false,
            did_unwind_root: false,
            found_any: true,
        }
    }

    pub(crate) const fn unwound_guess() -> Self {
        Self {
            did_unwind: true,
            did_unwind_root: false,
            found_any: false,
        }
    }

    pub(crate) const fn unwound_root() -> Self {
        Self {
            did_unwind: true,
            did_unwind_root: true,
            found_any: false,
        }
    }

    /// At least one choice point was abandoned.
    pub const fn did_unwind(&self) -> bool {
        self.did_unwind
    }

    /// The outermost choice point was abandoned: no solutions remain.
    pub const fn did_unwind_root(&self) -> bool {
        self.did_unwind_root
    }

    /// A solution is ready.
    pub const fn found_any(&self) -> bool {
        self.found_any
    }

    /// Combine the effects of two consecutive steps.
    pub(crate) const fn merge(self, later: Self) -> Self {
        Self {
            did_unwind: self.did_unwind || later.did_unwind,
            did_unwind_root: self.did_unwind_root || later.did_unwind_root,
            found_any: self.found_any || later.found_any,
        }
    }
}
