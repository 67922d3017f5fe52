// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint propagation over dual candidate views.
//!
//! [`CandsPovs`] keeps two points of view on the same constraint state:
//!
//! - *cell → symbol*: for each cell, the symbols it may still hold. Stored
//!   once in row layout; [`CandsPovs::get`] projects it onto any house type.
//! - *symbol → position*: for each house and symbol, the positions in that
//!   house where the symbol may still go. One table per house type.
//!
//! All mutation goes through [`CandsPovs::remove`], which removes one
//! candidate and then runs elimination to a fixed point:
//!
//! 1. A cell left with one symbol (naked single) removes that symbol from
//!    every peer in its row, column and block.
//! 2. A symbol left with one position in a house (hidden single) removes
//!    every other symbol from the cell at that position.
//! 3. An empty set on either side is a [`Contradiction`], reported in the
//!    returned [`RemoveStatus`].

pub mod errors;
pub mod pov;

pub use errors::{Contradiction, ContradictionKind};
pub use pov::{CandsLayout, CandsPov};

use crate::geometry::house::{cell_at, col_of, house_of, pos_in_house, row_of};
use crate::geometry::{Grid, HouseType, O2Bits, Order};

/// Outcome of [`CandsPovs::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStatus {
    /// The candidate was already gone.
    NoOp,
    /// At least one candidate was removed and no contradiction arose.
    Progress,
    /// Propagation emptied a candidate set.
    Contradiction(Contradiction),
}

impl RemoveStatus {
    pub fn is_contradiction(&self) -> bool {
        matches!(self, RemoveStatus::Contradiction(_))
    }
}

/// Both candidate views plus the unsolved-cell count.
#[derive(Debug, Clone)]
pub struct CandsPovs<const O: usize> {
    /// Rows of cells; `cell_sym.get(row, col)` is a cell's symbol set.
    cell_sym: CandsPov<O>,
    /// Indexed by `HouseType::index()`; `(house, sym)` is a position set.
    sym_cell: [CandsPov<O>; 3],
    num_unsolved: usize,
}

impl<const O: usize> CandsPovs<O> {
    /// Every candidate present.
    pub fn new(layout: CandsLayout) -> Self {
        let () = Order::<O>::SUPPORTED;
        Self {
            cell_sym: CandsPov::new(layout),
            sym_cell: [
                CandsPov::new(layout),
                CandsPov::new(layout),
                CandsPov::new(layout),
            ],
            num_unsolved: Order::<O>::O4,
        }
    }

    pub fn layout(&self) -> CandsLayout {
        self.cell_sym.layout()
    }

    /// Cells with more than one candidate symbol.
    #[inline]
    pub fn num_unsolved(&self) -> usize {
        self.num_unsolved
    }

    /// Candidate symbols of a cell.
    #[inline]
    pub fn cell_cands(&self, cell: usize) -> O2Bits<O> {
        self.cell_sym.get(row_of::<O>(cell), col_of::<O>(cell))
    }

    /// Candidate positions of `sym` in a house.
    #[inline]
    pub fn sym_positions(&self, house_type: HouseType, house: usize, sym: u8) -> O2Bits<O> {
        self.sym_cell[house_type.index()].get(house, sym as usize)
    }

    /// Whether only one symbol remains for `cell`.
    #[inline]
    pub fn is_solved(&self, cell: usize) -> bool {
        self.cell_sym.is_solved(row_of::<O>(cell), col_of::<O>(cell))
    }

    /// The candidates of a cell still open.
    ///
    /// Contract: the cell is unsolved (checked in debug builds).
    #[inline]
    pub fn unsolved_cands(&self, cell: usize) -> O2Bits<O> {
        self.cell_sym.at_unsolved(row_of::<O>(cell), col_of::<O>(cell))
    }

    /// The symbol of a solved cell.
    ///
    /// Contract: the cell is solved (checked in debug builds).
    #[inline]
    pub fn at_solved(&self, cell: usize) -> u8 {
        self.cell_sym.at_solved(row_of::<O>(cell), col_of::<O>(cell))
    }

    /// Compact the pooled layouts.
    pub fn gc(&mut self) {
        self.cell_sym.gc();
        for pov in self.sym_cell.iter_mut() {
            pov.gc();
        }
    }

    /// Remove `sym` from the candidates of `cell` and propagate.
    pub fn remove(&mut self, cell: usize, sym: u8) -> RemoveStatus {
        self.propagate(vec![(cell, sym)])
    }

    /// Remove every symbol of `cell` except `sym`, and propagate.
    ///
    /// If `sym` was already excluded the cell empties and this reports a
    /// contradiction.
    pub fn solve_cell(&mut self, cell: usize, sym: u8) -> RemoveStatus {
        let others = self.cell_cands(cell) & !O2Bits::single(sym);
        self.propagate(others.iter().map(|other| (cell, other)).collect())
    }

    /// Drain `worklist` to a fixed point or the first contradiction.
    fn propagate(&mut self, mut worklist: Vec<(usize, u8)>) -> RemoveStatus {
        let mut status = RemoveStatus::NoOp;
        while let Some((cell, sym)) = worklist.pop() {
            match self.eliminate(cell, sym, &mut worklist) {
                Ok(false) => {}
                Ok(true) => status = RemoveStatus::Progress,
                Err(contradiction) => return RemoveStatus::Contradiction(contradiction),
            }
        }
        status
    }

    /// One elimination step. Queues the consequences onto `worklist`.
    ///
    /// Returns whether anything changed.
    fn eliminate(
        &mut self,
        cell: usize,
        sym: u8,
        worklist: &mut Vec<(usize, u8)>,
    ) -> Result<bool, Contradiction> {
        let row = row_of::<O>(cell);
        let col = col_of::<O>(cell);
        let Some(cands) = self.cell_sym.remove(row, col, sym) else {
            return Ok(false);
        };
        match cands.count() {
            0 => return Err(Contradiction::CellHasNoSymbol { cell }),
            1 => {
                self.num_unsolved -= 1;
                let solved = cands.only();
                for house_type in HouseType::ALL {
                    let house = house_of::<O>(cell, house_type);
                    for pos in 0..Order::<O>::O2 {
                        let peer = cell_at::<O>(house_type, house, pos);
                        if peer != cell {
                            worklist.push((peer, solved));
                        }
                    }
                }
            }
            _ => {}
        }

        for house_type in HouseType::ALL {
            let house = house_of::<O>(cell, house_type);
            let pos = pos_in_house::<O>(cell, house_type);
            let Some(positions) =
                self.sym_cell[house_type.index()].remove(house, sym as usize, pos as u8)
            else {
                continue;
            };
            match positions.count() {
                0 => {
                    return Err(Contradiction::SymbolHasNoPosition {
                        house_type,
                        house,
                        sym,
                    })
                }
                1 => {
                    let target = cell_at::<O>(house_type, house, positions.only() as usize);
                    let others = self.cell_cands(target) & !O2Bits::single(sym);
                    worklist.extend(others.iter().map(|other| (target, other)));
                }
                _ => {}
            }
        }
        Ok(true)
    }

    /// The grid of solved cells; unsolved cells are left empty.
    pub fn to_grid(&self) -> Grid<O> {
        let mut grid = Grid::new();
        for cell in (0..Order::<O>::O4).filter(|&cell| self.is_solved(cell)) {
            grid.set(cell, self.at_solved(cell));
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts() -> [CandsLayout; 2] {
        [CandsLayout::Dense, CandsLayout::Compact]
    }

    #[test]
    fn test_new_is_unconstrained() {
        let povs = CandsPovs::<2>::new(CandsLayout::Dense);
        assert_eq!(povs.num_unsolved(), 16);
        assert_eq!(povs.cell_cands(5), O2Bits::full());
        assert_eq!(povs.sym_positions(HouseType::Box, 3, 1), O2Bits::full());
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        for layout in layouts() {
            let mut povs = CandsPovs::<2>::new(layout);
            assert_eq!(povs.remove(0, 1), RemoveStatus::Progress);
            assert_eq!(povs.remove(0, 1), RemoveStatus::NoOp);
            assert!(!povs.cell_cands(0).contains(1));
            assert!(!povs.sym_positions(HouseType::Row, 0, 1).contains(0));
            assert!(!povs.sym_positions(HouseType::Col, 0, 1).contains(0));
            assert!(!povs.sym_positions(HouseType::Box, 0, 1).contains(0));
        }
    }

    #[test]
    fn test_naked_single_clears_peers() {
        for layout in layouts() {
            let mut povs = CandsPovs::<3>::new(layout);
            assert_eq!(povs.solve_cell(40, 4), RemoveStatus::Progress);
            assert_eq!(povs.at_solved(40), 4);
            assert_eq!(povs.num_unsolved(), 80);
            // Same row, same column, same block.
            assert!(!povs.cell_cands(36).contains(4));
            assert!(!povs.cell_cands(4).contains(4));
            assert!(!povs.cell_cands(30).contains(4));
            // Unrelated cell.
            assert!(povs.cell_cands(0).contains(4));
            assert_eq!(povs.sym_positions(HouseType::Box, 4, 4).only(), 4);
        }
    }

    #[test]
    fn test_hidden_single() {
        for layout in layouts() {
            let mut povs = CandsPovs::<2>::new(layout);
            // Symbol 0 may only go in cell 3 of row 0.
            povs.remove(0, 0);
            povs.remove(1, 0);
            assert_eq!(povs.remove(2, 0), RemoveStatus::Progress);
            assert_eq!(povs.at_solved(3), 0);
            assert!(povs.is_solved(3));
            assert_eq!(povs.sym_positions(HouseType::Row, 0, 0).only(), 3);
            assert_eq!(povs.unsolved_cands(0).count(), 3);
        }
    }

    #[test]
    fn test_contradiction_detected() {
        for layout in layouts() {
            let mut povs = CandsPovs::<2>::new(layout);
            assert_eq!(povs.solve_cell(0, 2), RemoveStatus::Progress);
            // Cell 1 shares a row with cell 0 and cannot hold 2 any more.
            let status = povs.solve_cell(1, 2);
            assert!(status.is_contradiction(), "{:?}", status);
        }
    }

    #[test]
    fn test_removing_last_candidate() {
        let mut povs = CandsPovs::<2>::new(CandsLayout::Dense);
        povs.solve_cell(0, 2);
        assert_eq!(
            povs.remove(0, 2),
            RemoveStatus::Contradiction(Contradiction::CellHasNoSymbol { cell: 0 })
        );
    }

    #[test]
    fn test_propagation_solves_sparse_4x4() {
        // Symbol 0 is then forced into the last cell of row 3.
        let puzzle: Grid<2> = "0... ..0. .0.2 ..1.".parse().unwrap();
        for layout in layouts() {
            let mut povs = CandsPovs::<2>::new(layout);
            for (cell, value) in puzzle.cells().iter().enumerate() {
                if let Some(sym) = value {
                    assert!(!povs.solve_cell(cell, *sym).is_contradiction());
                }
            }
            let grid = povs.to_grid();
            assert!(grid.follows_rule());
            assert!(grid.agrees_with(&puzzle));
            assert_eq!(povs.at_solved(15), 0);
            assert!(povs.num_unsolved() < 16 - puzzle.num_filled());
        }
    }

    #[test]
    fn test_views_stay_in_sync() {
        let mut povs = CandsPovs::<3>::new(CandsLayout::Compact);
        povs.solve_cell(0, 0);
        povs.solve_cell(10, 1);
        povs.remove(20, 2);
        povs.gc();
        for house_type in HouseType::ALL {
            for house in 0..9 {
                for pos in 0..9 {
                    let cell = cell_at::<3>(house_type, house, pos);
                    for sym in 0..9u8 {
                        assert_eq!(
                            povs.cell_cands(cell).contains(sym),
                            povs.sym_positions(house_type, house, sym).contains(pos as u8),
                        );
                    }
                }
            }
        }
    }
}
