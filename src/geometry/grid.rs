// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grids of symbols.
//!
//! A grid holds O⁴ cells in row-major order. Each cell is either solved
//! (`Some(symbol)` with `symbol < O²`) or unsolved (`None`). A puzzle may have
//! unsolved cells and is not required to be consistent; a solution is full
//! and follows the one-symbol-per-house rule.
//!
//! # Text format
//!
//! One character per cell, taken from [`SYMBOL_ALPHABET`] (the symbol value is
//! the character's index), with `.` or `_` for an unsolved cell. ASCII
//! whitespace is ignored, so a grid can be written one row per line.
//!
//! ```
//! use ordoku::geometry::Grid;
//!
//! let grid: Grid<2> = "01 23\n23 01\n10 32\n32 10".parse().unwrap();
//! assert!(grid.is_solution());
//! assert_eq!(grid.at(2, 1), Some(0));
//!
//! let puzzle: Grid<2> = "0... .... .... ...3".parse().unwrap();
//! assert_eq!(puzzle.num_filled(), 2);
//! ```

use crate::geometry::house::{cell_at, cell_at_rc, col_of, row_of, HouseType};
use crate::geometry::o2_bits::O2Bits;
use crate::geometry::order::Order;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Characters used for symbols 0.. in text form (enough for order 8).
pub const SYMBOL_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@#";

/// Character used when printing an unsolved cell.
pub const UNSOLVED_CHAR: char = '.';

/// An O²×O² grid.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid<const O: usize> {
    cells: Vec<Option<u8>>,
}

impl<const O: usize> Grid<O> {
    /// An empty grid (every cell unsolved).
    pub fn new() -> Self {
        let () = Order::<O>::SUPPORTED;
        Self {
            cells: vec![None; Order::<O>::O4],
        }
    }

    /// Build a grid from O⁴ row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells` has the wrong length or holds a symbol >= O².
    pub fn from_cells(cells: Vec<Option<u8>>) -> Self {
        let () = Order::<O>::SUPPORTED;
        assert_eq!(cells.len(), Order::<O>::O4, "grid needs O^4 cells");
        assert!(
            cells.iter().flatten().all(|&sym| (sym as usize) < Order::<O>::O2),
            "grid symbol out of range"
        );
        Self { cells }
    }

    #[inline]
    pub fn get(&self, cell: usize) -> Option<u8> {
        self.cells[cell]
    }

    #[inline]
    pub fn set(&mut self, cell: usize, sym: u8) {
        debug_assert!((sym as usize) < Order::<O>::O2);
        self.cells[cell] = Some(sym);
    }

    #[inline]
    pub fn clear(&mut self, cell: usize) {
        self.cells[cell] = None;
    }

    /// The cell at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Option<u8> {
        self.cells[cell_at_rc::<O>(row, col)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    pub fn num_filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// True if no house holds the same symbol twice. Unsolved cells are ignored.
    pub fn follows_rule(&self) -> bool {
        for house_type in HouseType::ALL {
            for house in 0..Order::<O>::O2 {
                let mut seen = O2Bits::<O>::empty();
                for pos in 0..Order::<O>::O2 {
                    if let Some(sym) = self.cells[cell_at::<O>(house_type, house, pos)] {
                        if seen.contains(sym) {
                            return false;
                        }
                        seen.insert(sym);
                    }
                }
            }
        }
        true
    }

    /// Full and following the rule.
    pub fn is_solution(&self) -> bool {
        self.is_filled() && self.follows_rule()
    }

    /// True if every solved cell of `puzzle` holds the same symbol here.
    pub fn agrees_with(&self, puzzle: &Grid<O>) -> bool {
        self.cells
            .iter()
            .zip(puzzle.cells.iter())
            .all(|(mine, given)| given.is_none() || mine == given)
    }

    /// The grid mirrored about its main diagonal.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for (cell, &value) in self.cells.iter().enumerate() {
            out.cells[cell_at_rc::<O>(col_of::<O>(cell), row_of::<O>(cell))] = value;
        }
        out
    }
}

impl<const O: usize> Default for Grid<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure to parse a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The text does not hold exactly O⁴ cells.
    WrongLength { expected: usize, found: usize },

    /// A character that is neither a symbol nor an unsolved marker.
    InvalidSymbol { index: usize, ch: char },

    /// A known symbol character whose value is too large for this order.
    SymbolOutOfRange { index: usize, ch: char, order: usize },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongLength { expected, found } => {
                write!(f, "expected {} cells, found {}", expected, found)
            }
            GridParseError::InvalidSymbol { index, ch } => {
                write!(f, "cell {}: {:?} is not a symbol", index, ch)
            }
            GridParseError::SymbolOutOfRange { index, ch, order } => {
                write!(
                    f,
                    "cell {}: symbol {:?} is out of range for order {}",
                    index, ch, order
                )
            }
        }
    }
}

impl std::error::Error for GridParseError {}

fn symbol_value(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    SYMBOL_ALPHABET
        .iter()
        .position(|&b| b == ch as u8)
        .map(|i| i as u8)
}

impl<const O: usize> FromStr for Grid<O> {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(Order::<O>::O4);
        for ch in s.chars().filter(|ch| !ch.is_ascii_whitespace()) {
            let index = cells.len();
            if ch == '.' || ch == '_' {
                cells.push(None);
                continue;
            }
            let sym = symbol_value(ch).ok_or(GridParseError::InvalidSymbol { index, ch })?;
            if sym as usize >= Order::<O>::O2 {
                return Err(GridParseError::SymbolOutOfRange {
                    index,
                    ch,
                    order: O,
                });
            }
            cells.push(Some(sym));
        }
        if cells.len() != Order::<O>::O4 {
            return Err(GridParseError::WrongLength {
                expected: Order::<O>::O4,
                found: cells.len(),
            });
        }
        Ok(Self::from_cells(cells))
    }
}

impl<const O: usize> fmt::Display for Grid<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Order::<O>::O2 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..Order::<O>::O2 {
                let ch = match self.at(row, col) {
                    Some(sym) => SYMBOL_ALPHABET[sym as usize] as char,
                    None => UNSOLVED_CHAR,
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

impl<const O: usize> fmt::Debug for Grid<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>", O)?;
        fmt::Display::fmt(self, f)
    }
}
