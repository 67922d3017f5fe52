// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Houses: rows, columns and blocks.
//!
//! Cells are numbered row-major (`cell = row * O² + col`). A house is a
//! `(HouseType, index)` pair with `index < O²`, and owns exactly O² cells,
//! addressed by a position `pos < O²` within the house:
//!
//! - Row `r`: position = column
//! - Col `c`: position = row
//! - Box `b`: position = row-major offset inside the O×O block
//!
//! Chutes group O houses of one axis: bands are O consecutive rows, stacks are
//! O consecutive columns.

use crate::geometry::order::Order;
use strum_macros::{EnumCount, EnumIter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three kinds of house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HouseType {
    Row,
    Col,
    Box,
}

impl HouseType {
    /// All house types in storage order.
    pub const ALL: [HouseType; 3] = [HouseType::Row, HouseType::Col, HouseType::Box];

    /// Index of this house type in per-type tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Row of a cell.
#[inline]
pub const fn row_of<const O: usize>(cell: usize) -> usize {
    cell / Order::<O>::O2
}

/// Column of a cell.
#[inline]
pub const fn col_of<const O: usize>(cell: usize) -> usize {
    cell % Order::<O>::O2
}

/// Block of a cell.
#[inline]
pub const fn box_of<const O: usize>(cell: usize) -> usize {
    box_at::<O>(row_of::<O>(cell), col_of::<O>(cell))
}

/// Block containing `(row, col)`.
#[inline]
pub const fn box_at<const O: usize>(row: usize, col: usize) -> usize {
    (row / O) * O + (col / O)
}

/// Cell at `(row, col)`.
#[inline]
pub const fn cell_at_rc<const O: usize>(row: usize, col: usize) -> usize {
    row * Order::<O>::O2 + col
}

/// Index of the house of type `house_type` that contains `cell`.
#[inline]
pub const fn house_of<const O: usize>(cell: usize, house_type: HouseType) -> usize {
    match house_type {
        HouseType::Row => row_of::<O>(cell),
        HouseType::Col => col_of::<O>(cell),
        HouseType::Box => box_of::<O>(cell),
    }
}

/// Position of `cell` within its house of type `house_type`.
#[inline]
pub const fn pos_in_house<const O: usize>(cell: usize, house_type: HouseType) -> usize {
    let row = row_of::<O>(cell);
    let col = col_of::<O>(cell);
    match house_type {
        HouseType::Row => col,
        HouseType::Col => row,
        HouseType::Box => (row % O) * O + (col % O),
    }
}

/// Cell at position `pos` of house `house` of type `house_type`.
#[inline]
pub const fn cell_at<const O: usize>(house_type: HouseType, house: usize, pos: usize) -> usize {
    match house_type {
        HouseType::Row => cell_at_rc::<O>(house, pos),
        HouseType::Col => cell_at_rc::<O>(pos, house),
        HouseType::Box => {
            let row = (house / O) * O + pos / O;
            let col = (house % O) * O + pos % O;
            cell_at_rc::<O>(row, col)
        }
    }
}

/// Chute (band for rows, stack for columns) containing a line.
#[inline]
pub const fn chute_of_line<const O: usize>(line: usize) -> usize {
    line / O
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_house_type_table_order() {
        assert_eq!(HouseType::COUNT, 3);
        let iterated: Vec<_> = HouseType::iter().collect();
        assert_eq!(iterated, HouseType::ALL.to_vec());
        for (i, house_type) in HouseType::ALL.iter().enumerate() {
            assert_eq!(house_type.index(), i);
        }
    }

    #[test]
    fn test_order3_coordinates() {
        // Cell 40 is the centre of a 9x9 grid.
        assert_eq!(row_of::<3>(40), 4);
        assert_eq!(col_of::<3>(40), 4);
        assert_eq!(box_of::<3>(40), 4);
        assert_eq!(pos_in_house::<3>(40, HouseType::Box), 4);

        // Bottom-right cell.
        assert_eq!(box_of::<3>(80), 8);
        assert_eq!(pos_in_house::<3>(80, HouseType::Box), 8);

        assert_eq!(box_of::<3>(cell_at_rc::<3>(3, 2)), 3);
        assert_eq!(box_of::<3>(cell_at_rc::<3>(2, 3)), 1);
    }

    #[test]
    fn test_cell_at_inverts_house_position() {
        for cell in 0..Order::<3>::O4 {
            for house_type in HouseType::ALL {
                let house = house_of::<3>(cell, house_type);
                let pos = pos_in_house::<3>(cell, house_type);
                assert_eq!(cell_at::<3>(house_type, house, pos), cell);
            }
        }
    }

    #[test]
    fn test_every_house_has_distinct_cells() {
        for house_type in HouseType::ALL {
            for house in 0..Order::<2>::O2 {
                let mut cells: Vec<_> = (0..Order::<2>::O2)
                    .map(|pos| cell_at::<2>(house_type, house, pos))
                    .collect();
                cells.sort_unstable();
                cells.dedup();
                assert_eq!(cells.len(), Order::<2>::O2);
            }
        }
    }
}
