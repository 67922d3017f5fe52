// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Contradictions found during constraint propagation.
//!
//! A contradiction is an expected outcome while searching: it means the
//! current branch has no completion, and the solver unwinds.

use crate::geometry::HouseType;
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants, EnumIter};

/// Why a candidate removal emptied a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumDiscriminants)]
#[strum_discriminants(name(ContradictionKind), derive(EnumIter, Hash))]
pub enum Contradiction {
    /// A cell has no remaining candidate symbol.
    CellHasNoSymbol { cell: usize },

    /// A symbol has no remaining position within a house.
    SymbolHasNoPosition {
        house_type: HouseType,
        house: usize,
        sym: u8,
    },
}

impl Contradiction {
    /// The fieldless kind, used to index per-kind counters.
    pub fn kind(&self) -> ContradictionKind {
        ContradictionKind::from(self)
    }
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contradiction::CellHasNoSymbol { cell } => {
                write!(f, "Cell {} has no candidate symbol", cell)
            }
            Contradiction::SymbolHasNoPosition {
                house_type,
                house,
                sym,
            } => {
                write!(
                    f,
                    "Symbol {} has no position in {:?} {}",
                    sym, house_type, house
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_kinds_match_variants() {
        assert_eq!(Contradiction::COUNT, ContradictionKind::iter().count());
        assert_eq!(
            Contradiction::CellHasNoSymbol { cell: 3 }.kind(),
            ContradictionKind::CellHasNoSymbol
        );
    }

    #[test]
    fn test_display() {
        let c = Contradiction::SymbolHasNoPosition {
            house_type: HouseType::Box,
            house: 2,
            sym: 7,
        };
        assert_eq!(c.to_string(), "Symbol 7 has no position in Box 2");
        assert_eq!(
            Contradiction::CellHasNoSymbol { cell: 40 }.to_string(),
            "Cell 40 has no candidate symbol"
        );
    }
}
