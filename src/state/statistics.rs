// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Search counters kept by the solver: guesses, unwinds, solutions, and one
//! counter per kind of contradiction met while propagating.

use crate::propagation::{Contradiction, ContradictionKind};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Guesses,
    Unwinds,
    Solutions,
}

const COUNT: usize = Counters::COUNT + Contradiction::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one contradiction of the given kind.
    pub(crate) fn record_contradiction(&mut self, contradiction: &Contradiction) {
        self.stats[Counters::COUNT + contradiction.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Get the number of contradictions of one kind.
    pub fn contradictions(&self, kind: ContradictionKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Total contradictions of every kind.
    pub fn total_contradictions(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            write!(f, "{:?}={} ", counter, self.get(counter))?;
        }
        for kind in ContradictionKind::iter() {
            write!(f, "{:?}={} ", kind, self.contradictions(kind))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HouseType;

    #[test]
    fn test_counters() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Guesses);
        stats.increment_counter(Counters::Guesses);
        stats.increment_counter(Counters::Solutions);
        assert_eq!(stats.get(Counters::Guesses), 2);
        assert_eq!(stats.get(Counters::Unwinds), 0);
        assert_eq!(stats.get(Counters::Solutions), 1);
    }

    #[test]
    fn test_contradiction_counters() {
        let mut stats = Statistics::new();
        stats.record_contradiction(&Contradiction::CellHasNoSymbol { cell: 1 });
        stats.record_contradiction(&Contradiction::SymbolHasNoPosition {
            house_type: HouseType::Row,
            house: 0,
            sym: 0,
        });
        stats.record_contradiction(&Contradiction::CellHasNoSymbol { cell: 2 });
        assert_eq!(stats.contradictions(ContradictionKind::CellHasNoSymbol), 2);
        assert_eq!(
            stats.contradictions(ContradictionKind::SymbolHasNoPosition),
            1
        );
        assert_eq!(stats.total_contradictions(), 3);
        assert_eq!(stats.get(Counters::Guesses), 0);
    }
}
