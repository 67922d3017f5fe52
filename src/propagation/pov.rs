// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CandsPov: one table of candidate sets.
//!
//! A table is indexed by `(house, at)` with both in `0..O²`, and holds one
//! [`O2Bits`] per entry. An entry with exactly one member is *solved*; an
//! empty entry is a contradiction left for the caller to report.
//!
//! Two storage layouts are available and behave identically:
//!
//! - [`CandsLayout::Dense`]: one set per entry, O⁴ words.
//! - [`CandsLayout::Compact`]: per house, a `solved` bitmap with the solved
//!   member stored inline, and an offset into a shared pool for the unsolved
//!   entries only. Solving an entry leaves a dead pool slot behind;
//!   [`CandsPov::gc`] rebuilds the pool from the live entries. Pool indices
//!   are never handed out, so compaction is not observable.

use crate::geometry::order::{Order, COMPACT_CANDS_ORDER_THRESHOLD};
use crate::geometry::O2Bits;

/// Storage layout for candidate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandsLayout {
    Dense,
    Compact,
}

impl CandsLayout {
    /// The default layout for an order.
    pub const fn for_order(order: usize) -> Self {
        if order >= COMPACT_CANDS_ORDER_THRESHOLD {
            CandsLayout::Compact
        } else {
            CandsLayout::Dense
        }
    }
}

/// A table of O² × O² candidate sets.
#[derive(Debug, Clone)]
pub enum CandsPov<const O: usize> {
    Dense(DenseCands<O>),
    Compact(CompactCands<O>),
}

impl<const O: usize> CandsPov<O> {
    /// A table with every entry full.
    pub fn new(layout: CandsLayout) -> Self {
        match layout {
            CandsLayout::Dense => CandsPov::Dense(DenseCands::new()),
            CandsLayout::Compact => CandsPov::Compact(CompactCands::new()),
        }
    }

    pub fn layout(&self) -> CandsLayout {
        match self {
            CandsPov::Dense(_) => CandsLayout::Dense,
            CandsPov::Compact(_) => CandsLayout::Compact,
        }
    }

    /// The current candidate set of an entry.
    #[inline]
    pub fn get(&self, house: usize, at: usize) -> O2Bits<O> {
        match self {
            CandsPov::Dense(d) => d.get(house, at),
            CandsPov::Compact(c) => c.get(house, at),
        }
    }

    /// Remove `bit` from an entry.
    ///
    /// Returns the updated set, or `None` if `bit` was already absent.
    #[inline]
    pub fn remove(&mut self, house: usize, at: usize, bit: u8) -> Option<O2Bits<O>> {
        match self {
            CandsPov::Dense(d) => d.remove(house, at, bit),
            CandsPov::Compact(c) => c.remove(house, at, bit),
        }
    }

    #[inline]
    pub fn is_solved(&self, house: usize, at: usize) -> bool {
        self.get(house, at).count() == 1
    }

    /// The single remaining member of a solved entry.
    ///
    /// Contract: the entry is solved (checked in debug builds).
    #[inline]
    pub fn at_solved(&self, house: usize, at: usize) -> u8 {
        let cands = self.get(house, at);
        debug_assert!(cands.count() == 1, "entry ({house},{at}) is not solved");
        cands.only()
    }

    /// The candidates of an unsolved entry.
    ///
    /// Contract: the entry has more than one member (checked in debug builds).
    #[inline]
    pub fn at_unsolved(&self, house: usize, at: usize) -> O2Bits<O> {
        let cands = self.get(house, at);
        debug_assert!(cands.count() > 1, "entry ({house},{at}) is not unsolved");
        cands
    }

    /// Reclaim pool slots of solved entries. No-op for the dense layout.
    pub fn gc(&mut self) {
        if let CandsPov::Compact(c) = self {
            c.gc();
        }
    }

    /// Number of stored candidate words.
    pub fn storage_len(&self) -> usize {
        match self {
            CandsPov::Dense(d) => d.cands.len(),
            CandsPov::Compact(c) => c.pool.len(),
        }
    }
}

/// One set per entry.
#[derive(Debug, Clone)]
pub struct DenseCands<const O: usize> {
    cands: Vec<O2Bits<O>>,
}

impl<const O: usize> DenseCands<O> {
    fn new() -> Self {
        Self {
            cands: vec![O2Bits::full(); Order::<O>::O4],
        }
    }

    #[inline]
    fn get(&self, house: usize, at: usize) -> O2Bits<O> {
        self.cands[house * Order::<O>::O2 + at]
    }

    #[inline]
    fn remove(&mut self, house: usize, at: usize, bit: u8) -> Option<O2Bits<O>> {
        let cands = &mut self.cands[house * Order::<O>::O2 + at];
        cands.remove(bit).then_some(*cands)
    }
}

/// Per-house bookkeeping of the compact layout.
///
/// For each `at`: if `solved` has it, `sym_or_offset[at]` is the solved
/// member; else if `emptied` has it, the entry is empty; otherwise the entry
/// lives at `pool[offset + sym_or_offset[at]]`.
#[derive(Debug, Clone)]
struct HouseData<const O: usize> {
    solved: O2Bits<O>,
    emptied: O2Bits<O>,
    offset: usize,
    sym_or_offset: Vec<u8>,
}

/// Solved entries inline, unsolved entries pooled.
#[derive(Debug, Clone)]
pub struct CompactCands<const O: usize> {
    houses: Vec<HouseData<O>>,
    pool: Vec<O2Bits<O>>,
}

impl<const O: usize> CompactCands<O> {
    fn new() -> Self {
        let houses = (0..Order::<O>::O2)
            .map(|house| HouseData {
                solved: O2Bits::empty(),
                emptied: O2Bits::empty(),
                offset: house * Order::<O>::O2,
                sym_or_offset: (0..Order::<O>::O2 as u8).collect(),
            })
            .collect();
        Self {
            houses,
            pool: vec![O2Bits::full(); Order::<O>::O4],
        }
    }

    #[inline]
    fn get(&self, house: usize, at: usize) -> O2Bits<O> {
        let data = &self.houses[house];
        let at_bit = at as u8;
        if data.solved.contains(at_bit) {
            O2Bits::single(data.sym_or_offset[at])
        } else if data.emptied.contains(at_bit) {
            O2Bits::empty()
        } else {
            self.pool[data.offset + data.sym_or_offset[at] as usize]
        }
    }

    fn remove(&mut self, house: usize, at: usize, bit: u8) -> Option<O2Bits<O>> {
        let data = &mut self.houses[house];
        let at_bit = at as u8;
        if data.emptied.contains(at_bit) {
            return None;
        }
        if data.solved.contains(at_bit) {
            if data.sym_or_offset[at] != bit {
                return None;
            }
            data.solved.remove(at_bit);
            data.emptied.insert(at_bit);
            return Some(O2Bits::empty());
        }
        let slot = &mut self.pool[data.offset + data.sym_or_offset[at] as usize];
        if !slot.remove(bit) {
            return None;
        }
        let cands = *slot;
        match cands.count() {
            0 => data.emptied.insert(at_bit),
            1 => {
                data.solved.insert(at_bit);
                data.sym_or_offset[at] = cands.only();
            }
            _ => {}
        }
        Some(cands)
    }

    fn gc(&mut self) {
        let mut pool = Vec::with_capacity(self.pool.len());
        for data in self.houses.iter_mut() {
            let offset = pool.len();
            let dead = data.solved | data.emptied;
            let mut next = 0u8;
            for at in 0..Order::<O>::O2 {
                if dead.contains(at as u8) {
                    continue;
                }
                pool.push(self.pool[data.offset + data.sym_or_offset[at] as usize]);
                data.sym_or_offset[at] = next;
                next += 1;
            }
            data.offset = offset;
        }
        self.pool = pool;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both_layouts<const O: usize>() -> [CandsPov<O>; 2] {
        [
            CandsPov::new(CandsLayout::Dense),
            CandsPov::new(CandsLayout::Compact),
        ]
    }

    #[test]
    fn test_default_layout() {
        assert_eq!(CandsLayout::for_order(2), CandsLayout::Dense);
        assert_eq!(CandsLayout::for_order(4), CandsLayout::Dense);
        assert_eq!(CandsLayout::for_order(5), CandsLayout::Compact);
    }

    #[test]
    fn test_remove_until_solved() {
        for mut pov in both_layouts::<2>() {
            assert_eq!(pov.get(1, 2), O2Bits::full());
            assert_eq!(pov.remove(1, 2, 0).map(|b| b.count()), Some(3));
            assert_eq!(pov.remove(1, 2, 0), None);
            pov.remove(1, 2, 1);
            assert!(!pov.is_solved(1, 2));
            assert_eq!(pov.at_unsolved(1, 2).count(), 2);
            pov.remove(1, 2, 3);
            assert!(pov.is_solved(1, 2));
            assert_eq!(pov.at_solved(1, 2), 2);
            assert_eq!(pov.remove(1, 2, 3), None);
            assert_eq!(pov.remove(1, 2, 2), Some(O2Bits::empty()));
            assert!(pov.get(1, 2).is_empty());
            assert_eq!(pov.remove(1, 2, 2), None);
        }
    }

    #[test]
    fn test_gc_shrinks_pool_and_preserves_contents() {
        let mut pov = CandsPov::<3>::new(CandsLayout::Compact);
        for at in 0..9 {
            for bit in 0..9u8 {
                if bit != at as u8 {
                    pov.remove(4, at, bit);
                }
            }
        }
        pov.remove(0, 0, 5);
        let before: Vec<_> = (0..81).map(|i| pov.get(i / 9, i % 9)).collect();
        assert_eq!(pov.storage_len(), 81);
        pov.gc();
        assert_eq!(pov.storage_len(), 72);
        let after: Vec<_> = (0..81).map(|i| pov.get(i / 9, i % 9)).collect();
        assert_eq!(before, after);

        // Still mutable after compaction.
        pov.remove(0, 0, 6);
        assert_eq!(pov.get(0, 0).count(), 7);
        assert_eq!(pov.get(0, 1).count(), 9);
    }

    #[test]
    fn test_dense_gc_is_noop() {
        let mut pov = CandsPov::<2>::new(CandsLayout::Dense);
        pov.remove(0, 0, 0);
        pov.gc();
        assert_eq!(pov.storage_len(), 16);
        assert_eq!(pov.get(0, 0).count(), 3);
    }
}
