// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! O2Bits: fixed-width candidate sets.
//!
//! An `O2Bits<O>` is a set over `0..O²`, stored as one `u64` word with bit i
//! representing member i. It serves both candidate views: the symbols still
//! possible for a cell, and the positions still possible for a symbol in a
//! house.
//!
//! # Examples
//!
//! ```
//! use ordoku::geometry::O2Bits;
//!
//! let mut set = O2Bits::<2>::empty();
//! set.insert(0);
//! set.insert(3);
//!
//! assert_eq!(set.count(), 2);
//! assert_eq!(set.first(), Some(0));
//! assert_eq!(format!("{}", set), "{0,3}");
//! assert_eq!((!set).iter().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use crate::geometry::order::Order;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set over `0..O²` held in one word.
///
/// All operations are O(1) word operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct O2Bits<const O: usize>(u64);

impl<const O: usize> O2Bits<O> {
    const MASK: u64 = if Order::<O>::O2 >= 64 {
        u64::MAX
    } else {
        (1u64 << Order::<O>::O2) - 1
    };

    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set of every member `0..O²`.
    pub const fn full() -> Self {
        Self(Self::MASK)
    }

    /// The set holding only `i`.
    #[inline]
    pub const fn single(i: u8) -> Self {
        Self(1 << i)
    }

    /// Create a set from a raw word. Bits at or above O² are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & Self::MASK)
    }

    /// The underlying word.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, i: u8) -> bool {
        (self.0 >> i) & 1 != 0
    }

    #[inline]
    pub fn insert(&mut self, i: u8) {
        self.0 |= 1 << i;
    }

    /// Remove `i`. Returns whether it was present.
    #[inline]
    pub fn remove(&mut self, i: u8) -> bool {
        let present = self.contains(i);
        self.0 &= !(1 << i);
        present
    }

    /// Population count.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Smallest member, if any.
    #[inline]
    pub const fn first(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }

    /// The only member of a singleton set.
    ///
    /// Contract: the set has exactly one member (checked in debug builds).
    #[inline]
    pub fn only(self) -> u8 {
        debug_assert_eq!(self.count(), 1, "O2Bits::only on {:?}", self);
        self.0.trailing_zeros() as u8
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        O2BitsIter { bits: self.0 }
    }
}

/// Iterator over members of an O2Bits, lowest first.
struct O2BitsIter {
    bits: u64,
}

impl Iterator for O2BitsIter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let i = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(i as u8)
    }
}

impl<const O: usize> BitAnd for O2Bits<O> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<const O: usize> BitAndAssign for O2Bits<O> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl<const O: usize> BitOr for O2Bits<O> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<const O: usize> BitOrAssign for O2Bits<O> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Complement within `0..O²`.
impl<const O: usize> Not for O2Bits<O> {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::MASK)
    }
}

impl<const O: usize> FromIterator<u8> for O2Bits<O> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for i in iter {
            set.insert(i);
        }
        set
    }
}

impl<const O: usize> fmt::Display for O2Bits<O> {
    /// Format as "{0,3,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, i) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", i)?;
        }
        write!(f, "}}")
    }
}

impl<const O: usize> fmt::Debug for O2Bits<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O2Bits{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = O2Bits::<3>::empty();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.first(), None);
    }

    #[test]
    fn test_full() {
        assert_eq!(O2Bits::<2>::full().count(), 4);
        assert_eq!(O2Bits::<3>::full().count(), 9);
        assert_eq!(O2Bits::<8>::full().count(), 64);
        assert_eq!(O2Bits::<8>::full().bits(), u64::MAX);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = O2Bits::<3>::empty();
        set.insert(4);
        set.insert(8);
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert_eq!(set.only(), 8);
    }

    #[test]
    fn test_complement_stays_in_range() {
        let set: O2Bits<2> = [1u8, 2].into_iter().collect();
        let comp = !set;
        assert_eq!(comp.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(!O2Bits::<8>::full(), O2Bits::<8>::empty());
    }

    #[test]
    fn test_union_intersection() {
        let a: O2Bits<3> = [0u8, 1, 2].into_iter().collect();
        let b: O2Bits<3> = [2u8, 3].into_iter().collect();
        assert_eq!((a | b).count(), 4);
        assert_eq!((a & b).only(), 2);
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        let set = O2Bits::<2>::from_bits(0xff);
        assert_eq!(set, O2Bits::<2>::full());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", O2Bits::<3>::empty()), "{}");
        let set: O2Bits<3> = [0u8, 8].into_iter().collect();
        assert_eq!(format!("{}", set), "{0,8}");
        assert_eq!(format!("{:?}", set), "O2Bits{0,8}");
    }
}
