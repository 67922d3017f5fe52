// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! TieLinks: an ordered partition into runs of tied elements.
//!
//! The domain `0..size` is split into maximal contiguous blocks. The entry
//! at a block's start holds the block's end; every other entry is 0. A fresh
//! partition is one block covering the domain.
//!
//! Refinement only ever splits blocks. Callers alternate between sorting the
//! elements of each block by some discriminator and calling
//! [`TieLinks::update`] with an equality test on that discriminator.
//!
//! ```
//! use ordoku::symmetry::TieLinks;
//!
//! let keys = [1, 1, 2, 3, 3, 3];
//! let mut ties = TieLinks::new(keys.len());
//! ties.update(|a, b| keys[a] == keys[b]);
//! assert_eq!(ties.iter().collect::<Vec<_>>(), vec![0..2, 2..3, 3..6]);
//! assert!(ties.has_unresolved());
//! ```

use std::cmp::Ordering;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TieLinks {
    links: Vec<u8>,
}

impl TieLinks {
    /// Largest domain; links must fit in a `u8`.
    pub const MAX_SIZE: usize = u8::MAX as usize;

    /// One block holding every element of `0..size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or above [`TieLinks::MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= Self::MAX_SIZE,
            "TieLinks size {} out of range",
            size
        );
        let mut links = vec![0; size];
        links[0] = size as u8;
        Self { links }
    }

    /// Size of the domain.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Blocks as half-open ranges, in ascending order.
    pub fn iter(&self) -> TieIter<'_> {
        TieIter {
            links: &self.links,
            at: 0,
        }
    }

    /// Some block still holds more than one element.
    pub fn has_unresolved(&self) -> bool {
        self.links.iter().any(|&link| link == 0)
    }

    /// Number of blocks.
    pub fn num_blocks(&self) -> usize {
        self.iter().count()
    }

    /// Split every block between neighbours `i - 1` and `i` for which
    /// `is_equal(i - 1, i)` is false.
    pub fn update(&mut self, mut is_equal: impl FnMut(usize, usize) -> bool) {
        let blocks: Vec<_> = self.iter().collect();
        for block in blocks {
            let mut cursor = block.start;
            for i in block.start + 1..block.end {
                if !is_equal(i - 1, i) {
                    self.links[cursor] = i as u8;
                    cursor = i;
                }
            }
            self.links[cursor] = block.end as u8;
        }
    }

    /// Sort `items` within each block by `compare`, then split blocks
    /// between neighbours that compare unequal.
    ///
    /// `items` is indexed by domain position.
    pub fn refine_by<T>(&mut self, items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
        debug_assert_eq!(items.len(), self.len());
        for block in self.iter() {
            items[block].sort_by(&mut compare);
        }
        self.update(|a, b| compare(&items[a], &items[b]) == Ordering::Equal);
    }
}

/// Iterator over the blocks of a [`TieLinks`].
pub struct TieIter<'a> {
    links: &'a [u8],
    at: usize,
}

impl Iterator for TieIter<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at >= self.links.len() {
            return None;
        }
        let start = self.at;
        self.at = self.links[start] as usize;
        Some(start..self.at)
    }
}

impl<'a> IntoIterator for &'a TieLinks {
    type Item = Range<usize>;
    type IntoIter = TieIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
