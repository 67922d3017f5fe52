// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transformations: the validity-preserving symmetries of a grid.
//!
//! A [`Transformation`] combines
//! - a relabelling of the O² symbols (`label_map[old] = new`),
//! - a permutation of rows and one of columns, each moving whole lines within
//!   and between chutes so that blocks stay blocks
//!   (destination row `r` reads source row `row_map[r]`),
//! - an optional transpose, applied last.
//!
//! Written out, for output cell `(r, c)`:
//!
//! - no transpose: `out[r][c] = label_map[src[row_map[r]][col_map[c]]]`
//! - transpose:    `out[r][c] = label_map[src[row_map[c]][col_map[r]]]`
//!
//! ```
//! use ordoku::geometry::Grid;
//! use ordoku::symmetry::Transformation;
//!
//! let grid: Grid<2> = "0123 2301 1032 3210".parse().unwrap();
//! let mut t = Transformation::<2>::identity();
//! t.label_map = vec![3, 2, 1, 0];
//! t.transpose = true;
//!
//! let moved = t.apply(&grid);
//! assert!(moved.is_solution());
//! assert_eq!(t.inverted().apply(&moved), grid);
//! ```

use crate::geometry::house::{cell_at_rc, chute_of_line};
use crate::geometry::{Grid, O2Bits, Order};
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A member of the grid symmetry group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transformation<const O: usize> {
    pub label_map: Vec<u8>,
    pub row_map: Vec<u8>,
    pub col_map: Vec<u8>,
    pub transpose: bool,
}

fn identity_map<const O: usize>() -> Vec<u8> {
    (0..Order::<O>::O2 as u8).collect()
}

fn invert_map(map: &[u8]) -> Vec<u8> {
    let mut inverse = vec![0; map.len()];
    for (i, &m) in map.iter().enumerate() {
        inverse[m as usize] = i as u8;
    }
    inverse
}

/// `map` is a permutation of `0..O²`.
fn is_permutation<const O: usize>(map: &[u8]) -> bool {
    map.len() == Order::<O>::O2
        && map.iter().all(|&m| (m as usize) < Order::<O>::O2)
        && map.iter().copied().collect::<O2Bits<O>>() == O2Bits::full()
}

/// `map` is a permutation that keeps lines of one chute together.
fn is_chute_preserving<const O: usize>(map: &[u8]) -> bool {
    is_permutation::<O>(map)
        && map.chunks(O).all(|chute| {
            let source = chute_of_line::<O>(chute[0] as usize);
            chute
                .iter()
                .all(|&line| chute_of_line::<O>(line as usize) == source)
        })
}

impl<const O: usize> Transformation<O> {
    /// The neutral element.
    pub fn identity() -> Self {
        let () = Order::<O>::SUPPORTED;
        Self {
            label_map: identity_map::<O>(),
            row_map: identity_map::<O>(),
            col_map: identity_map::<O>(),
            transpose: false,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Whether this is a well-formed group element.
    pub fn is_valid(&self) -> bool {
        is_permutation::<O>(&self.label_map)
            && is_chute_preserving::<O>(&self.row_map)
            && is_chute_preserving::<O>(&self.col_map)
    }

    /// Write the transformed `src` into `dest`.
    ///
    /// Unsolved cells stay unsolved.
    pub fn apply_from_to(&self, src: &Grid<O>, dest: &mut Grid<O>) {
        debug_assert!(self.is_valid());
        for row in 0..Order::<O>::O2 {
            for col in 0..Order::<O>::O2 {
                let (src_row, src_col) = if self.transpose {
                    (self.row_map[col], self.col_map[row])
                } else {
                    (self.row_map[row], self.col_map[col])
                };
                let cell = cell_at_rc::<O>(row, col);
                match src.at(src_row as usize, src_col as usize) {
                    Some(sym) => dest.set(cell, self.label_map[sym as usize]),
                    None => dest.clear(cell),
                }
            }
        }
    }

    /// Transform `grid` in place.
    pub fn apply_in_place(&self, grid: &mut Grid<O>) {
        let src = grid.clone();
        self.apply_from_to(&src, grid);
    }

    /// The transformed copy of `grid`.
    pub fn apply(&self, grid: &Grid<O>) -> Grid<O> {
        let mut dest = Grid::new();
        self.apply_from_to(grid, &mut dest);
        dest
    }

    /// The transformation that undoes this one.
    pub fn inverted(&self) -> Self {
        let (row_map, col_map) = if self.transpose {
            (invert_map(&self.col_map), invert_map(&self.row_map))
        } else {
            (invert_map(&self.row_map), invert_map(&self.col_map))
        };
        Self {
            label_map: invert_map(&self.label_map),
            row_map,
            col_map,
            transpose: self.transpose,
        }
    }

    /// The transformation applying `self` first and `next` second.
    pub fn then(&self, next: &Self) -> Self {
        let label_map = self
            .label_map
            .iter()
            .map(|&l| next.label_map[l as usize])
            .collect();
        let (row_map, col_map) = if self.transpose {
            (
                next.col_map.iter().map(|&i| self.row_map[i as usize]).collect(),
                next.row_map.iter().map(|&i| self.col_map[i as usize]).collect(),
            )
        } else {
            (
                next.row_map.iter().map(|&i| self.row_map[i as usize]).collect(),
                next.col_map.iter().map(|&i| self.col_map[i as usize]).collect(),
            )
        };
        Self {
            label_map,
            row_map,
            col_map,
            transpose: self.transpose != next.transpose,
        }
    }

    /// A uniformly random group element drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut label_map = identity_map::<O>();
        label_map.shuffle(rng);
        Self {
            label_map,
            row_map: random_line_map::<O, R>(rng),
            col_map: random_line_map::<O, R>(rng),
            transpose: rng.gen_bool(0.5),
        }
    }
}

fn random_line_map<const O: usize, R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
    let mut chutes: Vec<u8> = (0..O as u8).collect();
    chutes.shuffle(rng);
    let mut map = Vec::with_capacity(Order::<O>::O2);
    for chute in chutes {
        let mut lines: Vec<u8> = (0..O as u8).map(|i| chute * O as u8 + i).collect();
        lines.shuffle(rng);
        map.extend(lines);
    }
    map
}

impl<const O: usize> Default for Transformation<O> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GRID: &str = "0123 2301 1032 3210";

    #[test]
    fn test_identity() {
        let grid: Grid<2> = GRID.parse().unwrap();
        let identity = Transformation::<2>::identity();
        assert!(identity.is_identity());
        assert!(identity.is_valid());
        assert_eq!(identity.apply(&grid), grid);
        assert_eq!(Transformation::<2>::default(), identity);
    }

    #[test]
    fn test_row_swap_within_band() {
        let grid: Grid<2> = GRID.parse().unwrap();
        let mut t = Transformation::<2>::identity();
        t.row_map = vec![1, 0, 2, 3];
        assert_eq!(format!("{}", t.apply(&grid)), "2301\n0123\n1032\n3210");
    }

    #[test]
    fn test_transpose_only() {
        let grid: Grid<2> = GRID.parse().unwrap();
        let mut t = Transformation::<2>::identity();
        t.transpose = true;
        assert_eq!(t.apply(&grid), grid.transposed());
    }

    #[test]
    fn test_validity() {
        let mut t = Transformation::<2>::identity();
        t.row_map = vec![2, 3, 0, 1];
        assert!(t.is_valid());
        // Mixes rows of both bands into the first band.
        t.row_map = vec![0, 2, 1, 3];
        assert!(!t.is_valid());
        t.row_map = vec![0, 0, 2, 3];
        assert!(!t.is_valid());
        let mut t = Transformation::<2>::identity();
        t.label_map = vec![0, 1, 2, 4];
        assert!(!t.is_valid());
    }

    #[test]
    fn test_apply_in_place_matches_apply() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid: Grid<3> = crate::symmetry::tests::WIKI_SOLUTION.parse().unwrap();
        for _ in 0..10 {
            let t = Transformation::<3>::random(&mut rng);
            let mut in_place = grid.clone();
            t.apply_in_place(&mut in_place);
            assert_eq!(in_place, t.apply(&grid));
        }
    }

    #[test]
    fn test_random_is_valid_and_preserves_solutions() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid: Grid<3> = crate::symmetry::tests::WIKI_SOLUTION.parse().unwrap();
        for _ in 0..20 {
            let t = Transformation::<3>::random(&mut rng);
            assert!(t.is_valid());
            assert!(t.apply(&grid).is_solution());
        }
    }

    #[test]
    fn test_composition_and_inverse() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid: Grid<3> = crate::symmetry::tests::WIKI_SOLUTION.parse().unwrap();
        for _ in 0..20 {
            let a = Transformation::<3>::random(&mut rng);
            let b = Transformation::<3>::random(&mut rng);
            assert_eq!(a.then(&b).apply(&grid), b.apply(&a.apply(&grid)));
            assert!(a.then(&a.inverted()).is_identity());
            assert!(a.inverted().then(&a).is_identity());
        }
    }

    #[test]
    fn test_puzzle_cells_stay_unsolved() {
        let puzzle: Grid<2> = "0... .... .... ...3".parse().unwrap();
        let mut t = Transformation::<2>::identity();
        t.transpose = true;
        t.label_map = vec![1, 0, 3, 2];
        let moved = t.apply(&puzzle);
        assert_eq!(moved.num_filled(), 2);
        assert_eq!(moved.at(0, 0), Some(1));
        assert_eq!(moved.at(3, 3), Some(2));
    }
}
