// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Group laws of Transformation, checked on random group elements.

mod common;

use common::WIKI_SOLUTION;
use ordoku::{FastSolver, Grid, Transformation};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_transform<const O: usize>(seed: u64) -> Transformation<O> {
    Transformation::random(&mut StdRng::seed_from_u64(seed))
}

fn wiki() -> Grid<3> {
    WIKI_SOLUTION.parse().unwrap()
}

#[test]
fn test_identity_on_all_order_2_grids() {
    let identity = Transformation::<2>::identity();
    for grid in FastSolver::new(&Grid::<2>::new()) {
        assert_eq!(identity.apply(&grid), grid);
    }
}

proptest! {
    #[test]
    fn prop_inverse_undoes(seed in any::<u64>()) {
        let t = random_transform::<3>(seed);
        let grid = wiki();
        let moved = t.apply(&grid);
        prop_assert!(moved.is_solution());
        prop_assert_eq!(t.inverted().apply(&moved), grid);
    }

    #[test]
    fn prop_inverse_is_involution(seed in any::<u64>()) {
        let t = random_transform::<4>(seed);
        prop_assert!(t.is_valid());
        prop_assert_eq!(t.inverted().inverted(), t);
    }

    #[test]
    fn prop_composition_is_sequential_application(a in any::<u64>(), b in any::<u64>()) {
        let (ta, tb) = (random_transform::<3>(a), random_transform::<3>(b));
        let grid = wiki();
        prop_assert_eq!(ta.then(&tb).apply(&grid), tb.apply(&ta.apply(&grid)));
        prop_assert!(ta.then(&tb).is_valid());
    }

    #[test]
    fn prop_composition_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let (ta, tb, tc) = (
            random_transform::<2>(a),
            random_transform::<2>(b),
            random_transform::<2>(c),
        );
        prop_assert_eq!(ta.then(&tb).then(&tc), ta.then(&tb.then(&tc)));
    }

    #[test]
    fn prop_puzzles_keep_their_givens(seed in any::<u64>(), mask in any::<u16>()) {
        let solution: Grid<2> = "0123 2301 1032 3210".parse().unwrap();
        let puzzle = common::partial_of(&solution, mask);
        let t = random_transform::<2>(seed);
        let moved = t.apply(&puzzle);
        prop_assert_eq!(moved.num_filled(), puzzle.num_filled());
        prop_assert!(t.apply(&solution).agrees_with(&moved));
    }
}
