// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ordoku::Grid;
use tracing_subscriber::EnvFilter;

/// Install a subscriber driven by `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A well-known order-3 puzzle, symbols shifted down to start at 0.
pub const WIKI_PUZZLE: &str = "42..6.... 5..084... .87....5. \
                               7...5...2 3..7.2..0 6...1...5 \
                               .5....17. ...308..4 ....7..68";

/// Its unique solution.
pub const WIKI_SOLUTION: &str = "423567801 561084237 087231456 \
                                 748650312 315742680 602813745 \
                                 850426173 176308524 234175068";

/// Every completion of an order-2 puzzle, by plain cell-by-cell search
/// without propagation. Results come out in lexicographic cell order.
pub fn brute_force_solutions(puzzle: &Grid<2>) -> Vec<Grid<2>> {
    let mut solutions = Vec::new();
    let mut grid = puzzle.clone();
    if grid.follows_rule() {
        fill_from(&mut grid, 0, &mut solutions);
    }
    solutions
}

fn fill_from(grid: &mut Grid<2>, cell: usize, solutions: &mut Vec<Grid<2>>) {
    if cell == 16 {
        solutions.push(grid.clone());
        return;
    }
    if grid.get(cell).is_some() {
        fill_from(grid, cell + 1, solutions);
        return;
    }
    for sym in 0..4 {
        grid.set(cell, sym);
        if grid.follows_rule() {
            fill_from(grid, cell + 1, solutions);
        }
    }
    grid.clear(cell);
}

/// Keep the cells of `solution` selected by the bits of `mask`.
pub fn partial_of(solution: &Grid<2>, mask: u16) -> Grid<2> {
    let mut puzzle = Grid::new();
    for cell in 0..16 {
        if mask & (1 << cell) != 0 {
            if let Some(sym) = solution.get(cell) {
                puzzle.set(cell, sym);
            }
        }
    }
    puzzle
}

/// The cyclic pattern grid: row `r` is `0..O²` shifted by
/// `O * (r % O) + r / O`. Its class has many automorphisms.
pub fn pattern_grid<const O: usize>() -> Grid<O> {
    let o2 = O * O;
    Grid::from_cells(
        (0..o2 * o2)
            .map(|cell| {
                let (r, c) = (cell / o2, cell % o2);
                Some(((O * (r % O) + r / O + c) % o2) as u8)
            })
            .collect(),
    )
}
