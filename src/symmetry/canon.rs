// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of solved grids.
//!
//! [`canonicalize`] returns a [`Transformation`] taking a solved grid to the
//! representative of its class under relabelling, line and chute
//! permutation, and transposition. Grids in the same class get the same
//! representative.
//!
//! # Algorithm
//!
//! 1. **Relation counts.** `rel_count[a][b]` is the number of atoms (the O
//!    cells a block shares with one row or one column) holding both `a` and
//!    `b`. It depends only on the labelling.
//! 2. **Keys.** Each label is keyed by the joint log-probability of its
//!    relation counts under [`RelCountLaw`], then by the continuous law
//!    applied to the squared relation matrix. A line is keyed by the
//!    log-probability of the label pairs inside its atoms and by the sorted
//!    label classes of each atom. A chute is keyed by its sorted line keys,
//!    an axis by its sorted chute keys. The axis with the smaller key becomes
//!    the output rows; equal axis keys search both orientations.
//! 3. **Refinement.** Rows, columns, labels, bands and stacks form one
//!    ordered partition ([`TieLinks`]), first split by kind and key. Each
//!    round sorts the members of a tied block by the colours of what they
//!    meet in the grid (a row by the `(column, label)` pairs along it, a
//!    label by the `(row, column)` pairs where it sits, a band by its rows)
//!    until no block splits.
//! 4. **Search.** While a block is tied, one member is individualized and
//!    the partition refined again, depth first. A discrete partition orders
//!    every line and label, so it is a leaf with a certificate: the grid
//!    read in that order. The smallest certificate wins. A branch whose
//!    block structure already exceeds the best path is cut. Two leaves with
//!    equal certificates give an automorphism, which prunes siblings in the
//!    same orbit, so symmetric grids do not multiply the work.
//!
//! Memory grows with the search depth only. Every key is a function of
//! integer multisets folded in sorted order, so scores are bit-identical
//! across members of a class.
//!
//! ```
//! use ordoku::geometry::Grid;
//! use ordoku::symmetry::{canonicalize, Transformation};
//!
//! let grid: Grid<2> = "0123 2301 1032 3210".parse().unwrap();
//! let mut moved = grid.clone();
//! let mut t = Transformation::<2>::identity();
//! t.label_map = vec![2, 0, 3, 1];
//! t.row_map = vec![3, 2, 0, 1];
//! t.apply_in_place(&mut moved);
//!
//! let canon = canonicalize(&grid).apply(&grid);
//! assert_eq!(canonicalize(&moved).apply(&moved), canon);
//! ```

use super::probability::{sequential_sum, RelCountLaw, Score};
use super::ties::TieLinks;
use super::transform::Transformation;
use crate::geometry::order::with_compiled_order;
use crate::geometry::{Grid, Order};
use itertools::Itertools;
use std::cmp::Ordering;
use std::iter;
use std::ops::Range;
use tracing::{instrument, trace};

/// Find the transformation taking `grid` to its canonical form.
///
/// Contract: `grid` is a solution (checked in debug builds).
#[instrument(skip_all, fields(order = O))]
pub fn canonicalize<const O: usize>(grid: &Grid<O>) -> Transformation<O> {
    debug_assert!(grid.is_solution(), "canonicalize needs a solved grid");
    let upright = Canonicalizer::<O>::new(grid);
    let transposed = Canonicalizer::<O>::new(&grid.transposed());
    let orientations = match upright.axis_key().cmp(&transposed.axis_key()) {
        Ordering::Less => vec![(false, &upright)],
        Ordering::Greater => vec![(true, &transposed)],
        Ordering::Equal => vec![(false, &upright), (true, &transposed)],
    };

    let mut search = Search::new();
    for (transpose, oriented) in orientations {
        search.automorphisms.clear();
        oriented.search_from_root(transpose, &mut search);
    }
    trace!(
        nodes = search.nodes,
        leaves = search.leaves,
        automorphisms = search.found_automorphisms,
        "canonical search"
    );
    search.best.map(|leaf| leaf.transform).unwrap_or_default()
}

/// Replace `grid` by its canonical form, returning the transformation used.
pub fn canonicalize_in_place<const O: usize>(grid: &mut Grid<O>) -> Transformation<O> {
    let transform = canonicalize(grid);
    transform.apply_in_place(grid);
    transform
}

/// Canonicalize a solved grid held in caller-owned storage.
///
/// `buffer` holds `order⁴` symbols in row-major order.
///
/// # Panics
///
/// Panics if `order` is not compiled in, or `buffer` has the wrong length.
pub fn canonicalize_buffer<T>(order: usize, buffer: &mut [T])
where
    T: Copy + TryInto<u8> + From<u8>,
{
    with_compiled_order!(order, O => canonicalize_buffer_of::<O, T>(buffer))
}

fn canonicalize_buffer_of<const O: usize, T>(buffer: &mut [T])
where
    T: Copy + TryInto<u8> + From<u8>,
{
    assert_eq!(
        buffer.len(),
        Order::<O>::O4,
        "buffer length does not match order {}",
        O
    );
    let cells = buffer
        .iter()
        .map(|&value| TryInto::<u8>::try_into(value).ok())
        .collect();
    let mut grid = Grid::<O>::from_cells(cells);
    canonicalize_in_place(&mut grid);
    for (slot, value) in buffer.iter_mut().zip(grid.cells()) {
        if let Some(sym) = value {
            *slot = T::from(*sym);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Rows,
    Cols,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct LineKey {
    score: Score,
    /// Sorted label classes of each atom, atoms sorted.
    atoms: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ChuteKey {
    score: Score,
    lines: Vec<LineKey>,
}

/// A vertex of the partition, decoded from its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertex {
    Row(usize),
    Col(usize),
    Label(usize),
    Band(usize),
    Stack(usize),
}

/// Initial colour of a vertex. Kinds sort in declaration order, which keeps
/// each kind in its own range of positions.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum VertexKey<'a> {
    Row(&'a LineKey),
    Col(&'a LineKey),
    Label(&'a (Score, Score)),
    Band(&'a ChuteKey),
    Stack(&'a ChuteKey),
}

/// An ordered partition of the vertices.
#[derive(Debug, Clone)]
struct Partition {
    /// Vertices in block order.
    order: Vec<u8>,
    ties: TieLinks,
}

impl Partition {
    /// Block ends, which every isomorphic node shares.
    fn invariant(&self) -> Vec<u8> {
        self.ties.iter().map(|block| block.end as u8).collect()
    }

    /// Move the vertex at `pos` to the front of `cell` and split it off.
    fn individualized(&self, pos: usize, cell: &Range<usize>) -> Self {
        debug_assert!(cell.contains(&pos));
        let mut child = self.clone();
        let start = cell.start;
        child.order.swap(start, pos);
        child.ties.update(|a, _| a != start);
        child
    }
}

struct Leaf<const O: usize> {
    trace: Vec<Vec<u8>>,
    certificate: Vec<u8>,
    path: Vec<u8>,
    order: Vec<u8>,
    transpose: bool,
    transform: Transformation<O>,
}

/// State shared by the whole search.
struct Search<const O: usize> {
    best: Option<Leaf<O>>,
    /// Vertex permutations of the current orientation that fix its grid.
    automorphisms: Vec<Vec<u8>>,
    nodes: usize,
    leaves: usize,
    found_automorphisms: usize,
}

impl<const O: usize> Search<O> {
    fn new() -> Self {
        Self {
            best: None,
            automorphisms: Vec::new(),
            nodes: 0,
            leaves: 0,
            found_automorphisms: 0,
        }
    }
}

struct Canonicalizer<const O: usize> {
    cells: Vec<u8>,
    /// `label_col[row * O² + label]` is the column of `label` in `row`.
    label_col: Vec<u8>,
    rel_count: Vec<u8>,
    law: RelCountLaw,
    label_keys: Vec<(Score, Score)>,
    row_keys: Vec<LineKey>,
    col_keys: Vec<LineKey>,
    band_keys: Vec<ChuteKey>,
    stack_keys: Vec<ChuteKey>,
}

impl<const O: usize> Canonicalizer<O> {
    const O2: usize = Order::<O>::O2;
    // Vertex index ranges: rows, then columns, labels, bands, stacks.
    const COLS: usize = Self::O2;
    const LABELS: usize = 2 * Self::O2;
    const BANDS: usize = 3 * Self::O2;
    const STACKS: usize = 3 * Self::O2 + O;
    const VERTICES: usize = 3 * Self::O2 + 2 * O;

    fn new(grid: &Grid<O>) -> Self {
        let o2 = Self::O2;
        let cells: Vec<u8> = grid.cells().iter().map(|c| c.unwrap_or(0)).collect();
        let mut label_col = vec![0; o2 * o2];
        for (cell, &label) in cells.iter().enumerate() {
            label_col[(cell / o2) * o2 + label as usize] = (cell % o2) as u8;
        }
        let mut canon = Self {
            cells,
            label_col,
            rel_count: vec![0; o2 * o2],
            law: RelCountLaw::new(O),
            label_keys: Vec::new(),
            row_keys: Vec::new(),
            col_keys: Vec::new(),
            band_keys: Vec::new(),
            stack_keys: Vec::new(),
        };
        for line in 0..o2 {
            for atom in (0..o2).step_by(O) {
                for i in 0..O {
                    for j in i + 1..O {
                        let (a, b) = (canon.at(line, atom + i), canon.at(line, atom + j));
                        canon.count_pair(a, b);
                        let (a, b) = (canon.at(atom + i, line), canon.at(atom + j, line));
                        canon.count_pair(a, b);
                    }
                }
            }
        }

        canon.label_keys = (0..o2 as u8).map(|a| canon.label_key(a)).collect();
        let class_of = canon.label_classes();
        canon.row_keys = (0..o2)
            .map(|line| canon.line_key(Axis::Rows, line, &class_of))
            .collect();
        canon.col_keys = (0..o2)
            .map(|line| canon.line_key(Axis::Cols, line, &class_of))
            .collect();
        canon.band_keys = (0..O).map(|band| chute_key::<O>(&canon.row_keys, band)).collect();
        canon.stack_keys = (0..O).map(|stack| chute_key::<O>(&canon.col_keys, stack)).collect();
        canon
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * Self::O2 + col]
    }

    #[inline]
    fn rel(&self, a: u8, b: u8) -> u8 {
        self.rel_count[a as usize * Self::O2 + b as usize]
    }

    fn count_pair(&mut self, a: u8, b: u8) {
        self.rel_count[a as usize * Self::O2 + b as usize] += 1;
        self.rel_count[b as usize * Self::O2 + a as usize] += 1;
    }

    /// Band keys in ascending order.
    fn axis_key(&self) -> Vec<&ChuteKey> {
        self.band_keys.iter().sorted().collect()
    }

    fn label_key(&self, a: u8) -> (Score, Score) {
        let o2 = Self::O2;
        let normalizer = (o2 * 2 * (O - 1)) as f64;
        let mut counts: Vec<u8> = (0..o2 as u8)
            .filter(|&b| b != a)
            .map(|b| self.rel(a, b))
            .collect();
        counts.sort_unstable();
        let discrete = sequential_sum(counts.iter().map(|&k| self.law.discrete(k as usize)));

        let mut step2: Vec<u32> = (0..o2 as u8)
            .filter(|&b| b != a)
            .map(|b| {
                (0..o2 as u8)
                    .map(|k| self.rel(a, k) as u32 * self.rel(b, k) as u32)
                    .sum()
            })
            .collect();
        step2.sort_unstable();
        let continuous = sequential_sum(
            step2
                .iter()
                .map(|&s| self.law.continuous(s as f64 / normalizer)),
        );
        (discrete, continuous)
    }

    /// For each label, the first position of its key class.
    fn label_classes(&self) -> Vec<u8> {
        let mut order: Vec<u8> = (0..Self::O2 as u8).collect();
        let mut ties = TieLinks::new(Self::O2);
        ties.refine_by(&mut order, |&a, &b| {
            self.label_keys[a as usize].cmp(&self.label_keys[b as usize])
        });
        class_starts(&order, &ties)
    }

    /// Label at position `pos` of a row or column.
    #[inline]
    fn line_label(&self, axis: Axis, line: usize, pos: usize) -> u8 {
        match axis {
            Axis::Rows => self.at(line, pos),
            Axis::Cols => self.at(pos, line),
        }
    }

    fn line_key(&self, axis: Axis, line: usize, class_of: &[u8]) -> LineKey {
        let labels: Vec<u8> = (0..Self::O2)
            .map(|pos| self.line_label(axis, line, pos))
            .collect();
        let mut pair_counts = Vec::new();
        let mut atoms = Vec::with_capacity(O);
        for atom in labels.chunks(O) {
            for (i, &a) in atom.iter().enumerate() {
                for &b in &atom[i + 1..] {
                    pair_counts.push(self.rel(a, b));
                }
            }
            let mut classes: Vec<u8> = atom.iter().map(|&l| class_of[l as usize]).collect();
            classes.sort_unstable();
            atoms.push(classes);
        }
        pair_counts.sort_unstable();
        atoms.sort_unstable();
        LineKey {
            score: sequential_sum(pair_counts.iter().map(|&k| self.law.discrete(k as usize))),
            atoms,
        }
    }

    fn vertex(v: usize) -> Vertex {
        if v < Self::COLS {
            Vertex::Row(v)
        } else if v < Self::LABELS {
            Vertex::Col(v - Self::COLS)
        } else if v < Self::BANDS {
            Vertex::Label(v - Self::LABELS)
        } else if v < Self::STACKS {
            Vertex::Band(v - Self::BANDS)
        } else {
            Vertex::Stack(v - Self::STACKS)
        }
    }

    fn vertex_key(&self, v: usize) -> VertexKey<'_> {
        match Self::vertex(v) {
            Vertex::Row(row) => VertexKey::Row(&self.row_keys[row]),
            Vertex::Col(col) => VertexKey::Col(&self.col_keys[col]),
            Vertex::Label(label) => VertexKey::Label(&self.label_keys[label]),
            Vertex::Band(band) => VertexKey::Band(&self.band_keys[band]),
            Vertex::Stack(stack) => VertexKey::Stack(&self.stack_keys[stack]),
        }
    }

    /// What `v` meets in the grid, in terms of the current colours.
    fn signature(&self, v: usize, color: &[u8]) -> Vec<(u8, u8)> {
        let o2 = Self::O2;
        let label_color = |label: u8| color[Self::LABELS + label as usize];
        match Self::vertex(v) {
            Vertex::Row(row) => iter::once((color[Self::BANDS + row / O], 0))
                .chain(
                    (0..o2)
                        .map(|col| (color[Self::COLS + col], label_color(self.at(row, col))))
                        .sorted(),
                )
                .collect(),
            Vertex::Col(col) => iter::once((color[Self::STACKS + col / O], 0))
                .chain(
                    (0..o2)
                        .map(|row| (color[row], label_color(self.at(row, col))))
                        .sorted(),
                )
                .collect(),
            Vertex::Label(label) => (0..o2)
                .map(|row| {
                    let col = self.label_col[row * o2 + label] as usize;
                    (color[row], color[Self::COLS + col])
                })
                .sorted()
                .collect(),
            Vertex::Band(band) => (band * O..(band + 1) * O)
                .map(|row| (color[row], 0))
                .sorted()
                .collect(),
            Vertex::Stack(stack) => (stack * O..(stack + 1) * O)
                .map(|col| (color[Self::COLS + col], 0))
                .sorted()
                .collect(),
        }
    }

    /// Split tied blocks by signature until nothing changes.
    fn refine(&self, part: &mut Partition) {
        while part.ties.has_unresolved() {
            let color = class_starts(&part.order, &part.ties);
            let mut signatures = vec![Vec::new(); Self::VERTICES];
            for block in part.ties.iter().filter(|block| block.len() > 1) {
                for &v in &part.order[block] {
                    signatures[v as usize] = self.signature(v as usize, &color);
                }
            }
            let blocks = part.ties.num_blocks();
            part.ties.refine_by(&mut part.order, |&a, &b| {
                signatures[a as usize].cmp(&signatures[b as usize])
            });
            if part.ties.num_blocks() == blocks {
                break;
            }
        }
    }

    fn root(&self) -> Partition {
        let keys: Vec<VertexKey<'_>> = (0..Self::VERTICES).map(|v| self.vertex_key(v)).collect();
        let mut part = Partition {
            order: (0..Self::VERTICES as u8).collect(),
            ties: TieLinks::new(Self::VERTICES),
        };
        part.ties
            .refine_by(&mut part.order, |&a, &b| keys[a as usize].cmp(&keys[b as usize]));
        self.refine(&mut part);
        part
    }

    /// The tied block to branch on: the first one among rows, columns and
    /// labels, taking the kind with the fewest singletons first.
    fn target_cell(&self, part: &Partition) -> Option<Range<usize>> {
        let kinds = [0..Self::COLS, Self::COLS..Self::LABELS, Self::LABELS..Self::BANDS];
        kinds
            .iter()
            .filter_map(|kind| {
                let open = part
                    .ties
                    .iter()
                    .find(|block| block.len() > 1 && kind.contains(&block.start))?;
                let singletons = part
                    .ties
                    .iter()
                    .filter(|block| block.len() == 1 && kind.contains(&block.start))
                    .count();
                Some((singletons, open))
            })
            .min_by_key(|(singletons, open)| (*singletons, open.start))
            .map(|(_, open)| open)
            .or_else(|| part.ties.iter().find(|block| block.len() > 1))
    }

    fn search_from_root(&self, transpose: bool, search: &mut Search<O>) {
        let mut path = Vec::new();
        let mut trace = Vec::new();
        self.search(self.root(), &mut path, &mut trace, search, transpose);
    }

    /// Search below `part`. Returns the depth to unwind to when an
    /// automorphism shows the rest of this subtree repeats an explored one.
    fn search(
        &self,
        part: Partition,
        path: &mut Vec<u8>,
        trace: &mut Vec<Vec<u8>>,
        search: &mut Search<O>,
        transpose: bool,
    ) -> Option<usize> {
        search.nodes += 1;
        trace.push(part.invariant());
        let unwind = self.explore(&part, path, trace, search, transpose);
        trace.pop();
        unwind
    }

    fn explore(
        &self,
        part: &Partition,
        path: &mut Vec<u8>,
        trace: &mut Vec<Vec<u8>>,
        search: &mut Search<O>,
        transpose: bool,
    ) -> Option<usize> {
        if let Some(best) = &search.best {
            if compare_prefix(trace, &best.trace) == Ordering::Greater {
                return None;
            }
        }
        let Some(cell) = self.target_cell(part) else {
            return self.visit_leaf(part, path, trace, search, transpose);
        };

        let depth = path.len();
        let mut explored = Vec::new();
        for pos in cell.clone() {
            let v = part.order[pos];
            if in_orbit(v, &explored, path, &search.automorphisms) {
                continue;
            }
            explored.push(v);
            let mut child = part.individualized(pos, &cell);
            self.refine(&mut child);
            path.push(v);
            let unwind = self.search(child, path, trace, search, transpose);
            path.pop();
            if let Some(target) = unwind {
                if target < depth {
                    return Some(target);
                }
            }
        }
        None
    }

    fn visit_leaf(
        &self,
        part: &Partition,
        path: &[u8],
        trace: &[Vec<u8>],
        search: &mut Search<O>,
        transpose: bool,
    ) -> Option<usize> {
        search.leaves += 1;
        let certificate = self.certificate(&part.order);
        let relation = match &search.best {
            None => Ordering::Less,
            Some(best) => trace
                .cmp(best.trace.as_slice())
                .then_with(|| certificate.cmp(&best.certificate)),
        };
        match relation {
            Ordering::Less => {
                search.best = Some(Leaf {
                    trace: trace.to_vec(),
                    certificate,
                    path: path.to_vec(),
                    order: part.order.clone(),
                    transpose,
                    transform: self.transform(&part.order, transpose),
                });
                None
            }
            Ordering::Equal => {
                let best = search.best.as_ref()?;
                if best.transpose != transpose {
                    return None;
                }
                let mut automorphism = vec![0; Self::VERTICES];
                for (&from, &to) in part.order.iter().zip(&best.order) {
                    automorphism[from as usize] = to;
                }
                let shared = path
                    .iter()
                    .zip(&best.path)
                    .take_while(|(a, b)| a == b)
                    .count();
                search.automorphisms.push(automorphism);
                search.found_automorphisms += 1;
                (shared < path.len()).then_some(shared)
            }
            Ordering::Greater => None,
        }
    }

    /// The grid as read through a discrete partition: band of each row,
    /// stack of each column, then every cell, all as positions.
    fn certificate(&self, order: &[u8]) -> Vec<u8> {
        let pos = positions(order);
        let rows = &order[..Self::COLS];
        let cols = &order[Self::COLS..Self::LABELS];
        let mut certificate = Vec::with_capacity(Order::<O>::O4 + 2 * Self::O2);
        certificate.extend(rows.iter().map(|&row| pos[Self::BANDS + row as usize / O]));
        certificate.extend(
            cols.iter()
                .map(|&col| pos[Self::STACKS + (col as usize - Self::COLS) / O]),
        );
        certificate.extend(rows.iter().cartesian_product(cols).map(|(&row, &col)| {
            let label = self.at(row as usize, col as usize - Self::COLS);
            pos[Self::LABELS + label as usize]
        }));
        certificate
    }

    /// Chutes in partition order, lines within each chute likewise.
    fn transform(&self, order: &[u8], transpose: bool) -> Transformation<O> {
        let pos = positions(order);
        let lines = |chutes: &[u8], first_chute: usize, first_line: usize| -> Vec<u8> {
            chutes
                .iter()
                .flat_map(|&chute| {
                    let chute = chute as usize - first_chute;
                    (chute * O..(chute + 1) * O).sorted_by_key(|&line| pos[first_line + line])
                })
                .map(|line| line as u8)
                .collect()
        };
        let row_map = lines(&order[Self::BANDS..Self::STACKS], Self::BANDS, 0);
        let col_map = lines(&order[Self::STACKS..], Self::STACKS, Self::COLS);
        let label_map = (0..Self::O2)
            .map(|label| pos[Self::LABELS + label] - Self::LABELS as u8)
            .collect();
        if transpose {
            Transformation {
                label_map,
                row_map: col_map,
                col_map: row_map,
                transpose,
            }
        } else {
            Transformation {
                label_map,
                row_map,
                col_map,
                transpose,
            }
        }
    }
}

/// Key a chute by its sorted line keys.
fn chute_key<const O: usize>(line_keys: &[LineKey], chute: usize) -> ChuteKey {
    let lines: Vec<LineKey> = line_keys[chute * O..(chute + 1) * O]
        .iter()
        .sorted()
        .cloned()
        .collect();
    ChuteKey {
        score: sequential_sum(lines.iter().map(|key| key.score.0)),
        lines,
    }
}

/// For each element of `order`, the start of its tie block.
fn class_starts(order: &[u8], ties: &TieLinks) -> Vec<u8> {
    let mut class_of = vec![0; order.len()];
    for block in ties.iter() {
        for &label in &order[block.clone()] {
            class_of[label as usize] = block.start as u8;
        }
    }
    class_of
}

/// Inverse of `order`.
fn positions(order: &[u8]) -> Vec<u8> {
    let mut pos = vec![0; order.len()];
    for (at, &v) in order.iter().enumerate() {
        pos[v as usize] = at as u8;
    }
    pos
}

fn compare_prefix(trace: &[Vec<u8>], best: &[Vec<u8>]) -> Ordering {
    trace
        .iter()
        .zip(best)
        .map(|(mine, theirs)| mine.cmp(theirs))
        .find(|relation| relation.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Whether `v` lies in the orbit of `explored` under the automorphisms
/// that fix every vertex of `path`.
fn in_orbit(v: u8, explored: &[u8], path: &[u8], automorphisms: &[Vec<u8>]) -> bool {
    let generators: Vec<&Vec<u8>> = automorphisms
        .iter()
        .filter(|gamma| path.iter().all(|&p| gamma[p as usize] == p))
        .collect();
    if explored.is_empty() || generators.is_empty() {
        return false;
    }
    let mut seen = vec![false; generators[0].len()];
    let mut orbit = explored.to_vec();
    for &u in explored {
        seen[u as usize] = true;
    }
    let mut next = 0;
    while next < orbit.len() {
        let u = orbit[next] as usize;
        next += 1;
        for gamma in &generators {
            let w = gamma[u];
            if !seen[w as usize] {
                seen[w as usize] = true;
                orbit.push(w);
            }
        }
    }
    seen[v as usize]
}
