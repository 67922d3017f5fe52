// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid symmetries and canonical labelling.
//!
//! ## Module Structure
//!
//! - `transform`: the symmetry group acting on grids
//! - `ties`: ordered partitions used to track unresolved ties
//! - `probability`: the binomial null model that scores relation counts
//! - `canon`: canonical forms built from the above

pub mod canon;
pub mod probability;
pub mod ties;
pub mod transform;

// Re-export main types and functions
pub use canon::{canonicalize, canonicalize_buffer, canonicalize_in_place};
pub use ties::TieLinks;
pub use transform::Transformation;

#[cfg(test)]
pub(crate) mod tests {
    /// A well-known order-3 solution, symbols shifted down to start at 0.
    pub(crate) const WIKI_SOLUTION: &str = "423567801 561084237 087231456 \
                                            748650312 315742680 602813745 \
                                            850426173 176308524 234175068";
}
