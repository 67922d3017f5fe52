// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time grid orders and their derived sizes.
//!
//! The order O fixes the whole geometry: a grid is O²×O², each block is O×O,
//! and symbols run over `0..O²`. Orders are const generic parameters, so every
//! supported order gets its own monomorphized engine.
//!
//! # Supported orders
//!
//! - 2..=8: one `u64` word holds every candidate set (O² <= 64)
//!
//! Using any other order is a programming error. Generic code touches
//! [`Order::SUPPORTED`] in its constructors, which turns an unsupported order
//! into a compile-time error at monomorphization.
//!
//! The runtime-order entry points only know the *compiled* orders: 2..=5
//! always, 6..=8 behind the `order_6`, `order_7`, `order_8` cargo features.

/// Smallest supported order.
pub const MIN_ORDER: usize = 2;

/// Largest supported order (O² must fit in one 64-bit candidate word).
pub const MAX_ORDER: usize = 8;

/// Orders at or above this use the pooled candidate layout by default.
pub const COMPACT_CANDS_ORDER_THRESHOLD: usize = 5;

/// Whether the engines can be instantiated for `order`.
pub const fn is_order_supported(order: usize) -> bool {
    order >= MIN_ORDER && order <= MAX_ORDER
}

/// Whether `order` is part of the runtime dispatch table.
pub const fn is_order_compiled(order: usize) -> bool {
    match order {
        2..=5 => true,
        6 => cfg!(compiled_order_6),
        7 => cfg!(compiled_order_7),
        8 => cfg!(compiled_order_8),
        _ => false,
    }
}

/// Sizes derived from an order.
///
/// ```
/// use ordoku::geometry::Order;
///
/// assert_eq!(Order::<3>::O2, 9);
/// assert_eq!(Order::<3>::O4, 81);
/// ```
pub struct Order<const O: usize>;

impl<const O: usize> Order<O> {
    /// Side of a block; number of blocks along a chute.
    pub const O1: usize = O;
    /// Side of the grid; number of symbols; number of houses per house type.
    pub const O2: usize = O * O;
    /// Cells in one chute (band or stack).
    pub const O3: usize = O * O * O;
    /// Cells in the grid.
    pub const O4: usize = O * O * O * O;

    /// Evaluating this fails the build for unsupported orders.
    pub const SUPPORTED: () = assert!(is_order_supported(O), "unsupported grid order");
}

/// Run `$body` with the const `$o` bound to the runtime `$order`.
///
/// Panics if `$order` is not one of the compiled orders.
macro_rules! with_compiled_order {
    ($order:expr, $o:ident => $body:expr) => {
        match $order {
            #[cfg(compiled_order_2)]
            2 => {
                const $o: usize = 2;
                $body
            }
            #[cfg(compiled_order_3)]
            3 => {
                const $o: usize = 3;
                $body
            }
            #[cfg(compiled_order_4)]
            4 => {
                const $o: usize = 4;
                $body
            }
            #[cfg(compiled_order_5)]
            5 => {
                const $o: usize = 5;
                $body
            }
            #[cfg(compiled_order_6)]
            6 => {
                const $o: usize = 6;
                $body
            }
            #[cfg(compiled_order_7)]
            7 => {
                const $o: usize = 7;
                $body
            }
            #[cfg(compiled_order_8)]
            8 => {
                const $o: usize = 8;
                $body
            }
            other => panic!("grid order {} is not compiled in", other),
        }
    };
}

pub(crate) use with_compiled_order;
