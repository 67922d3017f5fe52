// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags for the compiled grid orders.
//!
//! The runtime-order entry points dispatch over the orders listed here:
//! - `#[cfg(compiled_order_2)]` .. `#[cfg(compiled_order_5)]` are always set
//! - `#[cfg(compiled_order_6)]` .. `#[cfg(compiled_order_8)]` follow the
//!   `order_6` .. `order_8` features (or `large_orders`)

fn main() {
    for order in 2..=8 {
        println!("cargo:rustc-check-cfg=cfg(compiled_order_{order})");
    }

    for order in 2..=5 {
        println!("cargo:rustc-cfg=compiled_order_{order}");
    }

    #[cfg(feature = "order_6")]
    println!("cargo:rustc-cfg=compiled_order_6");

    #[cfg(feature = "order_7")]
    println!("cargo:rustc-cfg=compiled_order_7");

    #[cfg(feature = "order_8")]
    println!("cargo:rustc-cfg=compiled_order_8");
}
