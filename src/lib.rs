#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: `String` kind, `Box<T>` forwarding for `Lesser`

//! # lesser
//!
//! One less-than capability for every primitive orderable kind.
//!
//! Generic ordered code is written once against [`Lesser`] instead of once
//! per integer width, float width and string type. Primitive values obtain
//! the capability by being wrapped in [`OrderedValue`].
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Primitive (sealed)                                               |
//! |  - i8..i128, isize, u8..u128, usize, f32, f64, &str, String       |
//! |  - #[derive(Primitive)] one-field renamings                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  OrderedValue<N: Primitive>                                       |
//! |  - less_than = native `<` on the wrapped value                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Lesser                                                           |
//! |  - the bound downstream generic code is written against           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lesser::prelude::*;
//!
//! #[derive(Clone, Copy, Primitive)]
//! struct Celsius(f64);
//!
//! fn is_sorted<T: Lesser>(items: &[T]) -> bool {
//!     items.windows(2).all(|w| !w[1].less_than(&w[0]))
//! }
//!
//! assert!(is_sorted(&[wrap(1), wrap(2), wrap(2), wrap(9)]));
//! assert!(!is_sorted(&[wrap("pear"), wrap("apple")]));
//! assert!(is_sorted(&[wrap(Celsius(-4.0)), wrap(Celsius(21.5))]));
//! ```
//!
//! Floats are compared with IEEE-754 `<`: NaN is never less than anything,
//! and nothing is less than NaN.

// Allow `::lesser` paths emitted by the derive to resolve inside the crate itself
extern crate self as lesser;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod aliases;
pub mod capability;
pub mod ordered;
pub mod primitive;

pub use aliases::*;
pub use capability::{less, Lesser};
pub use ordered::{wrap, OrderedValue};
pub use primitive::Primitive;

// Derive macro shares the name of the trait it implements
pub use macros::Primitive;

/// Hidden items referenced by `#[derive(Primitive)]` output. Not public API.
#[doc(hidden)]
pub mod __private {
    /// Supertrait that closes [`Primitive`](crate::Primitive) to this crate
    /// and its derive.
    pub trait Sealed {}
}

/// Common items for writing code against the capability.
pub mod prelude {
    pub use crate::capability::{less, Lesser};
    pub use crate::ordered::{wrap, OrderedValue};
    pub use crate::primitive::Primitive;
    pub use macros::Primitive;
}
