//! The closed set of primitive kinds that `OrderedValue` may wrap.
//!
//! | Kind | Types |
//! |------|-------|
//! | signed integers | `i8` `i16` `i32` `i64` `i128` `isize` |
//! | unsigned integers | `u8` `u16` `u32` `u64` `u128` `usize` |
//! | floating point | `f32` `f64` |
//! | text | `&str`, `String` (`alloc`) |
//! | renamings | one-field structs with `#[derive(Primitive)]` |
//!
//! The set is sealed: the supertrait lives in a hidden module, so the only
//! way for downstream code to add a kind is the derive, which in turn only
//! accepts a field that is already `Primitive`.
//!
//! ## Renamed kinds
//!
//! A derived struct compares exactly like its field:
//!
//! ```
//! use lesser::{Lesser, Primitive, wrap};
//!
//! #[derive(Primitive)]
//! struct UserId(u64);
//!
//! #[derive(Primitive)]
//! struct Label<'a> {
//!     text: &'a str,
//! }
//!
//! assert!(wrap(UserId(3)).less_than(&wrap(UserId(10))));
//! assert!(wrap(Label { text: "a" }).less_than(&wrap(Label { text: "b" })));
//! ```
//!
//! A field that is not itself a primitive kind is rejected:
//!
//! ```compile_fail
//! use lesser::Primitive;
//!
//! #[derive(Primitive)]
//! struct Flag(bool);
//! ```
//!
//! So is anything other than a single-field struct:
//!
//! ```compile_fail
//! use lesser::Primitive;
//!
//! #[derive(Primitive)]
//! struct Range(u32, u32);
//! ```

use crate::__private::Sealed;

/// A primitive kind eligible to be wrapped in [`OrderedValue`](crate::OrderedValue).
///
/// Anything outside the set is rejected at compile time:
///
/// ```compile_fail
/// use lesser::OrderedValue;
///
/// struct Point { x: i32, y: i32 }
///
/// let _ = OrderedValue::new(Point { x: 1, y: 2 });
/// ```
///
/// ```compile_fail
/// use lesser::OrderedValue;
///
/// // `bool` and `char` are ordered in Rust but not primitive kinds here.
/// let _ = OrderedValue::new(true);
/// ```
///
/// The type itself cannot even be named with a foreign kind:
///
/// ```compile_fail
/// use lesser::OrderedValue;
///
/// fn takes(_: OrderedValue<(i32, i32)>) {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a primitive orderable kind",
    label = "`{Self}` cannot be wrapped in `OrderedValue`",
    note = "accepted kinds: i8..i128, isize, u8..u128, usize, f32, f64, &str, String, and one-field structs with `#[derive(Primitive)]` over them"
)]
pub trait Primitive: Sealed {
    /// The host `<` between two values of this kind.
    ///
    /// Not part of the public API; use [`Lesser::less_than`](crate::Lesser::less_than).
    #[doc(hidden)]
    fn native_lt(&self, other: &Self) -> bool;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl Primitive for $ty {
                #[inline(always)]
                fn native_lt(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, i128, isize);
impl_primitive!(u8, u16, u32, u64, u128, usize);
// IEEE-754: every comparison involving NaN is false.
impl_primitive!(f32, f64);

#[cfg(feature = "alloc")]
impl_primitive!(alloc::string::String);

impl Sealed for &str {}

impl Primitive for &str {
    #[inline(always)]
    fn native_lt(&self, other: &Self) -> bool {
        *self < *other
    }
}
