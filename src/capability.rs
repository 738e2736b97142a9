//! The `Lesser` capability.
//!
//! A single operation, `less_than`, that generic ordered code can bound on
//! instead of naming each concrete orderable type.

/// Types that can say whether one value is strictly less than another.
///
/// `less_than` must describe a strict weak ordering:
///
/// - irreflexive: `x.less_than(&x)` is `false`
/// - asymmetric: `x.less_than(&y)` implies `!y.less_than(&x)`
/// - transitive: `x < y` and `y < z` imply `x < z`
///
/// Equal values are never less than each other. The operation is total and
/// has no side effects.
///
/// # Example
///
/// ```
/// use lesser::{Lesser, wrap};
///
/// fn smallest<T: Lesser>(items: &[T]) -> Option<&T> {
///     let mut iter = items.iter();
///     let first = iter.next()?;
///     Some(iter.fold(first, |min, x| if x.less_than(min) { x } else { min }))
/// }
///
/// let values = [wrap(7), wrap(-2), wrap(4)];
/// assert!(smallest(&values).unwrap().value() == &-2);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement the `Lesser` capability",
    label = "`{Self}` cannot be compared with `less_than`",
    note = "wrap primitive values in `OrderedValue` (or use `lesser::wrap`) to obtain `Lesser`"
)]
pub trait Lesser {
    /// Returns `true` if `self` is strictly less than `other`.
    fn less_than(&self, other: &Self) -> bool;
}

impl<T: Lesser + ?Sized> Lesser for &T {
    #[inline(always)]
    fn less_than(&self, other: &Self) -> bool {
        T::less_than(*self, *other)
    }
}

impl<T: Lesser + ?Sized> Lesser for &mut T {
    #[inline(always)]
    fn less_than(&self, other: &Self) -> bool {
        T::less_than(&**self, &**other)
    }
}

#[cfg(feature = "alloc")]
impl<T: Lesser + ?Sized> Lesser for alloc::boxed::Box<T> {
    #[inline(always)]
    fn less_than(&self, other: &Self) -> bool {
        T::less_than(&**self, &**other)
    }
}

/// `a.less_than(b)` as a plain function.
///
/// Handy where a comparison has to be passed by value.
#[inline(always)]
pub fn less<T: Lesser + ?Sized>(a: &T, b: &T) -> bool {
    a.less_than(b)
}
