//! `OrderedValue`: a primitive value that answers `less_than`.

use crate::capability::Lesser;
use crate::primitive::Primitive;

/// Wraps one value of a primitive kind and implements [`Lesser`] for it by
/// forwarding to the kind's native `<`.
///
/// The wrapper never changes its value. It deliberately implements nothing
/// but comparison (no `PartialEq`, `Hash`, `Debug`, arithmetic); reach the
/// raw value through [`value`](Self::value) for those.
///
/// ```
/// use lesser::{Lesser, OrderedValue};
///
/// let three = OrderedValue::new(3);
/// let five = OrderedValue::new(5);
///
/// assert!(three.less_than(&five));
/// assert!(!five.less_than(&three));
/// assert!(!five.less_than(&five));
/// ```
///
/// Floats keep IEEE-754 semantics, so NaN is neither less nor greater than
/// anything:
///
/// ```
/// use lesser::{Lesser, wrap};
///
/// let nan = wrap(f64::NAN);
/// assert!(!nan.less_than(&wrap(1.0)));
/// assert!(!wrap(1.0).less_than(&nan));
/// ```
#[derive(Clone, Copy)]
pub struct OrderedValue<N: Primitive> {
    value: N,
}

impl<N: Primitive> OrderedValue<N> {
    /// Wraps `value`. Always succeeds.
    #[inline(always)]
    pub const fn new(value: N) -> Self {
        Self { value }
    }

    /// Borrow the wrapped value.
    #[inline(always)]
    pub const fn value(&self) -> &N {
        &self.value
    }

    /// Unwrap into the raw value.
    #[inline(always)]
    pub fn into_value(self) -> N {
        self.value
    }
}

impl<N: Primitive> Lesser for OrderedValue<N> {
    #[inline(always)]
    fn less_than(&self, other: &Self) -> bool {
        self.value.native_lt(&other.value)
    }
}

impl<N: Primitive> From<N> for OrderedValue<N> {
    #[inline(always)]
    fn from(value: N) -> Self {
        Self::new(value)
    }
}

/// Shorthand for [`OrderedValue::new`].
#[inline(always)]
pub const fn wrap<N: Primitive>(value: N) -> OrderedValue<N> {
    OrderedValue::new(value)
}
