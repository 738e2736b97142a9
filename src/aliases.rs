//! Per-kind aliases for `OrderedValue`.

use crate::ordered::OrderedValue;

macro_rules! ordered_aliases {
    ($($kind:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("[`OrderedValue`] over `", stringify!($kind), "`.")]
                pub type [<Ordered $kind:camel>] = OrderedValue<$kind>;
            )*
        }
    };
}

ordered_aliases!(i8, i16, i32, i64, i128, isize);
ordered_aliases!(u8, u16, u32, u64, u128, usize);
ordered_aliases!(f32, f64);

/// [`OrderedValue`] over a borrowed `&str`.
pub type OrderedStr<'a> = OrderedValue<&'a str>;

/// [`OrderedValue`] over an owned `String`.
#[cfg(feature = "alloc")]
pub type OrderedString = OrderedValue<alloc::string::String>;
