//! Procedural macros for the `lesser` comparison capability
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Primitive)]` | one-field struct | Make a renamed primitive kind wrappable in `OrderedValue` |
//!
//! Re-exported by `lesser`; depend on that crate rather than this one.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

/// Derive macro implementing `lesser::Primitive` for a transparent renaming
/// of a primitive kind.
///
/// The struct must have exactly one field, and that field's type must itself
/// be `Primitive`. Comparison forwards to the field.
///
/// # Usage
/// ```ignore
/// #[derive(Primitive)]
/// struct Meters(f64);
///
/// #[derive(Primitive)]
/// struct Tag<'a> { name: &'a str }
///
/// assert!(wrap(Meters(1.0)).less_than(&wrap(Meters(2.5))));
/// ```
#[proc_macro_derive(Primitive)]
pub fn derive_primitive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_primitive(input).into()
}
