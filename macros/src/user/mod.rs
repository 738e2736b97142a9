//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Primitive)]` | on struct | Renamed primitive kind |

pub mod primitive;

pub use primitive::expand_derive_primitive;
