/// Checks on the state of layouts, used in `debug_assert!()` blocks and tests
pub mod assertions;
mod color;

#[doc(inline)]
pub use color::Color;
