/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

mod sheet_transform;

#[doc(inline)]
pub use sheet_transform::SheetTransform;
