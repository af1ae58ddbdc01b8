mod case_spec;
mod globals;
mod part;
mod placed_part;

#[doc(inline)]
pub use case_spec::BoxDims;
#[doc(inline)]
pub use case_spec::CaseSpec;
#[doc(inline)]
pub use case_spec::MagnetSpec;
#[doc(inline)]
pub use globals::Globals;
#[doc(inline)]
pub use part::Hole;
#[doc(inline)]
pub use part::HoleKind;
#[doc(inline)]
pub use part::PanelKind;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use placed_part::SheetSlot;

#[cfg(test)]
pub(crate) use case_spec::tests as case_spec_tests;
