//! Finger-jointed panels: edge profiles, panel outlines, hole clearance and the panels of a case.

pub mod clearance;
pub mod edge;
pub mod factory;
pub mod panel;

#[doc(inline)]
pub use factory::case_parts;
