//! Parametric generation of finger-jointed panels for laser-cut book cases.
//!
//! A [`CaseSpec`](entities::CaseSpec) describes one box; [`joinery::case_parts`] turns it into six
//! kerf-compensated [`Part`](entities::Part)s ready to be arranged on sheets.

/// Entities to model cases, their panels and the placement of panels on sheets
pub mod entities;

/// Geometric primitives and transformations
pub mod geometry;

/// Importing jobs into and exporting layouts out of this library
pub mod io;

/// Edge profiles, panel outlines and feature holes
pub mod joinery;

/// Helper functions which do not belong to any specific module
pub mod util;
