//! Geometric queries: everything that computes new geometry out of existing
//! geometry.

pub use self::cut::{Cut, CutLine, CutResult, Side, DEFAULT_CUT_EPSILON};

/// Cutting a shape in two along a drawn path.
pub mod cut;
