use crate::math::*;

/// Computes the non-unit normal of a counter-clock-wise triangle.
///
/// Its norm is equal to twice the triangle area, which makes it suitable for
/// area-weighted normal accumulation.
#[inline]
pub fn ccw_face_raw_normal(pts: [&Point<Real>; 3]) -> Vector<Real> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    ab.cross(&ac)
}

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    UnitVector::try_new(ccw_face_raw_normal(pts), DEFAULT_EPSILON)
}
