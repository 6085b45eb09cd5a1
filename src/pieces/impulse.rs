use crate::math::{Point, Real, Vector};
use crate::query::CutLine;
use crate::shape::TriMesh;

/// Strength of the sideways push separating two freshly cut pieces.
const IMPULSE_STRENGTH: Real = 3.0;
/// Upward component making the pieces lift off on separation.
const IMPULSE_LIFT: Real = 1.5;

/// An initial impulse for a freshly cut piece, to be applied by the physics
/// layer when the piece's rigid body is created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutImpulse {
    /// The impulse vector, in the piece's local frame.
    pub linear: Vector<Real>,
    /// The application point: the piece's bounding-sphere center.
    pub at_point: Point<Real>,
}

impl CutImpulse {
    /// Computes the impulses pushing the two pieces of a successful cut away
    /// from the cut line, perpendicular to it and pointing outward on each
    /// side, with a fixed upward lift.
    ///
    /// Returns `None` if the cut line is degenerate (zero length), in which
    /// case the pieces simply get no initial push.
    pub fn for_cut(line: &CutLine, left: &TriMesh, right: &TriMesh) -> Option<(Self, Self)> {
        let normal = line.left_normal()?;
        let push = Vector::new(
            normal.x * IMPULSE_STRENGTH,
            IMPULSE_LIFT,
            normal.y * IMPULSE_STRENGTH,
        );
        // The sideways push flips between sides; the lift does not.
        let push_away = Vector::new(-push.x, push.y, -push.z);

        let left_impulse = Self {
            linear: push,
            at_point: left.local_bounding_sphere().center,
        };
        let right_impulse = Self {
            linear: push_away,
            at_point: right.local_bounding_sphere().center,
        };
        Some((left_impulse, right_impulse))
    }
}
