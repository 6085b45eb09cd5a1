use crate::math::{Point2, Real, UnitVector2, Vector2, DEFAULT_EPSILON};

/// Which side of an oriented cut line a point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The point lies strictly on the left of the line.
    Left,
    /// The point lies strictly on the right of the line.
    Right,
    /// The point lies on the line, within tolerance.
    ///
    /// Such a point belongs to both sides of a cut, so the seam stays
    /// watertight on each piece independently.
    On,
}

/// The straight cutting chord between the first and last points of a drawn
/// path, oriented from start to end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CutLine {
    a: Point2<Real>,
    b: Point2<Real>,
}

impl CutLine {
    /// Creates a cut line from its start and end points.
    pub fn new(a: Point2<Real>, b: Point2<Real>) -> Self {
        Self { a, b }
    }

    /// Creates a cut line from a drawn path, keeping only its first and last
    /// points.
    ///
    /// Returns `None` if the path holds fewer than two points, i.e. no cut
    /// was requested.
    pub fn from_path(path: &[Point2<Real>]) -> Option<Self> {
        match (path.first(), path.last()) {
            (Some(first), Some(last)) if path.len() >= 2 => Some(Self::new(*first, *last)),
            _ => None,
        }
    }

    /// The start point of this line.
    pub fn start(&self) -> &Point2<Real> {
        &self.a
    }

    /// The end point of this line.
    pub fn end(&self) -> &Point2<Real> {
        &self.b
    }

    /// The 2D cross product of this line's direction with `a -> pt`.
    ///
    /// Positive on the left of the line, negative on the right, and zero on
    /// the line itself.
    pub fn signed_side(&self, pt: &Point2<Real>) -> Real {
        (self.b.x - self.a.x) * (pt.y - self.a.y) - (self.b.y - self.a.y) * (pt.x - self.a.x)
    }

    /// Classifies `pt` relative to this line, treating any point within
    /// `epsilon` of the line as lying on it.
    pub fn side(&self, pt: &Point2<Real>, epsilon: Real) -> Side {
        let value = self.signed_side(pt);
        if value.abs() < epsilon {
            Side::On
        } else if value > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Computes where the segment `p -> q` crosses this line segment.
    ///
    /// Returns the parametric coordinate of the crossing along `p -> q`, in
    /// `[0, 1]`. Returns `None` when the segments are parallel (zero
    /// denominator) or do not cross within both segments' bounds.
    pub fn intersection_with_edge(
        &self,
        p: &Point2<Real>,
        q: &Point2<Real>,
        epsilon: Real,
    ) -> Option<Real> {
        let denom =
            (p.x - q.x) * (self.a.y - self.b.y) - (p.y - q.y) * (self.a.x - self.b.x);

        if denom.abs() < epsilon || ulps_eq!(denom, 0.0) {
            return None;
        }

        let t = ((p.x - self.a.x) * (self.a.y - self.b.y)
            - (p.y - self.a.y) * (self.a.x - self.b.x))
            / denom;
        let u = -((p.x - q.x) * (p.y - self.a.y) - (p.y - q.y) * (p.x - self.a.x)) / denom;

        if t >= 0.0 && t <= 1.0 && u >= 0.0 && u <= 1.0 {
            Some(t)
        } else {
            None
        }
    }

    /// The unit direction of this line, from start to end.
    ///
    /// Returns `None` if the line is degenerate (start and end coincide).
    pub fn direction(&self) -> Option<UnitVector2<Real>> {
        UnitVector2::try_new(self.b - self.a, DEFAULT_EPSILON)
    }

    /// The unit normal of this line pointing toward its left side.
    ///
    /// Returns `None` if the line is degenerate.
    pub fn left_normal(&self) -> Option<UnitVector2<Real>> {
        let dir = self.b - self.a;
        UnitVector2::try_new(Vector2::new(-dir.y, dir.x), DEFAULT_EPSILON)
    }
}
