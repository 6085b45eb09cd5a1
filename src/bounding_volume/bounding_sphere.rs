use crate::math::{Point, Real};
use na::{center, distance_squared};

/// A bounding sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> Self {
        Self { center, radius }
    }

    /// The center of this sphere.
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The radius of this sphere.
    pub fn radius(&self) -> Real {
        self.radius
    }
}

/// Computes a bounding sphere of a point cloud, centered at the middle of its
/// axis-aligned bounding box.
///
/// This is not the minimal enclosing sphere, but it is cheap and tight enough
/// for impulse application points.
pub fn point_cloud_bounding_sphere(points: &[Point<Real>]) -> BoundingSphere {
    let Some(first) = points.first() else {
        return BoundingSphere::new(Point::origin(), 0.0);
    };

    let mut mins = *first;
    let mut maxs = *first;

    for pt in &points[1..] {
        mins = mins.inf(pt);
        maxs = maxs.sup(pt);
    }

    let center = center(&mins, &maxs);
    let radius_sq = points
        .iter()
        .map(|pt| distance_squared(&center, pt))
        .fold(0.0, Real::max);

    BoundingSphere::new(center, radius_sq.sqrt())
}
