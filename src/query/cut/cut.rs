use crate::math::{Point2, Real};
use crate::query::cut::CutLine;

/// The default tolerance used to decide that a point lies on the cut line.
pub const DEFAULT_CUT_EPSILON: Real = 1.0e-6;

/// The result of a cut operation.
#[derive(Clone, Debug, PartialEq)]
pub enum CutResult<T> {
    /// The cut yielded two pieces: the first lying on the left of the cut
    /// line, the second on its right.
    Pair(T, T),
    /// The cut did not meaningfully separate the shape.
    ///
    /// This covers both "no cut requested" (a path with fewer than two
    /// points) and a cut line that misses or only grazes the shape. The input
    /// is left untouched, so the caller may retry with another path.
    Unchanged,
}

impl<T> CutResult<T> {
    /// Did this cut leave the shape untouched?
    pub fn is_unchanged(&self) -> bool {
        matches!(self, CutResult::Unchanged)
    }
}

/// Trait implemented by shapes that can be cut in two along a drawn path.
pub trait Cut: Sized {
    /// Cuts `self` along the straight chord between the first and last points
    /// of `path`, using the default tolerance.
    ///
    /// The intermediate points of the path are deliberately ignored: only the
    /// chord determines the split. A path with fewer than two points is a
    /// no-op and returns [`CutResult::Unchanged`].
    fn cut(&self, path: &[Point2<Real>]) -> CutResult<Self> {
        match CutLine::from_path(path) {
            Some(line) => self.local_cut(&line, DEFAULT_CUT_EPSILON),
            None => CutResult::Unchanged,
        }
    }

    /// Cuts `self` along `line`, expressed in the shape's intrinsic 2D plane.
    ///
    /// `epsilon` is the tolerance within which a point is considered to lie
    /// exactly on the line.
    fn local_cut(&self, line: &CutLine, epsilon: Real) -> CutResult<Self>;
}
