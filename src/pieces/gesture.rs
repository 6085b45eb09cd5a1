use crate::math::{Point2, Real};

/// The phases of a freehand cut gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The pointer is down and path points are being accumulated.
    Drawing,
    /// The path has been handed to the cut engine; its result has not been
    /// consumed yet.
    Processing,
}

/// Accumulates the points of a freehand cut gesture and serializes its
/// life-cycle.
///
/// The gesture is an explicit state machine: `Idle → Drawing` on pointer
/// down, `Drawing → Drawing` on each move, `Drawing → Processing` on pointer
/// up with at least two points, and `Processing → Idle` once the engine's
/// result has been consumed. Events arriving in the wrong state are ignored
/// rather than treated as errors, so stray pointer events cannot corrupt the
/// gesture.
#[derive(Clone, Debug, Default)]
pub struct CutGesture {
    state: GestureState,
    points: Vec<Point2<Real>>,
}

impl CutGesture {
    /// Creates an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase of this gesture.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// The path points accumulated so far.
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// Starts drawing at `point` (`Idle → Drawing`).
    ///
    /// Returns `false` if the gesture was not idle, in which case the event
    /// is ignored.
    pub fn begin(&mut self, point: Point2<Real>) -> bool {
        if self.state != GestureState::Idle {
            log::debug!("ignoring gesture start: a gesture is already in progress");
            return false;
        }

        self.state = GestureState::Drawing;
        self.points.clear();
        self.points.push(point);
        true
    }

    /// Appends one path point (`Drawing → Drawing`).
    ///
    /// Returns `false` if the gesture was not drawing.
    pub fn append(&mut self, point: Point2<Real>) -> bool {
        if self.state != GestureState::Drawing {
            return false;
        }

        self.points.push(point);
        true
    }

    /// Ends the drawing phase and yields the accumulated path
    /// (`Drawing → Processing`).
    ///
    /// A path with fewer than two points is a no-op gesture: the machine goes
    /// straight back to `Idle` and `None` is returned. A gesture that was not
    /// drawing also returns `None`.
    pub fn finish(&mut self) -> Option<Vec<Point2<Real>>> {
        if self.state != GestureState::Drawing {
            return None;
        }

        if self.points.len() < 2 {
            self.points.clear();
            self.state = GestureState::Idle;
            return None;
        }

        self.state = GestureState::Processing;
        Some(std::mem::take(&mut self.points))
    }

    /// Marks the engine's result as consumed, success or failure
    /// (`Processing → Idle`).
    pub fn resolve(&mut self) {
        if self.state == GestureState::Processing {
            self.state = GestureState::Idle;
        }
    }

    /// Abandons the gesture from any state.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_gesture_cycle() {
        let mut gesture = CutGesture::new();
        assert_eq!(gesture.state(), GestureState::Idle);

        assert!(gesture.begin(Point2::new(0.0, 0.0)));
        assert!(gesture.append(Point2::new(0.5, 0.1)));
        assert!(gesture.append(Point2::new(1.0, 0.0)));
        assert_eq!(gesture.state(), GestureState::Drawing);

        let path = gesture.finish().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(gesture.state(), GestureState::Processing);

        gesture.resolve();
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn single_point_gesture_is_a_noop() {
        let mut gesture = CutGesture::new();
        assert!(gesture.begin(Point2::new(0.0, 0.0)));
        assert_eq!(gesture.finish(), None);
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn events_in_wrong_state_are_ignored() {
        let mut gesture = CutGesture::new();
        assert!(!gesture.append(Point2::new(0.0, 0.0)));
        assert_eq!(gesture.finish(), None);

        assert!(gesture.begin(Point2::new(0.0, 0.0)));
        // A second pointer-down while drawing must not reset the path.
        assert!(!gesture.begin(Point2::new(9.0, 9.0)));
        assert_eq!(gesture.points().len(), 1);

        assert!(gesture.append(Point2::new(1.0, 0.0)));
        let _ = gesture.finish().unwrap();
        // While processing, new gestures on this piece are ignored.
        assert!(!gesture.begin(Point2::new(2.0, 2.0)));
        assert!(!gesture.append(Point2::new(2.0, 2.0)));
    }

    #[test]
    fn cancel_resets_from_any_state() {
        let mut gesture = CutGesture::new();
        assert!(gesture.begin(Point2::new(0.0, 0.0)));
        gesture.cancel();
        assert_eq!(gesture.state(), GestureState::Idle);
        assert!(gesture.points().is_empty());
    }
}
