//! The glue surrounding the cut engine: gesture accumulation, piece
//! ownership, and the initial impulses handed to the physics layer.

pub use self::gesture::{CutGesture, GestureState};
pub use self::impulse::CutImpulse;
pub use self::registry::{CutOutcome, Piece, PieceId, PieceSet};

mod gesture;
mod impulse;
mod registry;
