pub use self::cut::{Cut, CutResult, DEFAULT_CUT_EPSILON};
pub use self::cut_line::{CutLine, Side};

mod cut;
mod cut_line;
mod cut_trimesh;
