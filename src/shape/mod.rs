//! Shapes supported by meshcut.

pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod trimesh;
