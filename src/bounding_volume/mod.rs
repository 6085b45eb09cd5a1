//! Bounding volumes.

pub use self::bounding_sphere::{point_cloud_bounding_sphere, BoundingSphere};

mod bounding_sphere;
