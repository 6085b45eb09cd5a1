use crate::bounding_volume::{self, BoundingSphere};
use crate::math::{Point, Real, Vector, Vector2, DEFAULT_EPSILON};
use crate::utils;

/// Indicates an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A face references a vertex that is not part of the vertex buffer.
    #[error("the face {face} references the vertex {index} which is out of bounds.")]
    IndexOutOfBounds {
        /// The face containing the out-of-bounds index.
        face: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

/// A triangulated surface represented as a vertex buffer and an index buffer.
///
/// The winding order of each index triple defines the outward normal of that
/// face via cross product. Normals are not stored; they are derived on demand
/// by [`TriMesh::compute_vertex_normals`].
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// # Panics
    /// Panics if the index buffer is empty or references an out-of-bounds
    /// vertex. Use [`TriMesh::try_new`] when the buffers come from an
    /// untrusted source.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        match Self::try_new(vertices, indices) {
            Ok(mesh) => mesh,
            Err(e) => panic!("invalid triangle mesh: {e}"),
        }
    }

    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn try_new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (fid, idx) in indices.iter().enumerate() {
            for vid in idx {
                if *vid as usize >= vertices.len() {
                    return Err(TriMeshBuilderError::IndexOutOfBounds {
                        face: fid as u32,
                        index: *vid,
                    });
                }
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a flat rectangular grid lying in the local x/z plane, facing +y.
    ///
    /// The grid is centered at the origin, spans `extents.x` along the x axis
    /// and `extents.y` along the z axis, and contains `subdivisions ×
    /// subdivisions` quads of two triangles each.
    pub fn flat_grid(extents: Vector2<Real>, subdivisions: u32) -> Self {
        let subdivisions = subdivisions.max(1);
        let nverts = subdivisions + 1;
        let mut vertices = Vec::with_capacity((nverts * nverts) as usize);
        let mut indices = Vec::with_capacity((subdivisions * subdivisions * 2) as usize);

        for iz in 0..nverts {
            for ix in 0..nverts {
                let x = (ix as Real / subdivisions as Real - 0.5) * extents.x;
                let z = (iz as Real / subdivisions as Real - 0.5) * extents.y;
                vertices.push(Point::new(x, 0.0, z));
            }
        }

        for iz in 0..subdivisions {
            for ix in 0..subdivisions {
                let i00 = iz * nverts + ix;
                let i10 = i00 + 1;
                let i01 = i00 + nverts;
                let i11 = i01 + 1;
                // Counter-clockwise when seen from +y.
                indices.push([i00, i01, i10]);
                indices.push([i01, i11, i10]);
            }
        }

        Self { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The three vertices of the `fid`-th face.
    pub fn triangle(&self, fid: u32) -> [Point<Real>; 3] {
        self.indices[fid as usize].map(|vid| self.vertices[vid as usize])
    }

    /// The sum of the areas of every face of this mesh.
    pub fn total_area(&self) -> Real {
        self.indices
            .iter()
            .map(|idx| {
                let [a, b, c] = idx.map(|vid| self.vertices[vid as usize]);
                utils::ccw_face_raw_normal([&a, &b, &c]).norm() / 2.0
            })
            .sum()
    }

    /// Derives one normal per vertex by accumulating the area-weighted
    /// normals of its adjacent faces.
    ///
    /// Degenerate faces contribute nothing; a vertex touched only by
    /// degenerate faces gets an arbitrary +y normal.
    pub fn compute_vertex_normals(&self) -> Vec<Vector<Real>> {
        let mut normals = vec![Vector::zeros(); self.vertices.len()];

        for idx in &self.indices {
            let [a, b, c] = idx.map(|vid| self.vertices[vid as usize]);
            // The raw cross product has a norm equal to twice the face area,
            // so summing it directly is the area weighting.
            let n = utils::ccw_face_raw_normal([&a, &b, &c]);

            for vid in idx {
                normals[*vid as usize] += n;
            }
        }

        for n in &mut normals {
            let norm = n.norm();
            if norm > DEFAULT_EPSILON {
                *n /= norm;
            } else {
                *n = Vector::y();
            }
        }

        normals
    }

    /// The vertex buffer flattened into `[x0, y0, z0, x1, y1, z1, …]`, the
    /// layout consumed by rendering and physics back-ends.
    pub fn flattened_vertices(&self) -> Vec<Real> {
        let mut out = Vec::with_capacity(self.vertices.len() * 3);
        for pt in &self.vertices {
            out.extend_from_slice(pt.coords.as_slice());
        }
        out
    }

    /// The index buffer flattened into face triples in emission order.
    pub fn flattened_indices(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.indices.len() * 3);
        for idx in &self.indices {
            out.extend_from_slice(idx);
        }
        out
    }

    /// The bounding sphere of this mesh in its local frame.
    pub fn local_bounding_sphere(&self) -> BoundingSphere {
        bounding_volume::point_cloud_bounding_sphere(&self.vertices)
    }
}
