use crate::math::{Point, Point2, Real};
use crate::query::cut::{Cut, CutLine, CutResult, Side};
use crate::shape::TriMesh;

/// Sentinel marking a vertex with no index on a given side yet.
const UNMAPPED: u32 = u32::MAX;

/// Projects a vertex into the intrinsic x/z plane of the surface, where the
/// cut line lives.
#[inline]
fn in_plane(pt: &Point<Real>) -> Point2<Real> {
    Point2::new(pt.x, pt.z)
}

/// Returns the index of `vid` on one side of the cut, inserting its vertex
/// into that side's buffer on first use.
fn remap_or_insert(
    vid: u32,
    remap: &mut [u32],
    side_vertices: &mut Vec<Point<Real>>,
    vertices: &[Point<Real>],
) -> u32 {
    if remap[vid as usize] == UNMAPPED {
        remap[vid as usize] = side_vertices.len() as u32;
        side_vertices.push(vertices[vid as usize]);
    }
    remap[vid as usize]
}

impl Cut for TriMesh {
    fn local_cut(&self, line: &CutLine, epsilon: Real) -> CutResult<TriMesh> {
        let vertices = self.vertices();
        let indices = self.indices();

        // 1. Partition the vertices.
        // A vertex on the line belongs to both sides, so the seam is
        // watertight on each piece independently (at the cost of duplicated
        // seam geometry, which is never welded across pieces).
        let mut sides = Vec::with_capacity(vertices.len());
        let mut old_to_left = vec![UNMAPPED; vertices.len()];
        let mut old_to_right = vec![UNMAPPED; vertices.len()];
        let mut vertices_left = vec![];
        let mut vertices_right = vec![];

        for (i, pt) in vertices.iter().enumerate() {
            let side = line.side(&in_plane(pt), epsilon);
            if side != Side::Right {
                old_to_left[i] = vertices_left.len() as u32;
                vertices_left.push(*pt);
            }
            if side != Side::Left {
                old_to_right[i] = vertices_right.len() as u32;
                vertices_right.push(*pt);
            }
            sides.push(side);
        }

        // 2. Partition and split the triangles.
        let mut indices_left = vec![];
        let mut indices_right = vec![];

        for idx in indices {
            let tri_sides = idx.map(|vid| sides[vid as usize]);
            let lefts = tri_sides.iter().filter(|s| **s != Side::Right).count();
            let rights = tri_sides.iter().filter(|s| **s != Side::Left).count();

            if lefts == 3 {
                indices_left.push(idx.map(|vid| old_to_left[vid as usize]));
                continue;
            }

            if rights == 3 {
                indices_right.push(idx.map(|vid| old_to_right[vid as usize]));
                continue;
            }

            // The triangle straddles the line: it has at least one vertex
            // strictly on each side. Exactly one side holds a single strict
            // vertex; that lone vertex is the tip of the sub-triangle cut off
            // by the line.
            let strict_lefts = tri_sides.iter().filter(|s| **s == Side::Left).count();
            let lone_side = if strict_lefts == 1 { Side::Left } else { Side::Right };
            let lone = match tri_sides.iter().position(|s| *s == lone_side) {
                Some(lone) => lone,
                None => unreachable!(),
            };

            // Rotate the triangle so the lone vertex comes first. A cyclic
            // rotation keeps the winding intact, so every fabricated triangle
            // below inherits the original orientation.
            let rot = [idx[lone], idx[(lone + 1) % 3], idx[(lone + 2) % 3]];
            let pts = rot.map(|vid| vertices[vid as usize]);

            let t1 = line.intersection_with_edge(&in_plane(&pts[0]), &in_plane(&pts[1]), epsilon);
            let t2 = line.intersection_with_edge(&in_plane(&pts[0]), &in_plane(&pts[2]), epsilon);

            if let (Some(t1), Some(t2)) = (t1, t2) {
                // Interpolate the 3D split points at the 2D crossing parameters.
                let split1 = pts[0] + (pts[1] - pts[0]) * t1;
                let split2 = pts[0] + (pts[2] - pts[0]) * t2;

                // Each side gets its own copy of both split points.
                let split1_left = vertices_left.len() as u32;
                let split2_left = split1_left + 1;
                vertices_left.push(split1);
                vertices_left.push(split2);
                let split1_right = vertices_right.len() as u32;
                let split2_right = split1_right + 1;
                vertices_right.push(split1);
                vertices_right.push(split2);

                // The lone side gets the tip triangle; the other side gets
                // the remaining quad, fan-triangulated from its first corner.
                if lone_side == Side::Left {
                    indices_left.push([old_to_left[rot[0] as usize], split1_left, split2_left]);
                    indices_right.push([
                        old_to_right[rot[1] as usize],
                        old_to_right[rot[2] as usize],
                        split2_right,
                    ]);
                    indices_right.push([old_to_right[rot[1] as usize], split2_right, split1_right]);
                } else {
                    indices_right.push([old_to_right[rot[0] as usize], split1_right, split2_right]);
                    indices_left.push([
                        old_to_left[rot[1] as usize],
                        old_to_left[rot[2] as usize],
                        split2_left,
                    ]);
                    indices_left.push([old_to_left[rot[1] as usize], split2_left, split1_left]);
                }
            } else {
                // Numerically degenerate configuration (an edge parallel to
                // the cut line, or a grazing crossing). Keep the whole
                // triangle on the side holding the majority of its vertices
                // rather than dropping it; ties go to the right.
                if lefts > rights {
                    indices_left.push(idx.map(|vid| {
                        remap_or_insert(vid, &mut old_to_left, &mut vertices_left, vertices)
                    }));
                } else {
                    indices_right.push(idx.map(|vid| {
                        remap_or_insert(vid, &mut old_to_right, &mut vertices_right, vertices)
                    }));
                }
            }
        }

        // 3. Reject cuts that did not meaningfully separate the surface,
        // e.g. a line missing the mesh entirely or only grazing an edge.
        if indices_left.is_empty()
            || indices_right.is_empty()
            || vertices_left.len() < 3
            || vertices_right.len() < 3
        {
            log::debug!("cut rejected: the line does not separate the surface in two");
            return CutResult::Unchanged;
        }

        // 4. Both sides are valid meshes by construction: non-empty index
        // buffers whose entries all point inside the freshly built vertex
        // buffers.
        let mesh_left = TriMesh::new(vertices_left, indices_left);
        let mesh_right = TriMesh::new(vertices_right, indices_right);
        CutResult::Pair(mesh_left, mesh_right)
    }
}
