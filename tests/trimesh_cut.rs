use approx::assert_relative_eq;
use meshcut::math::{Point2, Point3, Vector2};
use meshcut::query::{Cut, CutLine, CutResult, DEFAULT_CUT_EPSILON};
use meshcut::shape::TriMesh;
use meshcut::utils;

/// A flat 2×2 surface made of a single quad: 4 vertices, 2 triangles,
/// counter-clockwise when seen from +y.
fn build_quad() -> TriMesh {
    let points = vec![
        Point3::new(-1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, -1.0),
        Point3::new(-1.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
    ];
    let indices = vec![[0u32, 2, 1], [2, 3, 1]];
    TriMesh::new(points, indices)
}

/// A vertical path through the center of the quad, in the x/z plane.
fn vertical_center_path() -> [Point2<f32>; 2] {
    [Point2::new(0.0, -2.0), Point2::new(0.0, 2.0)]
}

fn assert_side_consistency(line: &CutLine, left: &TriMesh, right: &TriMesh, tol: f32) {
    for pt in left.vertices() {
        assert!(
            line.signed_side(&Point2::new(pt.x, pt.z)) >= -tol,
            "left vertex {pt} lies on the wrong side"
        );
    }
    for pt in right.vertices() {
        assert!(
            line.signed_side(&Point2::new(pt.x, pt.z)) <= tol,
            "right vertex {pt} lies on the wrong side"
        );
    }
}

#[test]
fn quad_center_cut_splits_at_edge_midpoints() {
    let mesh = build_quad();
    let path = vertical_center_path();

    let CutResult::Pair(left, right) = mesh.cut(&path) else {
        panic!("expected a successful cut");
    };

    // Each side keeps its original triangle plus the pieces of the one it
    // straddled: one tip triangle on one side, a two-triangle quad on the
    // other.
    assert_eq!(left.indices().len(), 3);
    assert_eq!(right.indices().len(), 3);
    assert_eq!(left.vertices().len(), 6);
    assert_eq!(right.vertices().len(), 6);

    // The cut passes through the geometric center of a symmetric quad, so
    // the fabricated vertices sit exactly at the midpoints of the two
    // crossed edges.
    for mid in [
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ] {
        assert!(left.vertices().contains(&mid));
        assert!(right.vertices().contains(&mid));
    }

    assert_relative_eq!(left.total_area(), 2.0, epsilon = 1.0e-5);
    assert_relative_eq!(right.total_area(), 2.0, epsilon = 1.0e-5);

    let line = CutLine::from_path(&path).unwrap();
    assert_side_consistency(&line, &left, &right, DEFAULT_CUT_EPSILON);
}

#[test]
fn quad_center_cut_preserves_winding() {
    let mesh = build_quad();

    let CutResult::Pair(left, right) = mesh.cut(&vertical_center_path()) else {
        panic!("expected a successful cut");
    };

    for piece in [&left, &right] {
        for fid in 0..piece.indices().len() as u32 {
            let [a, b, c] = piece.triangle(fid);
            let normal = utils::ccw_face_normal([&a, &b, &c]).unwrap();
            assert!(
                normal.y > 0.0,
                "fabricated face flipped its winding: {a} {b} {c}"
            );
        }
    }
}

#[test]
fn short_path_is_a_noop() {
    let mesh = build_quad();
    let before = mesh.clone();

    assert_eq!(mesh.cut(&[]), CutResult::Unchanged);
    assert_eq!(mesh.cut(&[Point2::new(0.0, 0.0)]), CutResult::Unchanged);
    // The engine never mutates its input.
    assert_eq!(mesh, before);
}

#[test]
fn line_outside_the_mesh_returns_unchanged() {
    let mesh = TriMesh::flat_grid(Vector2::new(2.0, 2.0), 4);
    let path = [Point2::new(5.0, -2.0), Point2::new(5.0, 2.0)];
    assert_eq!(mesh.cut(&path), CutResult::Unchanged);
}

#[test]
fn line_grazing_an_edge_returns_unchanged() {
    let mesh = build_quad();
    // Runs exactly along the x = -1 boundary edge: everything ends up on one
    // side, plus two on-line vertices.
    let path = [Point2::new(-1.0, -2.0), Point2::new(-1.0, 2.0)];
    assert_eq!(mesh.cut(&path), CutResult::Unchanged);
}

#[test]
fn conservation_on_random_cuts() {
    let mesh = TriMesh::flat_grid(Vector2::new(4.0, 6.0), 10);
    let total_area = mesh.total_area();
    let mut rng = oorandom::Rand32::new(0xdeadbeef);

    for _ in 0..20 {
        let x0 = rng.rand_float() * 4.0 - 2.0;
        let x1 = rng.rand_float() * 4.0 - 2.0;
        let path = [Point2::new(x0, -10.0), Point2::new(x1, 10.0)];

        let CutResult::Pair(left, right) = mesh.cut(&path) else {
            panic!("a chord through the grid must separate it");
        };

        // Splitting only adds triangles, never removes coverage.
        assert!(left.indices().len() + right.indices().len() >= mesh.indices().len());
        assert_relative_eq!(
            left.total_area() + right.total_area(),
            total_area,
            epsilon = 1.0e-2
        );

        let line = CutLine::from_path(&path).unwrap();
        assert_side_consistency(&line, &left, &right, 1.0e-3);
    }
}

#[test]
fn output_pieces_can_be_cut_again() {
    let mesh = TriMesh::flat_grid(Vector2::new(4.0, 6.0), 8);

    let CutResult::Pair(left, _right) = mesh.cut(&vertical_center_path()) else {
        panic!("expected a successful first cut");
    };

    // No residual state leaks from the first cut: the piece is a
    // self-contained mesh that can be separated again.
    let horizontal = [Point2::new(-10.0, 0.0), Point2::new(10.0, 0.0)];
    let CutResult::Pair(top, bottom) = left.cut(&horizontal) else {
        panic!("expected a successful second cut");
    };

    assert!(!top.indices().is_empty());
    assert!(!bottom.indices().is_empty());
    assert_relative_eq!(
        top.total_area() + bottom.total_area(),
        left.total_area(),
        epsilon = 1.0e-3
    );
}

#[test]
fn straddling_triangle_with_an_on_line_vertex() {
    // One triangle with a vertex exactly on the cut line: it must still be
    // split into a tip and a quad, and the on-line vertex duplicated into
    // both pieces.
    let mesh = TriMesh::new(
        vec![
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ],
        vec![[0, 1, 2]],
    );

    let CutResult::Pair(left, right) = mesh.cut(&vertical_center_path()) else {
        panic!("expected a successful cut");
    };

    assert_eq!(left.indices().len(), 1);
    assert_eq!(right.indices().len(), 2);
    let on_line = Point3::new(0.0, 0.0, -1.0);
    assert!(left.vertices().contains(&on_line));
    assert!(right.vertices().contains(&on_line));
    assert_relative_eq!(
        left.total_area() + right.total_area(),
        mesh.total_area(),
        epsilon = 1.0e-5
    );
}

#[test]
fn short_chord_falls_back_to_majority_assignment() {
    // The chord stops well inside the quad, so the straddling triangles'
    // edges cross the infinite line outside the chord's bounds. Instead of
    // dropping those faces, each goes whole to its majority side.
    let mesh = build_quad();
    let path = [Point2::new(0.0, -0.1), Point2::new(0.0, 0.1)];

    let CutResult::Pair(left, right) = mesh.cut(&path) else {
        panic!("expected a successful cut");
    };

    assert_eq!(left.indices().len(), 1);
    assert_eq!(right.indices().len(), 1);
    // No face was lost: the two sides still cover the whole surface.
    assert_relative_eq!(
        left.total_area() + right.total_area(),
        mesh.total_area(),
        epsilon = 1.0e-5
    );
}

#[test]
fn cut_is_value_in_fresh_buffers_out() {
    let mesh = build_quad();

    let CutResult::Pair(left, right) = mesh.cut(&vertical_center_path()) else {
        panic!("expected a successful cut");
    };

    // The outputs expose flattened buffers ready for rendering/physics
    // back-ends, consistent with their structured form.
    assert_eq!(left.flattened_vertices().len(), left.vertices().len() * 3);
    assert_eq!(left.flattened_indices().len(), left.indices().len() * 3);
    assert_eq!(right.flattened_vertices().len(), right.vertices().len() * 3);
    assert_eq!(right.flattened_indices().len(), right.indices().len() * 3);

    // And per-vertex normals derived from the fabricated faces.
    let normals = left.compute_vertex_normals();
    assert_eq!(normals.len(), left.vertices().len());
    for normal in normals {
        assert_relative_eq!(normal.norm(), 1.0, epsilon = 1.0e-5);
    }
}
