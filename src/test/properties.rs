use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
    utils::{all_collinear, point_in_polygon},
    Color, Triangle, Triangulation, Vec2,
};

use super::{violates_empty_circle, TOLERANCE};

fn point_cloud(max: usize) -> impl Strategy<Value = Vec<Vec2>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 3..max)
        .prop_map(|points| points.into_iter().map(Vec2::from).collect())
}

proptest! {
    #[test]
    fn result_is_delaunay(points in point_cloud(40)) {
        prop_assume!(!all_collinear(&points));
        let triangulation = Triangulation::new(&points).unwrap();
        let super_vertices = triangulation.super_triangle().vertices();

        let keys: HashSet<_> = triangulation.iter().map(Triangle::key).collect();
        prop_assert_eq!(keys.len(), triangulation.len());

        for t in &triangulation {
            prop_assert!(t.area() > 0.);
            for p in super_vertices {
                prop_assert!(!t.contains_vertex(p));
            }
            let inside = violates_empty_circle(t, &points);
            prop_assert!(inside.is_none(), "{:?} inside circumcircle of {:?}", inside, t);
        }
    }

    #[test]
    fn insertion_tiles_the_seed(points in point_cloud(30)) {
        let mut triangulation = Triangulation::seed(&points, 0.1).unwrap();
        let seed_area = triangulation.super_triangle().area();
        for (i, point) in points.iter().enumerate() {
            triangulation.add_point(*point);
            for inserted in &points[..=i] {
                prop_assert!(triangulation.iter().any(|t| t.contains_vertex(*inserted)));
            }
            let area: f64 = triangulation.iter().map(Triangle::area).sum();
            prop_assert!((area - seed_area).abs() < seed_area * TOLERANCE);
        }
    }

    #[test]
    fn contour_keeps_only_inner_centroids(points in point_cloud(20)) {
        prop_assume!(!all_collinear(&points));
        let triangulation = Triangulation::contour(&points).unwrap();
        let hull = Triangulation::new(&points).unwrap();
        prop_assert!(triangulation.len() <= hull.len());
        for t in &triangulation {
            prop_assert!(point_in_polygon(&points, t.centroid()));
            prop_assert!(hull.contains(t));
        }
    }

    #[test]
    fn mesh_round_trip(points in point_cloud(40)) {
        prop_assume!(!all_collinear(&points));
        let triangulation = Triangulation::new(&points).unwrap();
        let mesh = triangulation.to_mesh(Color::WHITE);

        let unique: HashSet<_> = mesh.vertices.iter().collect();
        prop_assert_eq!(unique.len(), mesh.vertices.len());
        prop_assert_eq!(mesh.triangle_count(), triangulation.len());

        let expected: HashSet<_> = triangulation.iter().map(Triangle::key).collect();
        let actual: HashSet<_> = mesh
            .triangles()
            .map(|[a, b, c]| Triangle::new(a, b, c).unwrap().key())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
