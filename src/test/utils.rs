use crate::utils::{
    all_collinear, compute_bounds, cross, is_simple_polygon, point_in_polygon,
    segment_intersection, self_intersections,
};

use super::v;

#[test]
fn bounds() {
    assert_eq!(compute_bounds(&[]), None);
    assert_eq!(compute_bounds(&[v(1., 2.)]), Some((v(1., 2.), v(1., 2.))));
    assert_eq!(
        compute_bounds(&[v(1., 2.), v(-3., 5.), v(0., -1.)]),
        Some((v(-3., -1.), v(1., 5.)))
    );
}

#[test]
fn cross_sign() {
    assert_eq!(cross(v(1., 0.), v(0., 1.)), 1.);
    assert_eq!(cross(v(0., 1.), v(1., 0.)), -1.);
    assert_eq!(cross(v(2., 2.), v(1., 1.)), 0.);
}

#[test]
fn point_in_square() {
    let square = [v(0., 0.), v(1., 0.), v(1., 1.), v(0., 1.)];
    assert!(point_in_polygon(&square, v(0.5, 0.5)));
    assert!(point_in_polygon(&square, v(0.1, 0.9)));
    assert!(!point_in_polygon(&square, v(1.5, 0.5)));
    assert!(!point_in_polygon(&square, v(-0.5, 0.5)));
    assert!(!point_in_polygon(&square, v(0.5, 2.)));
}

#[test]
fn point_in_concave_polygon() {
    let l_shape = [
        v(0., 0.),
        v(2., 0.),
        v(2., 1.),
        v(1., 1.),
        v(1., 2.),
        v(0., 2.),
    ];
    assert!(point_in_polygon(&l_shape, v(0.5, 1.5)));
    assert!(point_in_polygon(&l_shape, v(1.5, 0.5)));
    assert!(!point_in_polygon(&l_shape, v(1.5, 1.5)));
}

#[test]
fn point_in_degenerate_polygon() {
    assert!(!point_in_polygon(&[], v(0., 0.)));
    assert!(!point_in_polygon(&[v(0., 0.), v(1., 1.)], v(0.5, 0.5)));
}

#[test]
fn segments_crossing() {
    let p = segment_intersection(v(0., 0.), v(1., 1.), v(0., 1.), v(1., 0.)).unwrap();
    assert_eq!(p, v(0.5, 0.5));

    let touching = segment_intersection(v(0., 0.), v(1., 0.), v(1., 0.), v(1., 1.));
    assert_eq!(touching, Some(v(1., 0.)));
}

#[test]
fn segments_missing() {
    assert_eq!(
        segment_intersection(v(0., 0.), v(1., 0.), v(0., 1.), v(1., 1.)),
        None
    );
    assert_eq!(
        segment_intersection(v(0., 0.), v(1., 1.), v(2., 0.), v(3., -1.)),
        None
    );
    assert_eq!(
        segment_intersection(v(0., 0.), v(2., 0.), v(1., 0.), v(3., 0.)),
        None
    );
}

#[test]
fn bowtie_self_intersects() {
    let bowtie = [v(0., 0.), v(1., 1.), v(1., 0.), v(0., 1.)];
    assert_eq!(self_intersections(&bowtie), vec![v(0.5, 0.5)]);
    assert!(!is_simple_polygon(&bowtie));
}

#[test]
fn simple_polygons() {
    let square = [v(0., 0.), v(1., 0.), v(1., 1.), v(0., 1.)];
    assert!(self_intersections(&square).is_empty());
    assert!(is_simple_polygon(&square));

    let triangle = [v(0., 0.), v(1., 0.), v(0., 1.)];
    assert!(is_simple_polygon(&triangle));
}

#[test]
fn collinear_sets() {
    assert!(all_collinear(&[v(0., 0.), v(1., 1.), v(2., 2.)]));
    assert!(all_collinear(&[v(0., 1.), v(0., 5.), v(0., -3.), v(0., 1.)]));
    assert!(!all_collinear(&[]));
    assert!(!all_collinear(&[v(0., 0.)]));
    assert!(!all_collinear(&[v(0., 0.), v(1., 1.)]));
    assert!(!all_collinear(&[v(0., 0.), v(0., 0.), v(1., 1.)]));
    assert!(!all_collinear(&[v(0., 0.), v(1., 1.), v(2., 2.1)]));
}

#[test]
fn collinear_with_inexact_slope() {
    let points: Vec<_> = (1..=5).map(|i| v(i as f64, 0.1 * i as f64)).collect();
    assert!(all_collinear(&points));

    let points: Vec<_> = (0..6).map(|i| v(0.3 * i as f64, -0.7 * i as f64 + 1e3)).collect();
    assert!(all_collinear(&points));

    let mut bent = points.clone();
    bent.push(v(0.3, -0.7 + 1e3 + 1e-3));
    assert!(!all_collinear(&bent));
}
