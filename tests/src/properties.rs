use crate::*;

use shatter::algorithms::area::area;
use shatter::algorithms::hit_test::point_in_polygon;
use shatter::algorithms::winding::{loopwise, Winding};
use shatter::geom::utils::fuzzy_eq_point;
use shatter::geom::{approximate_arc, approximate_bezier, LineSegment, QuadraticBezierSegment, EPSILON};
use shatter::math::{point, Point};
use shatter::path::{flatten_path, FlattenOptions, Polygon};
use shatter::svg::ShapeDescriptor;
use shatter::{flatten_shape, slice_polygon, triangulate};

use std::collections::HashMap;

// Whether `b` is `a` starting from another vertex.
fn same_ring(a: &Polygon, b: &Polygon) -> bool {
    let (a, b) = (a.points(), b.points());
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }

    (0..b.len()).any(|offset| {
        a.iter()
            .enumerate()
            .all(|(i, p)| fuzzy_eq_point(*p, b[(i + offset) % b.len()]))
    })
}

fn distance_to_segment(p: Point, segment: &LineSegment) -> f64 {
    let v = segment.to_vector();
    let t = ((p - segment.from).dot(v) / v.square_length()).max(0.0).min(1.0);

    (p - segment.sample(t)).length()
}

#[test]
fn rect_is_a_clockwise_square() {
    let attributes: HashMap<String, String> = vec![("x", "0"), ("y", "0"), ("width", "10"), ("height", "10")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let descriptor = ShapeDescriptor::from_attributes("rect", &attributes).unwrap();
    let polygon = flatten_shape(&descriptor).unwrap();

    assert_eq!(polygon.len(), 4);
    assert_eq!(loopwise(&polygon), Winding::Clockwise);
    assert_eq!(area(&polygon, false), 100.0);
}

#[test]
fn close_path() {
    let polyline = flatten_path("M0,0 L10,0 L10,10 Z", &FlattenOptions::DEFAULT).unwrap();

    assert!(polyline.closed);
    assert_eq!(
        polyline.points,
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]
    );
}

#[test]
fn lines_missing_the_polygon() {
    let misses = [
        (point(-200.0, -200.0), point(-200.0, 200.0)),
        (point(-200.0, 300.0), point(300.0, 300.0)),
        (point(500.0, 0.0), point(0.0, -500.0)),
    ];

    for (name, polygon) in sample_polygons() {
        for &(p0, p1) in &misses {
            let pieces = slice_polygon(&polygon, p0, p1);
            assert_eq!(pieces.len(), 1, "{}", name);
            assert!(same_ring(&pieces[0], &polygon), "{}", name);
        }
    }
}

#[test]
fn square_in_halves() {
    let pieces = slice_polygon(&square(), point(5.0, -5.0), point(5.0, 15.0));

    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert!((area(piece, false) - 50.0).abs() < EPSILON);
    }
}

#[test]
fn slicing_conserves_area() {
    for (name, polygon) in sample_polygons() {
        let expected = area(&polygon, false);
        for &(p0, p1) in &sample_lines() {
            let pieces = slice_polygon(&polygon, p0, p1);
            let total: f64 = pieces.iter().map(|piece| area(piece, false)).sum();
            assert!(
                (total - expected).abs() < EPSILON,
                "{} cut by {:?} {:?}: {} pieces, area {} instead of {}",
                name,
                p0,
                p1,
                pieces.len(),
                total,
                expected
            );
            for piece in &pieces {
                assert!(piece.len() >= 3, "{}", name);
            }
        }
    }
}

#[test]
fn concave_cuts_give_every_piece() {
    let cases = [
        (notched_square(), point(-10.0, 3.0), point(110.0, 3.0), 3),
        (comb(), point(-10.0, 25.5), point(110.0, 25.5), 4),
        (star(), point(-10.0, 33.3), point(110.0, 41.7), 2),
    ];

    for (polygon, p0, p1, count) in &cases {
        assert_eq!(slice_polygon(polygon, *p0, *p1).len(), *count);
    }
}

#[test]
fn cuts_through_vertices() {
    let cases = [
        // Reflex vertex touched by the line.
        (spikes(), point(-5.0, 5.0), point(15.0, 5.0), 3),
        // Along the floor of the notch.
        (notched_square(), point(-5.0, 7.0), point(15.0, 7.0), 3),
        // Six crossings, four of them on vertices.
        (comb(), point(-10.0, 60.0), point(110.0, 60.0), 4),
        // Convex vertex touched by the line.
        (diamond(), point(-5.0, 0.0), point(15.0, 0.0), 1),
        (diamond(), point(-5.0, 5.0), point(15.0, 5.0), 2),
        (square(), point(0.0, 0.0), point(10.0, 10.0), 2),
        (square(), point(10.0, 0.0), point(20.0, 10.0), 1),
    ];

    for (polygon, p0, p1, count) in &cases {
        let pieces = slice_polygon(polygon, *p0, *p1);
        assert_eq!(pieces.len(), *count, "{:?} {:?}", p0, p1);

        let total: f64 = pieces.iter().map(|piece| area(piece, false)).sum();
        assert!((total - area(polygon, false)).abs() < EPSILON, "{:?} {:?}", p0, p1);
        for piece in &pieces {
            assert!(area(piece, false) > EPSILON);
        }
    }
}

#[test]
fn triangles_cover_the_pieces() {
    for (name, polygon) in sample_polygons() {
        for &(p0, p1) in &sample_lines() {
            for piece in slice_polygon(&polygon, p0, p1) {
                let triangles = triangulate(&piece).unwrap();
                let total: f64 = triangles.iter().map(|t| t.area()).sum();
                assert!((total - area(&piece, false)).abs() < EPSILON, "{}", name);
                for t in &triangles {
                    assert!(t.signed_area_x2() > 0.0, "{}", name);
                }
            }
        }
    }
}

#[test]
fn square_triangles_share_a_diagonal() {
    let triangles = triangulate(&square()).unwrap();
    assert_eq!(triangles.len(), 2);

    let corners = |t: &shatter::geom::Triangle| vec![t.a, t.b, t.c];
    let first = corners(&triangles[0]);
    let shared = corners(&triangles[1])
        .into_iter()
        .filter(|p| first.contains(p))
        .count();
    assert_eq!(shared, 2);

    let total: f64 = triangles.iter().map(|t| t.area()).sum();
    assert_eq!(total, 100.0);
}

#[test]
fn more_segments_follow_the_curve_closer() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };

    let one = approximate_bezier(&[curve.from, curve.ctrl, curve.to], 1);
    assert_eq!(one, vec![curve.from, curve.to]);

    let mut previous_error = std::f64::INFINITY;
    for &segments in &[1, 2, 4, 8, 16, 32] {
        let points = approximate_bezier(&[curve.from, curve.ctrl, curve.to], segments);
        let mut max_error: f64 = 0.0;
        for i in 0..=200 {
            let p = curve.sample(i as f64 / 200.0);
            let error = points
                .windows(2)
                .map(|w| distance_to_segment(p, &LineSegment { from: w[0], to: w[1] }))
                .fold(std::f64::INFINITY, f64::min);
            max_error = max_error.max(error);
        }

        assert!(max_error < previous_error, "{} segments", segments);
        previous_error = max_error;
    }
}

#[test]
fn full_turn_samples() {
    let center = point(20.0, 30.0);
    let points = approximate_arc(5.0, 5.0, 0.0, 2.0 * std::f64::consts::PI, center, 0.0, 24);

    assert_eq!(points.len(), 25);
    for p in &points {
        assert!(((*p - center).length() - 5.0).abs() < EPSILON);
    }
}

#[test]
fn point_in_polygon_properties() {
    for (name, polygon) in sample_polygons() {
        for v in polygon.points() {
            assert!(point_in_polygon(&polygon, *v), "{}", name);
        }

        let bounds = polygon.bounding_box();
        let diagonal = (bounds.max - bounds.min).length();
        // Right of, above or below the bounding box, so that the ray misses every vertex.
        for &(dx, dy) in &[(1.0, 0.0), (0.0, 1.0), (0.0, -1.0), (0.7, 0.7), (-0.7, -0.7)] {
            let p = polygon.centroid() + shatter::math::vector(dx, dy) * (diagonal * 2.0 + 1.0);
            assert!(!point_in_polygon(&polygon, p), "{}", name);
        }
    }

    // Convex polygons contain their centroid.
    let pentagon = Polygon::new(vec![
        point(0.0, 0.0),
        point(8.0, 1.0),
        point(10.0, 7.0),
        point(3.0, 10.0),
        point(-2.0, 5.0),
    ]);
    for polygon in &[square(), pentagon] {
        assert!(point_in_polygon(polygon, polygon.centroid()));
    }
}
