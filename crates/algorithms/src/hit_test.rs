//! Determine whether a point is inside a polygon.
//!
//! Both tests cast a horizontal ray from the point towards the right of the polygon's
//! bounding box and count the edges it crosses. A point equal to a vertex is inside.
//! Points lying on an edge, or rays grazing a vertex, are not special-cased.

use crate::geom::utils::{bounding_box, fuzzy_eq_point};
use crate::geom::{Line, LineSegment, QuadraticBezierSegment};
use crate::math::{point, vector, Box2D, Point};
use crate::path::Polygon;

/// Returns whether the point is inside the polygon.
pub fn point_in_polygon(polygon: &Polygon, p: Point) -> bool {
    let points = polygon.points();
    if points.iter().any(|v| fuzzy_eq_point(*v, p)) {
        return true;
    }

    let ray = horizontal_ray(&polygon.bounding_box(), p);
    let crossings = polygon.edges().filter(|edge| edge.intersects(&ray)).count();

    crossings % 2 == 1
}

/// Returns whether the point is inside a region where some edges are quadratic curves.
///
/// `control_points[i]`, when present, is the control point of the edge ending at vertex
/// `i` (the edge from vertex `i - 1`, wrapping around). Edges without a control point are
/// straight.
pub fn point_in_curved_region(polygon: &Polygon, control_points: &[Option<Point>], p: Point) -> bool {
    let points = polygon.points();
    let n = points.len();
    if points.iter().any(|v| fuzzy_eq_point(*v, p)) {
        return true;
    }

    let mut hull: Vec<Point> = points.to_vec();
    hull.extend(control_points.iter().flatten());
    let ray = horizontal_ray(&bounding_box(&hull), p);
    let ray_line = Line {
        point: p,
        vector: vector(1.0, 0.0),
    };

    let mut crossings = 0;
    for idx in 0..n {
        let from = points[(idx + n - 1) % n];
        let to = points[idx];

        match control_points.get(idx).copied().flatten() {
            Some(ctrl) => {
                let curve = QuadraticBezierSegment { from, ctrl, to };
                crossings += curve
                    .line_intersections(&ray_line)
                    .iter()
                    .filter(|hit| hit.x > p.x)
                    .count();
            }
            None => {
                if (LineSegment { from, to }).intersects(&ray) {
                    crossings += 1;
                }
            }
        }
    }

    crossings % 2 == 1
}

// A segment from `p` going right, past the box's right edge.
fn horizontal_ray(bounds: &Box2D, p: Point) -> LineSegment {
    let end = bounds.max.x.max(p.x) + bounds.width() + 1.0;

    LineSegment {
        from: p,
        to: point(end, p.y),
    }
}

#[cfg(test)]
fn square() -> Polygon {
    Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ])
}

#[test]
fn convex_polygon() {
    let polygon = square();

    for v in polygon.points() {
        assert!(point_in_polygon(&polygon, *v));
    }
    assert!(point_in_polygon(&polygon, polygon.centroid()));
    assert!(point_in_polygon(&polygon, point(9.5, 0.5)));
    assert!(!point_in_polygon(&polygon, point(-1.0, 5.0)));
    assert!(!point_in_polygon(&polygon, point(11.0, 5.0)));
    assert!(!point_in_polygon(&polygon, point(5.0, -0.5)));

    // Further than the diagonal beyond the bounding box, in every direction.
    let far = 10.0 + 200f64.sqrt() + 1.0;
    for &(x, y) in &[(far, 5.0), (-far, 5.0), (5.0, far), (5.0, -far), (far, far)] {
        assert!(!point_in_polygon(&polygon, point(x, y)));
    }
}

#[test]
fn concave_polygon() {
    // A U shape, open at the top.
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(3.0, 0.0),
        point(3.0, 7.0),
        point(7.0, 7.0),
        point(7.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    assert!(point_in_polygon(&polygon, point(1.5, 3.0)));
    assert!(point_in_polygon(&polygon, point(8.5, 3.0)));
    assert!(!point_in_polygon(&polygon, point(5.0, 3.0)));
    assert!(point_in_polygon(&polygon, point(5.0, 8.5)));
}

#[test]
fn curved_region() {
    // The bottom edge, from (10, 10) back to (0, 10), bulges down to y = 15 at x = 5.
    let polygon = Polygon::new(vec![
        point(0.0, 10.0),
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
    ]);
    let control_points = [Some(point(5.0, 20.0)), None, None, None];

    assert!(point_in_curved_region(&polygon, &control_points, point(5.0, 14.0)));
    assert!(point_in_curved_region(&polygon, &control_points, point(5.0, 5.0)));
    assert!(!point_in_curved_region(&polygon, &control_points, point(5.0, 16.0)));
    assert!(!point_in_curved_region(&polygon, &control_points, point(-1.0, 5.0)));
    assert!(!point_in_polygon(&polygon, point(5.0, 14.0)));

    // Without control points it behaves like the straight polygon.
    assert!(point_in_curved_region(&polygon, &[], point(5.0, 5.0)));
    assert!(!point_in_curved_region(&polygon, &[], point(5.0, 14.0)));
}
