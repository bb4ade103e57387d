//! Vector maths helpers shared by the rest of the crates.

use crate::error::ZeroVectorError;
use crate::{point, Angle, Box2D, Point, Vector, EPSILON};
use arrayvec::ArrayVec;
use euclid::default::Rotation2D;

use std::f64::consts::PI;

#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Epsilon equality of two points: `|Δx| < ε && |Δy| < ε`.
#[inline]
pub fn fuzzy_eq_point(a: Point, b: Point) -> bool {
    fuzzy_eq(a.x, b.x) && fuzzy_eq(a.y, b.y)
}

/// Returns `v` scaled to a length of one.
pub fn unit_vector(v: Vector) -> Result<Vector, ZeroVectorError> {
    let length = v.length();
    if length.abs() < EPSILON {
        return Err(ZeroVectorError { x: v.x, y: v.y });
    }

    Ok(v / length)
}

#[inline]
pub fn mid_point(a: Point, b: Point) -> Point {
    a.lerp(b, 0.5)
}

/// Mirrors `p` through `center`.
#[inline]
pub fn reflect_point(p: Point, center: Point) -> Point {
    center + (center - p)
}

/// Rotates `p` by `radians` around `pivot` (the origin if `None`).
pub fn rotate_point(p: Point, radians: f64, pivot: Option<Point>) -> Point {
    let pivot = pivot.unwrap_or_else(Point::origin);
    let rotation = Rotation2D::new(Angle::radians(radians));

    pivot + rotation.transform_vector(p - pivot)
}

/// Real roots of `a * x² + b * x + c = 0`.
///
/// When `a` is (nearly) zero the equation is solved as a linear one. Complex roots are
/// not reported.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();

    if a.abs() < EPSILON {
        if b.abs() >= EPSILON {
            result.push(-c / b);
        }
        return result;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return result;
    }

    let inv_2a = 0.5 / a;
    if discriminant == 0.0 {
        result.push(-b * inv_2a);
        return result;
    }

    let sqrt_d = discriminant.sqrt();
    result.push((-b + sqrt_d) * inv_2a);
    result.push((-b - sqrt_d) * inv_2a);

    result
}

/// Smallest axis-aligned box containing all of the points, points on the boundary included.
pub fn bounding_box(points: &[Point]) -> Box2D {
    Box2D::from_points(points)
}

#[inline]
pub fn bounding_box_center(points: &[Point]) -> Point {
    bounding_box(points).center()
}

/// Arithmetic mean of the points (not the area-weighted centroid).
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }

    let sum = points
        .iter()
        .fold(Vector::zero(), |acc, p| acc + p.to_vector());

    (sum / points.len() as f64).to_point()
}

/// The point of the infinite line through `a` and `b` closest to `p`.
pub fn foot_of_perpendicular(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let square_length = ab.square_length();
    if square_length == 0.0 {
        return a;
    }

    a + ab * (ab.dot(p - a) / square_length)
}

/// Whether `p` lies on the infinite line through `a` and `b`.
#[inline]
pub fn is_on_line(p: Point, a: Point, b: Point) -> bool {
    fuzzy_eq_point(p, foot_of_perpendicular(p, a, b))
}

/// Direction of the vector from `from` to `to`, in `[0, 2π)`.
pub fn angle_between(from: Point, to: Point) -> f64 {
    let v = to - from;
    let angle = v.y.atan2(v.x);
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Whether `ab` and `cd` connect the same pair of points, in either direction.
pub fn same_segment(a: Point, b: Point, c: Point, d: Point) -> bool {
    (fuzzy_eq_point(a, c) && fuzzy_eq_point(b, d)) || (fuzzy_eq_point(a, d) && fuzzy_eq_point(b, c))
}

#[inline]
pub(crate) fn scale_point(p: Point, sx: f64, sy: f64) -> Point {
    point(p.x * sx, p.y * sy)
}

#[cfg(test)]
use crate::vector;

#[test]
fn unit_of_zero_vector() {
    assert!(unit_vector(vector(0.0, 0.0)).is_err());
    assert!(unit_vector(vector(1e-8, 0.0)).is_err());

    let u = unit_vector(vector(3.0, 4.0)).unwrap();
    assert!(fuzzy_eq(u.x, 0.6));
    assert!(fuzzy_eq(u.y, 0.8));
}

#[test]
fn reflection_and_rotation() {
    let r = reflect_point(point(1.0, 1.0), point(2.0, 3.0));
    assert!(fuzzy_eq_point(r, point(3.0, 5.0)));

    let p = rotate_point(point(1.0, 0.0), PI / 2.0, None);
    assert!(fuzzy_eq_point(p, point(0.0, 1.0)));

    let p = rotate_point(point(2.0, 1.0), PI, Some(point(1.0, 1.0)));
    assert!(fuzzy_eq_point(p, point(0.0, 1.0)));
}

#[test]
fn quadratic_equation() {
    assert!(quadratic_roots(1.0, 0.0, 1.0).is_empty());

    let roots = quadratic_roots(1.0, -2.0, 1.0);
    assert_eq!(roots.len(), 1);
    assert!(fuzzy_eq(roots[0], 1.0));

    let mut roots = quadratic_roots(1.0, 0.0, -4.0);
    roots.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(&roots[..], &[-2.0, 2.0]);

    // Linear.
    let roots = quadratic_roots(0.0, 2.0, -4.0);
    assert_eq!(&roots[..], &[2.0]);
    assert!(quadratic_roots(0.0, 0.0, 3.0).is_empty());
}

#[test]
fn boxes_and_centroids() {
    let points = [point(0.0, 0.0), point(4.0, 0.0), point(4.0, 2.0), point(0.0, 6.0)];

    let b = bounding_box(&points);
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(4.0, 6.0));
    assert!(fuzzy_eq_point(bounding_box_center(&points), point(2.0, 3.0)));
    assert!(fuzzy_eq_point(centroid(&points), point(2.0, 2.0)));
    assert_eq!(centroid(&[]), point(0.0, 0.0));
}

#[test]
fn perpendicular_foot() {
    let foot = foot_of_perpendicular(point(3.0, 5.0), point(0.0, 0.0), point(10.0, 0.0));
    assert!(fuzzy_eq_point(foot, point(3.0, 0.0)));
    assert!(is_on_line(point(-4.0, -4.0), point(0.0, 0.0), point(1.0, 1.0)));
    assert!(!is_on_line(point(-4.0, -3.0), point(0.0, 0.0), point(1.0, 1.0)));
}

#[test]
fn angles() {
    assert!(fuzzy_eq(angle_between(point(0.0, 0.0), point(1.0, 0.0)), 0.0));
    assert!(fuzzy_eq(angle_between(point(0.0, 0.0), point(0.0, -1.0)), 1.5 * PI));
}
