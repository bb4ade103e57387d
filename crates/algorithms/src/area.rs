//! Polygon area.

use crate::math::Point;
use crate::path::Polygon;

/// Signed area of the ring of points, positive when the points turn clockwise with y
/// pointing down.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut double_area = 0.0;
    for (idx, p) in points.iter().enumerate() {
        let next = points[(idx + 1) % n];
        double_area += (p.x - next.x) * (p.y + next.y);
    }

    double_area * 0.5
}

/// Area of the polygon.
///
/// With `allow_negative` the sign encodes the winding (see `signed_area`), otherwise the
/// absolute value is returned.
pub fn area(polygon: &Polygon, allow_negative: bool) -> f64 {
    let area = signed_area(polygon.points());
    if allow_negative {
        area
    } else {
        area.abs()
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn square_area() {
    let square = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    assert_eq!(area(&square, true), 100.0);
    assert_eq!(area(&square, false), 100.0);
    assert_eq!(area(&square.reversed(), true), -100.0);
    assert_eq!(area(&square.reversed(), false), 100.0);
}

#[test]
fn degenerate_area() {
    assert_eq!(signed_area(&[point(0.0, 0.0), point(1.0, 1.0)]), 0.0);
    assert_eq!(
        signed_area(&[point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)]),
        0.0
    );
}
