// Compute the winding of a polygon.

use crate::area::signed_area;
use crate::geom::EPSILON;
use crate::path::Polygon;

/// The rotational direction of a polygon, on a y-down plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// The polygon has no area.
    Degenerate,
}

/// Compute the winding of the polygon from the sign of its area.
pub fn loopwise(polygon: &Polygon) -> Winding {
    let area = signed_area(polygon.points());
    if area.abs() < EPSILON {
        Winding::Degenerate
    } else if area > 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Returns a copy of the polygon with clockwise winding.
///
/// Degenerate polygons are returned as is.
pub fn to_clockwise(polygon: &Polygon) -> Polygon {
    match loopwise(polygon) {
        Winding::CounterClockwise => polygon.reversed(),
        _ => polygon.clone(),
    }
}

#[test]
fn polygon_winding() {
    use crate::geom::point;

    let clockwise = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);
    let counter_clockwise = clockwise.reversed();

    assert_eq!(loopwise(&clockwise), Winding::Clockwise);
    assert_eq!(loopwise(&counter_clockwise), Winding::CounterClockwise);
    assert_eq!(to_clockwise(&counter_clockwise), clockwise);
    assert_eq!(to_clockwise(&clockwise), clockwise);

    let flat = Polygon::new(vec![point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)]);
    assert_eq!(loopwise(&flat), Winding::Degenerate);
}
