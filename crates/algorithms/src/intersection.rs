//! Intersections between segments, lines and polygons.

use crate::geom::{Line, LineSegment};
use crate::math::Point;
use crate::path::Polygon;

/// Whether the segments `ab` and `cd` properly cross each other.
///
/// Collinear or overlapping segments, as well as segments touching at an endpoint, do not
/// intersect.
#[inline]
pub fn segments_intersect(ab: &LineSegment, cd: &LineSegment) -> bool {
    ab.intersects(cd)
}

/// Intersection of a segment and an infinite line.
///
/// See `LineSegment::line_intersection`.
#[inline]
pub fn segment_line_intersection(segment: &LineSegment, line: &Line) -> Option<Point> {
    segment.line_intersection(line)
}

/// Same as `segment_line_intersection` with the arguments swapped.
#[inline]
pub fn line_segment_intersection(line: &Line, segment: &LineSegment) -> Option<Point> {
    segment.line_intersection(line)
}

/// Intersections of the line with every edge of the polygon, in edge order.
///
/// A vertex lying on the line is reported by both edges sharing it.
pub fn intersections(polygon: &Polygon, line: &Line) -> Vec<Point> {
    polygon
        .edges()
        .filter_map(|edge| edge.line_intersection(line))
        .collect()
}

/// Like `intersections`, also returning the index of the edge each point belongs to.
pub fn indexed_intersections(polygon: &Polygon, line: &Line) -> Vec<(usize, Point)> {
    polygon
        .edges()
        .enumerate()
        .filter_map(|(idx, edge)| edge.line_intersection(line).map(|p| (idx, p)))
        .collect()
}

#[cfg(test)]
use crate::math::point;

#[test]
fn crossing_segments() {
    let ab = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 10.0),
    };
    let cd = LineSegment {
        from: point(0.0, 10.0),
        to: point(10.0, 0.0),
    };
    let touching = LineSegment {
        from: point(10.0, 10.0),
        to: point(20.0, 0.0),
    };
    let overlapping = LineSegment {
        from: point(5.0, 5.0),
        to: point(15.0, 15.0),
    };

    assert!(segments_intersect(&ab, &cd));
    assert!(!segments_intersect(&ab, &touching));
    assert!(!segments_intersect(&ab, &overlapping));
    assert!(!segments_intersect(&ab, &ab));
}

#[test]
fn square_and_line() {
    let square = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    let vertical = Line::through(point(5.0, -5.0), point(5.0, 15.0));
    assert_eq!(
        intersections(&square, &vertical),
        vec![point(5.0, 0.0), point(5.0, 10.0)]
    );
    assert_eq!(
        indexed_intersections(&square, &vertical),
        vec![(0, point(5.0, 0.0)), (2, point(5.0, 10.0))]
    );

    let outside = Line::through(point(20.0, 0.0), point(20.0, 1.0));
    assert!(intersections(&square, &outside).is_empty());

    // Both edges meeting at a vertex on the line report it. The edges parallel to the
    // line report nothing.
    let diagonal = Line::through(point(0.0, 0.0), point(1.0, 1.0));
    assert_eq!(
        intersections(&square, &diagonal),
        vec![point(0.0, 0.0), point(10.0, 10.0), point(10.0, 10.0), point(0.0, 0.0)]
    );
    let along_edge = Line::through(point(0.0, 0.0), point(1.0, 0.0));
    assert_eq!(
        intersections(&square, &along_edge),
        vec![point(10.0, 0.0), point(0.0, 0.0)]
    );

    let segment = square.edge(0);
    assert_eq!(
        segment_line_intersection(&segment, &vertical),
        line_segment_intersection(&vertical, &segment)
    );
}
