//! Polylines and polygons.

use crate::geom::utils::{bounding_box, centroid, fuzzy_eq_point};
use crate::geom::LineSegment;
use crate::math::{Box2D, Point};

/// An ordered sequence of points.
///
/// Whether the last point connects back to the first one is given by `closed`, the first
/// point is not repeated at the end.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Polyline { points, closed }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Applies `f` to every point.
    pub fn map_points(mut self, mut f: impl FnMut(Point) -> Point) -> Self {
        for p in &mut self.points {
            *p = f(*p);
        }

        self
    }

    /// Forms a polygon out of the points, regardless of `closed`.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.points.clone())
    }

    pub fn into_polygon(self) -> Polygon {
        Polygon::new(self.points)
    }
}

/// A closed ring of points.
///
/// No two consecutive points are equal within epsilon, the last and the first point
/// included. The winding order is whatever the points were given in, see
/// `shatter_algorithms::winding` to normalize it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon, omitting points equal to their predecessor.
    pub fn new(points: Vec<Point>) -> Self {
        let mut result: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            match result.last() {
                Some(prev) if fuzzy_eq_point(*prev, p) => {}
                _ => result.push(p),
            }
        }

        while result.len() > 1 && fuzzy_eq_point(result[0], result[result.len() - 1]) {
            result.pop();
        }

        Polygon { points: result }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon with less than three vertices has no area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    #[inline]
    pub fn next_index(&self, idx: usize) -> usize {
        (idx + 1) % self.points.len()
    }

    #[inline]
    pub fn prev_index(&self, idx: usize) -> usize {
        (idx + self.points.len() - 1) % self.points.len()
    }

    /// The edge going from vertex `idx` to the next one.
    #[inline]
    pub fn edge(&self, idx: usize) -> LineSegment {
        LineSegment {
            from: self.points[idx],
            to: self.points[self.next_index(idx)],
        }
    }

    /// Iterates over the edges, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        (0..self.points.len()).map(move |idx| self.edge(idx))
    }

    /// The same ring walked in the opposite direction.
    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();

        Polygon { points }
    }

    pub fn bounding_box(&self) -> Box2D {
        bounding_box(&self.points)
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point {
        centroid(&self.points)
    }

    pub fn to_polyline(&self) -> Polyline {
        Polyline {
            points: self.points.clone(),
            closed: true,
        }
    }
}

impl From<Polyline> for Polygon {
    fn from(polyline: Polyline) -> Self {
        polyline.into_polygon()
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn omit_duplicate_points() {
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 1e-9),
        point(10.0, 10.0),
        point(0.0, 0.0),
        point(0.0, 0.0),
    ]);

    assert_eq!(
        polygon.points(),
        &[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]
    );
}

#[test]
fn single_point_polygon() {
    let polygon = Polygon::new(vec![point(1.0, 1.0), point(1.0, 1.0)]);
    assert_eq!(polygon.len(), 1);
    assert!(polygon.is_degenerate());
    assert!(Polygon::new(Vec::new()).is_empty());
}

#[test]
fn edges_wrap_around() {
    let polygon = Polygon::new(vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]);
    let edges: Vec<LineSegment> = polygon.edges().collect();

    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2].from, point(10.0, 10.0));
    assert_eq!(edges[2].to, point(0.0, 0.0));
    assert_eq!(polygon.prev_index(0), 2);
    assert_eq!(polygon.next_index(2), 0);

    let reversed = polygon.reversed();
    assert_eq!(reversed.points()[0], point(10.0, 10.0));
}
