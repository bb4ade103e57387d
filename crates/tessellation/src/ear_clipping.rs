use crate::algorithms::winding::to_clockwise;
use crate::error::TriangulationError;
use crate::geom::{point_in_triangle, Triangle, EPSILON};
use crate::math::Point;
use crate::path::Polygon;

use log::debug;

/// Ear clipping triangulator.
///
/// Ears are picked starting from the vertex furthest from the origin, which is always
/// convex. If that one can't be cut off, the following vertices turning the same way are
/// tried in order. An ear is only cut if no other remaining vertex lies inside it or on
/// its boundary.
///
/// The triangulator keeps its buffers between calls, it is cheaper to reuse one than to
/// create a new one for each polygon.
///
/// ## Example
///
/// ```
/// # extern crate shatter_tessellation;
/// # use shatter_tessellation::{Triangulator, path::Polygon, math::point};
/// let square = Polygon::new(vec![
///     point(0.0, 0.0),
///     point(10.0, 0.0),
///     point(10.0, 10.0),
///     point(0.0, 10.0),
/// ]);
///
/// let mut triangulator = Triangulator::new();
/// let triangles = triangulator.triangulate(&square).unwrap();
///
/// assert_eq!(triangles.len(), 2);
/// ```
#[derive(Default)]
pub struct Triangulator {
    vertices: Vec<Vertex>,
    remaining: usize,
    attempts: usize,
    max_attempts: usize,
}

// An entry of the vertex arena. Removed vertices stay in place and are unlinked from the
// ring, so that indices remain stable.
#[derive(Copy, Clone, Debug)]
struct Vertex {
    position: Point,
    prev: usize,
    next: usize,
    live: bool,
}

impl Triangulator {
    pub fn new() -> Self {
        Triangulator::default()
    }

    /// Splits the polygon into triangles.
    ///
    /// The polygon is first wound clockwise, so are the produced triangles. Vertices with
    /// collinear neighbors may be dropped without producing a triangle.
    pub fn triangulate(&mut self, polygon: &Polygon) -> Result<Vec<Triangle>, TriangulationError> {
        let polygon = to_clockwise(polygon);
        self.begin(polygon.points());

        let mut output = Vec::with_capacity(self.remaining.saturating_sub(2));

        while self.remaining >= 3 {
            let tip = self.find_ear()?;
            let triangle = self.triangle_at(tip);
            if triangle.signed_area_x2().abs() < EPSILON {
                debug!("Dropping collinear vertex {}.", tip);
            } else {
                output.push(triangle);
            }

            self.remove(tip);
        }

        Ok(output)
    }

    fn begin(&mut self, points: &[Point]) {
        let n = points.len();

        self.vertices.clear();
        self.vertices.reserve(n);
        for (idx, position) in points.iter().enumerate() {
            self.vertices.push(Vertex {
                position: *position,
                prev: (idx + n - 1) % n,
                next: (idx + 1) % n,
                live: true,
            });
        }

        self.remaining = n;
        self.attempts = 0;
        self.max_attempts = n * n;
    }

    fn find_ear(&mut self) -> Result<usize, TriangulationError> {
        let tip = self.furthest_from_origin();
        if self.is_collinear(tip) || self.is_ear(tip)? {
            return Ok(tip);
        }

        let turn = self.turn(tip);
        debug!("Vertex {} is not an ear, looking further.", tip);

        let mut idx = self.vertices[tip].next;
        while idx != tip {
            if self.is_collinear(idx) {
                return Ok(idx);
            }
            if self.turn(idx).signum() == turn.signum() && self.is_ear(idx)? {
                return Ok(idx);
            }
            idx = self.vertices[idx].next;
        }

        Err(self.invalid_polygon())
    }

    // First live vertex at the largest distance, in index order.
    fn furthest_from_origin(&self) -> usize {
        let mut result = 0;
        let mut max_distance = -1.0;
        for (idx, vertex) in self.vertices.iter().enumerate() {
            if !vertex.live {
                continue;
            }
            let distance = vertex.position.to_vector().square_length();
            if distance > max_distance {
                max_distance = distance;
                result = idx;
            }
        }

        result
    }

    fn is_ear(&mut self, tip: usize) -> Result<bool, TriangulationError> {
        self.attempts += 1;
        if self.attempts > self.max_attempts {
            return Err(self.invalid_polygon());
        }

        let Vertex { prev, next, .. } = self.vertices[tip];
        let triangle = self.triangle_at(tip);

        let blocked = self.vertices.iter().enumerate().any(|(idx, vertex)| {
            vertex.live
                && idx != prev
                && idx != tip
                && idx != next
                && point_in_triangle(vertex.position, triangle.a, triangle.b, triangle.c)
        });

        Ok(!blocked)
    }

    // Cross product of the edges meeting at the vertex, positive for convex vertices of a
    // clockwise polygon.
    fn turn(&self, idx: usize) -> f64 {
        self.triangle_at(idx).signed_area_x2()
    }

    fn is_collinear(&self, idx: usize) -> bool {
        self.turn(idx).abs() < EPSILON
    }

    fn triangle_at(&self, tip: usize) -> Triangle {
        let vertex = &self.vertices[tip];

        Triangle {
            a: self.vertices[vertex.prev].position,
            b: vertex.position,
            c: self.vertices[vertex.next].position,
        }
    }

    fn remove(&mut self, idx: usize) {
        let Vertex { prev, next, .. } = self.vertices[idx];
        self.vertices[prev].next = next;
        self.vertices[next].prev = prev;
        self.vertices[idx].live = false;
        self.remaining -= 1;
    }

    fn invalid_polygon(&self) -> TriangulationError {
        TriangulationError::InvalidPolygon {
            remaining: self.remaining,
            attempts: self.attempts,
        }
    }
}

/// Splits the polygon into triangles with a temporary `Triangulator`.
pub fn triangulate(polygon: &Polygon) -> Result<Vec<Triangle>, TriangulationError> {
    Triangulator::new().triangulate(polygon)
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn total_area(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::area).sum()
}

#[test]
fn square() {
    let square = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    let triangles = triangulate(&square).unwrap();
    assert_eq!(triangles.len(), 2);
    for triangle in &triangles {
        assert!(triangle.signed_area_x2() > 0.0);
    }
    assert!((total_area(&triangles) - 100.0).abs() < EPSILON);

    // The furthest vertex (10, 10) is cut first, along the (10, 0) (0, 10) diagonal.
    assert_eq!(
        triangles[0],
        Triangle {
            a: point(10.0, 0.0),
            b: point(10.0, 10.0),
            c: point(0.0, 10.0),
        }
    );

    // Counter-clockwise input gives clockwise triangles too.
    let triangles = triangulate(&square.reversed()).unwrap();
    assert_eq!(triangles.len(), 2);
    for triangle in &triangles {
        assert!(triangle.signed_area_x2() > 0.0);
    }
}

#[test]
fn concave() {
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

    let triangles = triangulate(&polygon).unwrap();
    assert_eq!(triangles.len(), 6);
    assert!((total_area(&triangles) - 72.0).abs() < EPSILON);
    for triangle in &triangles {
        assert!(triangle.signed_area_x2() > 0.0);
        // No triangle covers the notch.
        assert!(!triangle.contains_point(point(5.0, 3.0)));
    }
}

#[test]
fn collinear_vertices() {
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(5.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);
    let triangles = triangulate(&polygon).unwrap();
    assert!((total_area(&triangles) - 100.0).abs() < EPSILON);

    let flat = Polygon::new(vec![point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)]);
    assert_eq!(triangulate(&flat), Ok(Vec::new()));

    assert_eq!(triangulate(&Polygon::new(Vec::new())), Ok(Vec::new()));
}

#[test]
fn reuse_triangulator() {
    let mut triangulator = Triangulator::new();
    let triangle = Polygon::new(vec![point(0.0, 0.0), point(4.0, 0.0), point(0.0, 3.0)]);
    let square = Polygon::new(vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ]);

    assert_eq!(triangulator.triangulate(&square).unwrap().len(), 2);
    let triangles = triangulator.triangulate(&triangle).unwrap();
    assert_eq!(triangles.len(), 1);
    assert!((total_area(&triangles) - 6.0).abs() < EPSILON);
}

#[test]
fn pinched_polygon_is_invalid() {
    // Two triangles touching at (5, 5), the shared point blocks every ear.
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(5.0, 5.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
        point(5.0, 5.0),
    ]);

    assert!(matches!(
        triangulate(&polygon),
        Err(TriangulationError::InvalidPolygon { remaining: 6, .. })
    ));
}
