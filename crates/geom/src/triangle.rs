use crate::{Box2D, Point};

/// A 2D triangle defined by three points `a`, `b` and `c`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Whether `point` is inside the triangle or on one of its edges.
    ///
    /// Works with either winding order.
    pub fn contains_point(&self, point: Point) -> bool {
        let d1 = (self.b - self.a).cross(point - self.a);
        let d2 = (self.c - self.b).cross(point - self.b);
        let d3 = (self.a - self.c).cross(point - self.c);

        let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_negative && has_positive)
    }

    /// Twice the signed area, positive when `a`, `b`, `c` turn clockwise on a y-down plane.
    #[inline]
    pub fn signed_area_x2(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area_x2().abs() * 0.5
    }

    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        Box2D::from_points(&[self.a, self.b, self.c])
    }
}

/// Whether `p` is inside the triangle `abc` or on one of its edges.
#[inline]
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    Triangle { a, b, c }.contains_point(p)
}

#[cfg(test)]
use crate::point;

#[test]
fn test_triangle_contains() {
    let t = Triangle {
        a: point(0.0, 0.0),
        b: point(10.0, 0.0),
        c: point(0.0, 10.0),
    };

    assert!(t.contains_point(point(1.0, 1.0)));
    assert!(!t.contains_point(point(6.0, 6.0)));
    assert!(!t.contains_point(point(-1.0, 1.0)));

    // Boundary points count as inside.
    assert!(t.contains_point(point(5.0, 0.0)));
    assert!(t.contains_point(point(5.0, 5.0)));
    assert!(t.contains_point(point(0.0, 10.0)));

    // Winding order doesn't matter.
    let flipped = Triangle {
        a: t.a,
        b: t.c,
        c: t.b,
    };
    assert!(flipped.contains_point(point(1.0, 1.0)));
    assert!(!flipped.contains_point(point(6.0, 6.0)));
}

#[test]
fn test_triangle_area() {
    let t = Triangle {
        a: point(0.0, 0.0),
        b: point(10.0, 0.0),
        c: point(0.0, 10.0),
    };
    // With y pointing down, a -> b -> c turns clockwise.
    assert!(t.signed_area_x2() > 0.0);
    assert_eq!(t.area(), 50.0);
    assert_eq!(t.bounding_box().max, point(10.0, 10.0));
}
