use crate::utils::{foot_of_perpendicular, fuzzy_eq_point, is_on_line};
use crate::{Point, Vector, EPSILON};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn to_line(&self) -> Line {
        Line {
            point: self.from,
            vector: self.to - self.from,
        }
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Whether the two segments properly cross each other.
    ///
    /// Each segment's endpoints must lie strictly on opposite sides of the other segment.
    /// Collinear or overlapping segments, and segments that merely touch at an endpoint,
    /// are not considered intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        let ab = self.to_vector();
        let cd = other.to_vector();

        let side_c = ab.cross(other.from - self.from);
        let side_d = ab.cross(other.to - self.from);
        let side_a = cd.cross(self.from - other.from);
        let side_b = cd.cross(self.to - other.from);

        side_c * side_d < 0.0 && side_a * side_b < 0.0
    }

    /// Intersection between this segment and an infinite line.
    ///
    /// Parallel segments never intersect. An endpoint lying on the line is returned as is;
    /// otherwise the intersection must be strictly inside the segment.
    pub fn line_intersection(&self, line: &Line) -> Option<Point> {
        if self.to_vector().cross(line.vector).abs() < EPSILON {
            return None;
        }

        if line.contains(self.from) {
            return Some(self.from);
        }
        if line.contains(self.to) {
            return Some(self.to);
        }

        let c0 = line.vector.cross(self.from - line.point);
        let c1 = line.vector.cross(self.to - line.point);
        let t = c0 / (c0 - c1);

        if t > 0.0 && t < 1.0 {
            Some(self.sample(t))
        } else {
            None
        }
    }

    /// Whether both segments connect the same points (in either direction).
    pub fn same_as(&self, other: &Self) -> bool {
        (fuzzy_eq_point(self.from, other.from) && fuzzy_eq_point(self.to, other.to))
            || (fuzzy_eq_point(self.from, other.to) && fuzzy_eq_point(self.to, other.from))
    }
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line {
    pub point: Point,
    pub vector: Vector,
}

impl Line {
    /// The line passing through `a` and `b`.
    #[inline]
    pub fn through(a: Point, b: Point) -> Self {
        Line {
            point: a,
            vector: b - a,
        }
    }

    /// Whether the two points defining the line are distinct.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !fuzzy_eq_point(self.point, self.point + self.vector)
    }

    /// Whether `p` lies on the line (within epsilon of its projection).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        is_on_line(p, self.point, self.point + self.vector)
    }

    #[inline]
    pub fn foot_of_perpendicular(&self, p: Point) -> Point {
        foot_of_perpendicular(p, self.point, self.point + self.vector)
    }

    /// Position of `p` projected on the line's own axis.
    ///
    /// Only meaningful for ordering points, the scale depends on the length of `vector`.
    #[inline]
    pub fn projection(&self, p: Point) -> f64 {
        (p - self.point).dot(self.vector)
    }
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn crossing_segments() {
    let a = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 10.0),
    };
    let b = LineSegment {
        from: point(0.0, 10.0),
        to: point(10.0, 0.0),
    };
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    let c = LineSegment {
        from: point(20.0, 0.0),
        to: point(30.0, 10.0),
    };
    assert!(!a.intersects(&c));
}

#[test]
fn overlapping_segments_do_not_intersect() {
    let a = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    let b = LineSegment {
        from: point(5.0, 0.0),
        to: point(15.0, 0.0),
    };
    assert!(!a.intersects(&b));
    assert!(!a.intersects(&a));

    // Touching at an endpoint.
    let c = LineSegment {
        from: point(10.0, 0.0),
        to: point(10.0, 10.0),
    };
    assert!(!a.intersects(&c));
}

#[test]
fn segment_line_intersection() {
    let segment = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };

    let vertical = Line::through(point(5.0, -5.0), point(5.0, 15.0));
    let p = segment.line_intersection(&vertical).unwrap();
    assert!(fuzzy_eq_point(p, point(5.0, 0.0)));

    let parallel = Line::through(point(0.0, 1.0), point(10.0, 1.0));
    assert_eq!(segment.line_intersection(&parallel), None);

    let outside = Line::through(point(15.0, -5.0), point(15.0, 15.0));
    assert_eq!(segment.line_intersection(&outside), None);

    // Endpoints on the line are returned verbatim.
    let through_end = Line::through(point(10.0, -5.0), point(10.0, 5.0));
    assert_eq!(segment.line_intersection(&through_end), Some(point(10.0, 0.0)));
}

#[test]
fn line_helpers() {
    let line = Line {
        point: point(0.0, 0.0),
        vector: vector(2.0, 0.0),
    };
    assert!(line.is_valid());
    assert!(line.contains(point(-3.0, 0.0)));
    assert!(line.projection(point(3.0, 7.0)) > line.projection(point(1.0, -7.0)));
    assert!(!Line::through(point(1.0, 1.0), point(1.0, 1.0)).is_valid());
}
