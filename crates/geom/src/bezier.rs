//! Quadratic and cubic bézier segments, flattened at a fixed segment count.

use crate::utils::quadratic_roots;
use crate::{Line, Point};
use arrayvec::ArrayVec;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * 2.0 * one_t * t + self.to.to_vector() * t2
    }

    /// Approximates the curve with `segment_count` line segments.
    ///
    /// Returns `segment_count + 1` points, `from` and `to` included.
    pub fn flattened(&self, segment_count: usize) -> Vec<Point> {
        sample_evenly(segment_count, |t| self.sample(t))
    }

    /// Intersections between the curve and an infinite line.
    pub fn line_intersections(&self, line: &Line) -> ArrayVec<Point, 2> {
        let v = line.vector;
        let p = line.point;

        let a = self.from.x - 2.0 * self.ctrl.x + self.to.x;
        let b = 2.0 * (self.ctrl.x - self.from.x);
        let c = self.from.x;
        let d = self.from.y - 2.0 * self.ctrl.y + self.to.y;
        let e = 2.0 * (self.ctrl.y - self.from.y);
        let f = self.from.y;

        let roots = quadratic_roots(
            a * v.y - v.x * d,
            b * v.y - v.x * e,
            (c - p.x) * v.y - (f - p.y) * v.x,
        );

        let mut result = ArrayVec::new();
        for t in roots {
            if (0.0..=1.0).contains(&t) {
                result.push(self.sample(t));
            }
        }

        result
    }
}

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Approximates the curve with `segment_count` line segments.
    ///
    /// Returns `segment_count + 1` points, `from` and `to` included.
    pub fn flattened(&self, segment_count: usize) -> Vec<Point> {
        sample_evenly(segment_count, |t| self.sample(t))
    }
}

/// Flattens a bézier curve given by its control points.
///
/// Three control points describe a quadratic curve and four a cubic one. Any other count
/// is not a supported curve and produces an empty polyline.
pub fn approximate_bezier(control_points: &[Point], segment_count: usize) -> Vec<Point> {
    match *control_points {
        [from, ctrl, to] => QuadraticBezierSegment { from, ctrl, to }.flattened(segment_count),
        [from, ctrl1, ctrl2, to] => CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        }
        .flattened(segment_count),
        _ => Vec::new(),
    }
}

/// Intersections between the quadratic curve `from, ctrl, to` and an infinite line.
#[inline]
pub fn line_quadratic_intersections(from: Point, ctrl: Point, to: Point, line: &Line) -> ArrayVec<Point, 2> {
    QuadraticBezierSegment { from, ctrl, to }.line_intersections(line)
}

// Samples t = 0, 1/n, ..., 1. The last sample is taken at exactly 1.
pub(crate) fn sample_evenly(segment_count: usize, mut sample: impl FnMut(f64) -> Point) -> Vec<Point> {
    let n = segment_count.max(1);
    let step = 1.0 / n as f64;

    (0..=n)
        .map(|i| if i == n { sample(1.0) } else { sample(step * i as f64) })
        .collect()
}

#[cfg(test)]
use crate::{point, utils::fuzzy_eq_point, vector};

#[test]
fn single_segment_returns_endpoints() {
    let p0 = point(0.0, 0.0);
    let p1 = point(5.0, 10.0);
    let p2 = point(10.0, 0.0);

    let points = approximate_bezier(&[p0, p1, p2], 1);
    assert_eq!(points, vec![p0, p2]);

    let p3 = point(20.0, 5.0);
    let points = approximate_bezier(&[p0, p1, p2, p3], 1);
    assert_eq!(points, vec![p0, p3]);
}

#[test]
fn unsupported_control_point_count() {
    assert!(approximate_bezier(&[point(0.0, 0.0), point(1.0, 1.0)], 4).is_empty());
}

#[test]
fn quadratic_midpoint() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    };

    let points = curve.flattened(2);
    assert_eq!(points.len(), 3);
    assert!(fuzzy_eq_point(points[1], point(5.0, 5.0)));
}

#[test]
fn more_segments_reduce_deviation() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    // Largest distance between the true curve and the polyline, sampled densely.
    let max_deviation = |segment_count: usize| {
        let points = curve.flattened(segment_count);
        let mut max: f64 = 0.0;
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let p = curve.sample(t);
            let segment = ((t * segment_count as f64) as usize).min(segment_count - 1);
            let local_t = t * segment_count as f64 - segment as f64;
            let q = points[segment].lerp(points[segment + 1], local_t);
            max = max.max((p - q).length());
        }
        max
    };

    let mut previous = f64::MAX;
    for n in &[1, 2, 4, 8, 16, 32] {
        let deviation = max_deviation(*n);
        assert!(deviation < previous, "{} segments: {} >= {}", n, deviation, previous);
        previous = deviation;
    }
}

#[test]
fn quadratic_line_intersections() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(5.0, 10.0),
        to: point(10.0, 0.0),
    };

    let line = Line {
        point: point(-100.0, 2.5),
        vector: vector(1.0, 0.0),
    };
    let hits = curve.line_intersections(&line);
    assert_eq!(hits.len(), 2);
    for hit in &hits {
        assert!((hit.y - 2.5).abs() < 1e-9);
    }

    let line = Line {
        point: point(0.0, 20.0),
        vector: vector(1.0, 0.0),
    };
    assert!(curve.line_intersections(&line).is_empty());
}

