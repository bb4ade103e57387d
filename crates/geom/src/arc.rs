//! Elliptic arc related maths and tools.

use crate::bezier::sample_evenly;
use crate::utils::{fuzzy_eq_point, rotate_point, scale_point};
use crate::{point, vector, Angle, ArcError, Point, Vector, EPSILON};

use std::f64::consts::PI;

/// An elliptic arc in SVG's endpoint parameterization.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

/// An elliptic arc in center parameterization.
///
/// `center` is in the same space as the produced points, the ellipse's axes are rotated by
/// `x_rotation` around it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radii: Vector,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
    pub x_rotation: Angle,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs is drawn.
///
/// See more examples in the [SVG specification](https://svgwg.org/specs/paths/)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is `true`, then one of the two larger arc sweeps will be chosen; otherwise, if
    /// `large_arc` is `false`, one of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction
    /// (the angle increases as the arc is drawn). With y pointing down this is clockwise
    /// on screen.
    pub sweep: bool,
}

impl Arc {
    /// Computes the center parameterization of an SVG arc.
    ///
    /// Fails if the endpoints are identical, if a radius is zero, or if the endpoints are
    /// too far apart for an ellipse of the given radii to pass through both of them.
    pub fn from_svg_arc(arc: &SvgArc) -> Result<Arc, ArcError> {
        if fuzzy_eq_point(arc.from, arc.to) {
            return Err(ArcError::CoincidentEndpoints);
        }

        let rx = arc.radii.x.abs();
        let ry = arc.radii.y.abs();
        if rx < EPSILON || ry < EPSILON {
            return Err(ArcError::ZeroRadius);
        }

        let phi = arc.x_rotation.radians;

        // Undo the axis rotation and squash the ellipse into a unit circle.
        let a = rotate_point(arc.from, -phi, None);
        let b = rotate_point(arc.to, -phi, None);
        let a = scale_point(a, 1.0 / rx, 1.0 / ry);
        let b = scale_point(b, 1.0 / rx, 1.0 / ry);

        let mid = a.lerp(b, 0.5);
        let half = (a - b) * 0.5;
        let half_distance = half.length();
        if half_distance < EPSILON * EPSILON {
            return Err(ArcError::CoincidentEndpoints);
        }

        // Both endpoints must fit on a unit circle.
        let radius_ratio = 1.0 / half_distance;
        let t2 = radius_ratio * radius_ratio - 1.0;
        if t2 < -EPSILON {
            return Err(ArcError::Unrealizable { radius_ratio });
        }
        let t = t2.max(0.0).sqrt();

        let c1 = point(mid.x + half.y * t, mid.y - half.x * t);
        let c2 = point(mid.x - half.y * t, mid.y + half.x * t);

        let turn = |c: Point| (b - a).cross(c - a);
        let center = if arc.flags.large_arc == arc.flags.sweep {
            if turn(c1) < 0.0 {
                c1
            } else {
                c2
            }
        } else if turn(c1) > 0.0 {
            c1
        } else {
            c2
        };

        let start_angle = (a.y - center.y).atan2(a.x - center.x);
        let mut end_angle = (b.y - center.y).atan2(b.x - center.x);
        if arc.flags.sweep && end_angle < start_angle {
            end_angle += 2.0 * PI;
        } else if !arc.flags.sweep && end_angle > start_angle {
            end_angle -= 2.0 * PI;
        }

        Ok(Arc {
            center: rotate_point(scale_point(center, rx, ry), phi, None),
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(end_angle - start_angle),
            x_rotation: arc.x_rotation,
        })
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let angle = self.start_angle.radians + self.sweep_angle.radians * t;
        let on_axes = point(self.radii.x * angle.cos(), self.radii.y * angle.sin());

        rotate_point(on_axes, self.x_rotation.radians, None) + self.center.to_vector()
    }

    #[inline]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    /// Approximates the arc with `segment_count` line segments at evenly spaced angles.
    pub fn flattened(&self, segment_count: usize) -> Vec<Point> {
        sample_evenly(segment_count, |t| self.sample(t))
    }
}

impl SvgArc {
    #[inline]
    pub fn to_arc(&self) -> Result<Arc, ArcError> {
        Arc::from_svg_arc(self)
    }

    pub fn flattened(&self, segment_count: usize) -> Result<Vec<Point>, ArcError> {
        Ok(self.to_arc()?.flattened(segment_count))
    }
}

/// Flattens the elliptic arc going from `start_angle` to `end_angle` (in radians).
///
/// A negative range runs in the opposite direction. Samples are rotated by `axis_rotation`
/// around the origin, then moved by `center`.
pub fn approximate_arc(
    rx: f64,
    ry: f64,
    start_angle: f64,
    end_angle: f64,
    center: Point,
    axis_rotation: f64,
    segment_count: usize,
) -> Vec<Point> {
    Arc {
        center,
        radii: vector(rx, ry),
        start_angle: Angle::radians(start_angle),
        sweep_angle: Angle::radians(end_angle - start_angle),
        x_rotation: Angle::radians(axis_rotation),
    }
    .flattened(segment_count)
}

/// Flattens an elliptic arc given in SVG's endpoint form.
#[allow(clippy::too_many_arguments)]
pub fn approximate_arc_with_endpoints(
    rx: f64,
    ry: f64,
    from: Point,
    to: Point,
    large_arc: bool,
    sweep: bool,
    axis_rotation: f64,
    segment_count: usize,
) -> Result<Vec<Point>, ArcError> {
    SvgArc {
        from,
        to,
        radii: vector(rx, ry),
        x_rotation: Angle::radians(axis_rotation),
        flags: ArcFlags { large_arc, sweep },
    }
    .flattened(segment_count)
}

#[cfg(test)]
use crate::utils::fuzzy_eq;

#[test]
fn full_circle() {
    let center = point(3.0, -7.0);
    let points = approximate_arc(5.0, 5.0, 0.0, 2.0 * PI, center, 0.0, 16);

    assert_eq!(points.len(), 17);
    for p in &points {
        assert!(fuzzy_eq((*p - center).length(), 5.0));
    }
    assert!(fuzzy_eq_point(points[0], points[16]));
}

#[test]
fn negative_range_runs_backwards() {
    let points = approximate_arc(1.0, 1.0, 0.0, -PI / 2.0, point(0.0, 0.0), 0.0, 2);
    assert!(fuzzy_eq_point(points[0], point(1.0, 0.0)));
    assert!(fuzzy_eq_point(points[2], point(0.0, -1.0)));
    assert!(points[1].y < 0.0);
}

#[test]
fn rotated_axes() {
    let points = approximate_arc(2.0, 1.0, 0.0, PI, point(10.0, 0.0), PI / 2.0, 2);
    assert!(fuzzy_eq_point(points[0], point(10.0, 2.0)));
    assert!(fuzzy_eq_point(points[1], point(9.0, 0.0)));
    assert!(fuzzy_eq_point(points[2], point(10.0, -2.0)));
}

#[test]
fn small_and_large_arcs() {
    let from = point(0.0, 0.0);
    let to = point(10.0, 0.0);
    let h = 75.0f64.sqrt();

    let small = Arc::from_svg_arc(&SvgArc {
        from,
        to,
        radii: vector(10.0, 10.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    })
    .unwrap();
    assert!(fuzzy_eq_point(small.center, point(5.0, h)));
    assert!(fuzzy_eq(small.sweep_angle.radians, PI / 3.0));

    let large = Arc::from_svg_arc(&SvgArc {
        from,
        to,
        radii: vector(10.0, 10.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: true,
            sweep: true,
        },
    })
    .unwrap();
    assert!(fuzzy_eq_point(large.center, point(5.0, -h)));
    assert!(fuzzy_eq(large.sweep_angle.radians, 5.0 * PI / 3.0));

    let counter = Arc::from_svg_arc(&SvgArc {
        from,
        to,
        radii: vector(10.0, 10.0),
        x_rotation: Angle::zero(),
        flags: ArcFlags {
            large_arc: false,
            sweep: false,
        },
    })
    .unwrap();
    assert!(fuzzy_eq_point(counter.center, point(5.0, -h)));
    assert!(counter.sweep_angle.radians < 0.0);
}

#[test]
fn endpoints_are_reproduced() {
    let from = point(0.0, 0.0);
    let to = point(10.0, 10.0);

    for &(large_arc, sweep) in &[(false, false), (false, true), (true, false), (true, true)] {
        let points =
            approximate_arc_with_endpoints(20.0, 10.0, from, to, large_arc, sweep, PI / 6.0, 12)
                .unwrap();
        assert_eq!(points.len(), 13);
        assert!(fuzzy_eq_point(points[0], from));
        assert!(fuzzy_eq_point(points[12], to));
    }
}

#[test]
fn unrealizable_arc() {
    let result = approximate_arc_with_endpoints(1.0, 1.0, point(0.0, 0.0), point(10.0, 0.0), false, true, 0.0, 8);
    match result {
        Err(ArcError::Unrealizable { radius_ratio }) => assert!(fuzzy_eq(radius_ratio, 0.2)),
        other => panic!("unexpected {:?}", other),
    }

    // Exactly a half circle, going over the top with y pointing down.
    let points =
        approximate_arc_with_endpoints(5.0, 5.0, point(0.0, 0.0), point(10.0, 0.0), false, true, 0.0, 8)
            .unwrap();
    assert!(fuzzy_eq_point(points[4], point(5.0, -5.0)));
}

#[test]
fn degenerate_arcs() {
    let p = point(1.0, 1.0);
    assert_eq!(
        approximate_arc_with_endpoints(5.0, 5.0, p, p, false, false, 0.0, 4),
        Err(ArcError::CoincidentEndpoints)
    );
    assert_eq!(
        approximate_arc_with_endpoints(0.0, 5.0, p, point(2.0, 2.0), false, false, 0.0, 4),
        Err(ArcError::ZeroRadius)
    );
}
