//! Replays path commands into a flattened polyline.

use crate::commands::PathCommand;
use crate::geom::utils::reflect_point;
use crate::geom::{
    Angle, ArcError, ArcFlags, CubicBezierSegment, QuadraticBezierSegment, SvgArc,
};
use crate::math::{point, Point, Vector};
use crate::parser::parse_commands;
use crate::polygon::Polyline;

/// Parameters for the flattening of curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct FlattenOptions {
    /// Number of line segments per bézier or arc command.
    ///
    /// Default value: `FlattenOptions::DEFAULT_CURVE_SEGMENTS`.
    pub curve_segments: usize,

    /// Number of line segments for full ellipses and circles.
    ///
    /// Default value: `FlattenOptions::DEFAULT_ELLIPSE_SEGMENTS`.
    pub ellipse_segments: usize,
}

impl FlattenOptions {
    pub const DEFAULT_CURVE_SEGMENTS: usize = 10;
    pub const DEFAULT_ELLIPSE_SEGMENTS: usize = 20;

    pub const DEFAULT: Self = FlattenOptions {
        curve_segments: Self::DEFAULT_CURVE_SEGMENTS,
        ellipse_segments: Self::DEFAULT_ELLIPSE_SEGMENTS,
    };

    #[inline]
    pub const fn with_curve_segments(mut self, segments: usize) -> Self {
        self.curve_segments = segments;
        self
    }

    #[inline]
    pub const fn with_ellipse_segments(mut self, segments: usize) -> Self {
        self.ellipse_segments = segments;
        self
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses and flattens a path string.
pub fn flatten_path(src: &str, options: &FlattenOptions) -> Result<Polyline, ArcError> {
    interpret(&parse_commands(src), options)
}

/// Replays the commands, producing one polyline.
///
/// Curves are flattened with `options.curve_segments` segments. The polyline is closed if
/// any close-path command was encountered.
///
/// Arcs with coincident endpoints produce nothing and arcs with a zero radius produce a
/// straight line, the only error is an arc that no ellipse of its radii can realize.
pub fn interpret(commands: &[PathCommand], options: &FlattenOptions) -> Result<Polyline, ArcError> {
    let state = commands
        .iter()
        .try_fold(FlattenState::new(), |mut state, cmd| {
            state.apply(cmd, options)?;
            Ok(state)
        })?;

    Ok(state.into_polyline())
}

struct FlattenState {
    output: Vec<Point>,
    current: Point,
    last_ctrl: Point,
    subpath_start: Point,
    closed: bool,
}

impl FlattenState {
    fn new() -> Self {
        FlattenState {
            output: Vec::new(),
            current: Point::origin(),
            last_ctrl: Point::origin(),
            subpath_start: Point::origin(),
            closed: false,
        }
    }

    fn into_polyline(self) -> Polyline {
        Polyline {
            points: self.output,
            closed: self.closed,
        }
    }

    fn resolve(&self, abs: bool, p: Point) -> Point {
        if abs {
            p
        } else {
            self.current + p.to_vector()
        }
    }

    fn reflected_ctrl(&self) -> Point {
        reflect_point(self.last_ctrl, self.current)
    }

    fn apply(&mut self, cmd: &PathCommand, options: &FlattenOptions) -> Result<(), ArcError> {
        let segments = options.curve_segments;

        match *cmd {
            PathCommand::MoveTo { abs, to } => {
                let to = self.resolve(abs, to);
                self.subpath_start = to;
                self.line_to(to);
            }
            PathCommand::LineTo { abs, to } => {
                let to = self.resolve(abs, to);
                self.line_to(to);
            }
            PathCommand::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { self.current.x + x };
                self.line_to(point(x, self.current.y));
            }
            PathCommand::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { self.current.y + y };
                self.line_to(point(self.current.x, y));
            }
            PathCommand::QuadraticTo { abs, ctrl, to } => {
                let curve = QuadraticBezierSegment {
                    from: self.current,
                    ctrl: self.resolve(abs, ctrl),
                    to: self.resolve(abs, to),
                };
                self.curve_to(curve.flattened(segments), curve.to);
            }
            PathCommand::SmoothQuadraticTo { abs, to } => {
                let curve = QuadraticBezierSegment {
                    from: self.current,
                    ctrl: self.reflected_ctrl(),
                    to: self.resolve(abs, to),
                };
                self.curve_to(curve.flattened(segments), curve.to);
            }
            PathCommand::CubicTo {
                abs,
                ctrl1,
                ctrl2,
                to,
            } => {
                let curve = CubicBezierSegment {
                    from: self.current,
                    ctrl1: self.resolve(abs, ctrl1),
                    ctrl2: self.resolve(abs, ctrl2),
                    to: self.resolve(abs, to),
                };
                self.curve_to(curve.flattened(segments), curve.to);
            }
            PathCommand::SmoothCubicTo { abs, ctrl2, to } => {
                let curve = CubicBezierSegment {
                    from: self.current,
                    ctrl1: self.reflected_ctrl(),
                    ctrl2: self.resolve(abs, ctrl2),
                    to: self.resolve(abs, to),
                };
                self.curve_to(curve.flattened(segments), curve.to);
            }
            PathCommand::ArcTo {
                abs,
                radii,
                x_rotation,
                flags,
                to,
            } => {
                let to = self.resolve(abs, to);
                self.arc_to(radii, x_rotation, flags, to, segments)?;
            }
            PathCommand::ClosePath => {
                self.closed = true;
                self.current = self.subpath_start;
            }
        }

        Ok(())
    }

    fn line_to(&mut self, to: Point) {
        self.output.push(to);
        self.current = to;
    }

    // The first flattened point is the current point, which is already in the output. The
    // last one is replaced with the exact endpoint.
    fn curve_to(&mut self, mut points: Vec<Point>, to: Point) {
        if points.len() >= 2 {
            self.last_ctrl = points[points.len() - 2];
        }
        if let Some(last) = points.last_mut() {
            *last = to;
        }

        self.output.extend(points.into_iter().skip(1));
        self.current = to;
    }

    fn arc_to(
        &mut self,
        radii: Vector,
        x_rotation: f64,
        flags: ArcFlags,
        to: Point,
        segments: usize,
    ) -> Result<(), ArcError> {
        let arc = SvgArc {
            from: self.current,
            to,
            radii,
            x_rotation: Angle::degrees(x_rotation),
            flags,
        };

        match arc.flattened(segments) {
            Ok(points) => self.curve_to(points, to),
            Err(ArcError::CoincidentEndpoints) => {}
            Err(ArcError::ZeroRadius) => self.line_to(to),
            Err(e) => return Err(e),
        }

        Ok(())
    }
}

#[cfg(test)]
use crate::geom::utils::fuzzy_eq_point;

#[test]
fn closed_square() {
    let polyline = flatten_path("M0,0 L10,0 L10,10 Z", &FlattenOptions::DEFAULT).unwrap();
    assert!(polyline.closed);
    assert_eq!(
        polyline.points,
        vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)]
    );

    let open = flatten_path("M0,0 L10,0 L10,10", &FlattenOptions::DEFAULT).unwrap();
    assert!(!open.closed);
}

#[test]
fn relative_lines() {
    let polyline = flatten_path("m 5 5 l 10 0 v 10 h -10 z", &FlattenOptions::DEFAULT).unwrap();
    assert_eq!(
        polyline.points,
        vec![
            point(5.0, 5.0),
            point(15.0, 5.0),
            point(15.0, 15.0),
            point(5.0, 15.0)
        ]
    );
}

#[test]
fn horizontal_and_vertical_keep_the_other_coordinate() {
    let polyline = flatten_path("M 3 4 H 10 V 20", &FlattenOptions::DEFAULT).unwrap();
    assert_eq!(
        polyline.points,
        vec![point(3.0, 4.0), point(10.0, 4.0), point(10.0, 20.0)]
    );
}

#[test]
fn curves_drop_their_first_point() {
    let options = FlattenOptions::DEFAULT.with_curve_segments(4);

    let polyline = flatten_path("M0 0 Q 5 10 10 0", &options).unwrap();
    assert_eq!(polyline.points.len(), 5);
    assert_eq!(polyline.points[0], point(0.0, 0.0));
    assert_eq!(polyline.points[4], point(10.0, 0.0));

    let polyline = flatten_path("M0 0 c 0 10 10 10 10 0", &options).unwrap();
    assert_eq!(polyline.points.len(), 5);
    assert_eq!(polyline.points[4], point(10.0, 0.0));
}

#[test]
fn smooth_curves_reflect_the_last_control_point() {
    let options = FlattenOptions::DEFAULT.with_curve_segments(2);

    // With two segments the second to last flattened point of the first curve is its
    // midpoint (5, 5), reflected through (10, 0) it gives (15, -5).
    let smooth = flatten_path("M0 0 Q 5 10 10 0 T 20 0", &options).unwrap();
    let explicit = flatten_path("M0 0 Q 5 10 10 0 Q 15 -5 20 0", &options).unwrap();
    assert_eq!(smooth.points.len(), 5);
    for (a, b) in smooth.points.iter().zip(explicit.points.iter()) {
        assert!(fuzzy_eq_point(*a, *b));
    }

    let smooth = flatten_path("M0 0 C 0 10 10 10 10 0 S 20 -10 20 0", &options).unwrap();
    let explicit =
        flatten_path("M0 0 C 0 10 10 10 10 0 C 15 -7.5 20 -10 20 0", &options).unwrap();
    for (a, b) in smooth.points.iter().zip(explicit.points.iter()) {
        assert!(fuzzy_eq_point(*a, *b));
    }
}

#[test]
fn arcs() {
    let options = FlattenOptions::DEFAULT.with_curve_segments(8);

    let polyline = flatten_path("M0 0 A 5 5 0 0 1 10 0", &options).unwrap();
    assert_eq!(polyline.points.len(), 9);
    assert_eq!(polyline.points[8], point(10.0, 0.0));
    assert!(fuzzy_eq_point(polyline.points[4], point(5.0, -5.0)));

    // Coincident endpoints produce nothing, a zero radius produces a line.
    let polyline = flatten_path("M0 0 A 5 5 0 0 1 0 0 A 0 5 0 0 1 10 0", &options).unwrap();
    assert_eq!(polyline.points, vec![point(0.0, 0.0), point(10.0, 0.0)]);

    let result = flatten_path("M0 0 A 1 1 0 0 1 10 0", &options);
    assert!(matches!(result, Err(ArcError::Unrealizable { .. })));
}

#[test]
fn close_path_returns_to_the_subpath_start() {
    let polyline = flatten_path("M 1 1 L 5 1 L 5 5 Z l 1 0", &FlattenOptions::DEFAULT).unwrap();
    assert_eq!(polyline.points.last(), Some(&point(2.0, 1.0)));
}
