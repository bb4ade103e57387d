//! The path command mini-language.

use crate::geom::ArcFlags;
use crate::math::{point, vector, Point, Vector};

/// One command of an SVG path `d` attribute.
///
/// `abs` tells whether the coordinates are absolute or relative to the current point.
/// Arc rotations are expressed in degrees, as written in the source text.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo {
        abs: bool,
        to: Point,
    },
    LineTo {
        abs: bool,
        to: Point,
    },
    HorizontalLineTo {
        abs: bool,
        x: f64,
    },
    VerticalLineTo {
        abs: bool,
        y: f64,
    },
    QuadraticTo {
        abs: bool,
        ctrl: Point,
        to: Point,
    },
    SmoothQuadraticTo {
        abs: bool,
        to: Point,
    },
    CubicTo {
        abs: bool,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    SmoothCubicTo {
        abs: bool,
        ctrl2: Point,
        to: Point,
    },
    ArcTo {
        abs: bool,
        radii: Vector,
        x_rotation: f64,
        flags: ArcFlags,
        to: Point,
    },
    ClosePath,
}

/// Number of operands following a command letter, `None` if the letter is not a command.
pub fn operand_count(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'Z' => Some(0),
        'H' | 'V' => Some(1),
        'M' | 'L' | 'T' => Some(2),
        'Q' | 'S' => Some(4),
        'C' => Some(6),
        'A' => Some(7),
        _ => None,
    }
}

impl PathCommand {
    /// Builds a command out of its letter and operands.
    ///
    /// Returns `None` if the letter is unknown or the operand count doesn't match.
    pub fn from_operands(letter: char, operands: &[f64]) -> Option<Self> {
        if operand_count(letter) != Some(operands.len()) {
            return None;
        }

        let abs = letter.is_ascii_uppercase();
        let o = operands;
        let cmd = match letter.to_ascii_uppercase() {
            'M' => PathCommand::MoveTo {
                abs,
                to: point(o[0], o[1]),
            },
            'L' => PathCommand::LineTo {
                abs,
                to: point(o[0], o[1]),
            },
            'H' => PathCommand::HorizontalLineTo { abs, x: o[0] },
            'V' => PathCommand::VerticalLineTo { abs, y: o[0] },
            'Q' => PathCommand::QuadraticTo {
                abs,
                ctrl: point(o[0], o[1]),
                to: point(o[2], o[3]),
            },
            'T' => PathCommand::SmoothQuadraticTo {
                abs,
                to: point(o[0], o[1]),
            },
            'C' => PathCommand::CubicTo {
                abs,
                ctrl1: point(o[0], o[1]),
                ctrl2: point(o[2], o[3]),
                to: point(o[4], o[5]),
            },
            'S' => PathCommand::SmoothCubicTo {
                abs,
                ctrl2: point(o[0], o[1]),
                to: point(o[2], o[3]),
            },
            'A' => PathCommand::ArcTo {
                abs,
                radii: vector(o[0], o[1]),
                x_rotation: o[2],
                flags: ArcFlags {
                    large_arc: o[3] != 0.0,
                    sweep: o[4] != 0.0,
                },
                to: point(o[5], o[6]),
            },
            _ => PathCommand::ClosePath,
        };

        Some(cmd)
    }

    /// The SVG letter of this command, lower case for relative commands.
    pub fn letter(&self) -> char {
        let (upper, abs) = match *self {
            PathCommand::MoveTo { abs, .. } => ('M', abs),
            PathCommand::LineTo { abs, .. } => ('L', abs),
            PathCommand::HorizontalLineTo { abs, .. } => ('H', abs),
            PathCommand::VerticalLineTo { abs, .. } => ('V', abs),
            PathCommand::QuadraticTo { abs, .. } => ('Q', abs),
            PathCommand::SmoothQuadraticTo { abs, .. } => ('T', abs),
            PathCommand::CubicTo { abs, .. } => ('C', abs),
            PathCommand::SmoothCubicTo { abs, .. } => ('S', abs),
            PathCommand::ArcTo { abs, .. } => ('A', abs),
            PathCommand::ClosePath => ('Z', true),
        };

        if abs {
            upper
        } else {
            upper.to_ascii_lowercase()
        }
    }

    /// Whether the command produces a curve rather than a straight segment.
    pub fn is_curve(&self) -> bool {
        match self {
            PathCommand::QuadraticTo { .. }
            | PathCommand::SmoothQuadraticTo { .. }
            | PathCommand::CubicTo { .. }
            | PathCommand::SmoothCubicTo { .. }
            | PathCommand::ArcTo { .. } => true,
            _ => false,
        }
    }
}

#[test]
fn operand_counts() {
    assert_eq!(operand_count('z'), Some(0));
    assert_eq!(operand_count('h'), Some(1));
    assert_eq!(operand_count('T'), Some(2));
    assert_eq!(operand_count('s'), Some(4));
    assert_eq!(operand_count('C'), Some(6));
    assert_eq!(operand_count('a'), Some(7));
    assert_eq!(operand_count('x'), None);
    assert_eq!(operand_count('B'), None);
}

#[test]
fn build_commands() {
    let cmd = PathCommand::from_operands('a', &[5.0, 4.0, 30.0, 1.0, 0.0, 10.0, 0.0]).unwrap();
    assert_eq!(
        cmd,
        PathCommand::ArcTo {
            abs: false,
            radii: vector(5.0, 4.0),
            x_rotation: 30.0,
            flags: ArcFlags {
                large_arc: true,
                sweep: false,
            },
            to: point(10.0, 0.0),
        }
    );
    assert_eq!(cmd.letter(), 'a');
    assert!(cmd.is_curve());

    assert_eq!(PathCommand::from_operands('L', &[1.0]), None);
    assert_eq!(PathCommand::from_operands('Z', &[]), Some(PathCommand::ClosePath));
    assert_eq!(PathCommand::ClosePath.letter(), 'Z');
}
