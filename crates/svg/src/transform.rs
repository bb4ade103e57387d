//! Chains of SVG transforms, such as `translate(10, 20) rotate(45)`.
//!
//! Transforms apply left to right: each one is applied to the result of the previous
//! ones. Each transform is tokenized by `svgtypes`; unknown and malformed ones are skipped.

use crate::math::{point, vector, Angle, Point, Transform};
use log::warn;
use svgtypes::{TransformListParser, TransformListToken};

/// One transform of a chain. Angles are in degrees, as written in SVG.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum TransformOp {
    /// `[a b c d e f]`, mapping `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
    Matrix([f64; 6]),
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    /// Rotation around `pivot`, or around the origin.
    Rotate { degrees: f64, pivot: Option<Point> },
    SkewX { degrees: f64 },
    SkewY { degrees: f64 },
}

impl TransformOp {
    pub fn to_transform(&self) -> Transform {
        match *self {
            TransformOp::Matrix([a, b, c, d, e, f]) => Transform::new(a, b, c, d, e, f),
            TransformOp::Translate { tx, ty } => Transform::translation(tx, ty),
            TransformOp::Scale { sx, sy } => Transform::scale(sx, sy),
            TransformOp::Rotate { degrees, pivot } => {
                let rotation = Transform::rotation(Angle::degrees(degrees));
                match pivot {
                    Some(c) => Transform::translation(-c.x, -c.y)
                        .then(&rotation)
                        .then_translate(vector(c.x, c.y)),
                    None => rotation,
                }
            }
            TransformOp::SkewX { degrees } => {
                Transform::new(1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0)
            }
            TransformOp::SkewY { degrees } => {
                Transform::new(1.0, degrees.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
            }
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.to_transform().transform_point(p)
    }
}

impl From<TransformListToken> for TransformOp {
    fn from(token: TransformListToken) -> Self {
        match token {
            TransformListToken::Matrix { a, b, c, d, e, f } => TransformOp::Matrix([a, b, c, d, e, f]),
            TransformListToken::Translate { tx, ty } => TransformOp::Translate { tx, ty },
            TransformListToken::Scale { sx, sy } => TransformOp::Scale { sx, sy },
            TransformListToken::Rotate { angle } => TransformOp::Rotate {
                degrees: angle,
                pivot: None,
            },
            TransformListToken::SkewX { angle } => TransformOp::SkewX { degrees: angle },
            TransformListToken::SkewY { angle } => TransformOp::SkewY { degrees: angle },
        }
    }
}

/// Parses a transform chain.
///
/// Unknown or malformed transforms are left out, the ones around them are kept.
pub fn parse_transform_chain(src: &str) -> Vec<TransformOp> {
    let mut ops = Vec::new();
    for item in src.split_inclusive(')') {
        let item = item.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if item.is_empty() {
            continue;
        }

        match TransformListParser::from(item).collect::<Result<Vec<_>, _>>() {
            Ok(tokens) => ops.extend(item_to_op(tokens)),
            Err(e) => warn!("Ignoring transform {:?}: {}.", item, e),
        }
    }

    ops
}

// svgtypes splits `rotate(a cx cy)` into translate, rotate and translate back, in SVG's
// right to left order. The chain applies left to right, so it is folded back into a
// single rotation around the center.
fn item_to_op(tokens: Vec<TransformListToken>) -> Option<TransformOp> {
    let mut tokens = tokens.into_iter();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(token), None, None, None) => Some(TransformOp::from(token)),
        (
            Some(TransformListToken::Translate { tx, ty }),
            Some(TransformListToken::Rotate { angle }),
            Some(TransformListToken::Translate { .. }),
            None,
        ) => Some(TransformOp::Rotate {
            degrees: angle,
            pivot: Some(point(tx, ty)),
        }),
        _ => None,
    }
}

/// Composes the chain into a single transform, the first operation applied first.
pub fn chain_to_transform(ops: &[TransformOp]) -> Transform {
    ops.iter()
        .fold(Transform::identity(), |acc, op| acc.then(&op.to_transform()))
}

/// Parses `src` and applies the chain to every point.
pub fn apply_transform_chain(src: &str, points: Vec<Point>) -> Vec<Point> {
    let ops = parse_transform_chain(src);
    if ops.is_empty() {
        return points;
    }

    let transform = chain_to_transform(&ops);
    points
        .into_iter()
        .map(|p| transform.transform_point(p))
        .collect()
}

#[cfg(test)]
use crate::path::geom::utils::fuzzy_eq_point;

#[test]
fn parse_chain() {
    let ops = parse_transform_chain("translate(10) scale(2, 3) rotate(90) skewX(45) matrix(1 0 0 1 5 6)");
    assert_eq!(
        ops,
        vec![
            TransformOp::Translate { tx: 10.0, ty: 0.0 },
            TransformOp::Scale { sx: 2.0, sy: 3.0 },
            TransformOp::Rotate {
                degrees: 90.0,
                pivot: None
            },
            TransformOp::SkewX { degrees: 45.0 },
            TransformOp::Matrix([1.0, 0.0, 0.0, 1.0, 5.0, 6.0]),
        ]
    );

    assert_eq!(
        parse_transform_chain("scale(2)"),
        vec![TransformOp::Scale { sx: 2.0, sy: 2.0 }]
    );
}

#[test]
fn rotation_around_a_center() {
    let ops = parse_transform_chain("rotate(180 1 1) translate(1)");
    assert_eq!(
        ops,
        vec![
            TransformOp::Rotate {
                degrees: 180.0,
                pivot: Some(point(1.0, 1.0))
            },
            TransformOp::Translate { tx: 1.0, ty: 0.0 },
        ]
    );

    let points = apply_transform_chain("rotate(180 1 1) translate(1)", vec![point(2.0, 1.0)]);
    assert!(fuzzy_eq_point(points[0], point(1.0, 1.0)));
}

#[test]
fn unknown_and_malformed_transforms_are_ignored() {
    let ops = parse_transform_chain("translate(1, 2) perspective(3) rotate(1, 2), scale(2) scale(4");
    assert_eq!(
        ops,
        vec![
            TransformOp::Translate { tx: 1.0, ty: 2.0 },
            TransformOp::Scale { sx: 2.0, sy: 2.0 },
        ]
    );

    assert!(parse_transform_chain("scale(2").is_empty());
    assert!(parse_transform_chain("matrix(1 0 0 1 a 0)").is_empty());
    assert!(parse_transform_chain("").is_empty());
}

#[test]
fn matrix() {
    let p = TransformOp::Matrix([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).apply(point(1.0, 1.0));
    // x' = a·x + c·y + e, y' = b·x + d·y + f
    assert!(fuzzy_eq_point(p, point(9.0, 12.0)));
}

#[test]
fn rotation_and_skew() {
    let p = TransformOp::Rotate {
        degrees: 90.0,
        pivot: None,
    }
    .apply(point(1.0, 0.0));
    assert!(fuzzy_eq_point(p, point(0.0, 1.0)));

    let p = TransformOp::Rotate {
        degrees: 180.0,
        pivot: Some(point(1.0, 1.0)),
    }
    .apply(point(2.0, 1.0));
    assert!(fuzzy_eq_point(p, point(0.0, 1.0)));

    let p = TransformOp::SkewX { degrees: 45.0 }.apply(point(1.0, 2.0));
    assert!(fuzzy_eq_point(p, point(3.0, 2.0)));

    let p = TransformOp::SkewY { degrees: 45.0 }.apply(point(1.0, 2.0));
    assert!(fuzzy_eq_point(p, point(1.0, 3.0)));
}

#[test]
fn chain_applies_left_to_right() {
    let points = apply_transform_chain("translate(10, 0) scale(2)", vec![point(1.0, 1.0)]);
    assert!(fuzzy_eq_point(points[0], point(22.0, 2.0)));

    let points = apply_transform_chain("scale(2) translate(10, 0)", vec![point(1.0, 1.0)]);
    assert!(fuzzy_eq_point(points[0], point(12.0, 2.0)));

    let untouched = apply_transform_chain("bogus(1)", vec![point(1.0, 1.0)]);
    assert_eq!(untouched, vec![point(1.0, 1.0)]);
}
