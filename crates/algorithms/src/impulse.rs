//! The push given to a piece after it has been cut off.

use crate::geom::utils::unit_vector;
use crate::geom::Line;
use crate::math::{Point, Vector};
use crate::path::Polygon;

/// Parameters for `slash_impulse`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ImpulseOptions {
    /// Multiplies the whole force.
    ///
    /// Default value: `ImpulseOptions::DEFAULT_POWER`.
    pub power: f64,
}

impl ImpulseOptions {
    pub const DEFAULT_POWER: f64 = 1.0;

    pub const DEFAULT: Self = ImpulseOptions {
        power: Self::DEFAULT_POWER,
    };

    #[inline]
    pub const fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }
}

impl Default for ImpulseOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A force and the point it applies to.
///
/// The force is per unit of mass, scaling it is left to whoever simulates the bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Impulse {
    pub at: Point,
    pub force: Vector,
}

/// Computes the push for a piece cut along `line`.
///
/// The force has a small component along the cut and a larger one pushing the piece away
/// from the line, through its centroid. It applies at the foot of the perpendicular from
/// the centroid to the line. `jitter` (usually random, in `[0, 1]`) varies the strength.
///
/// Returns `None` when the line has no direction or goes through the centroid.
pub fn slash_impulse(polygon: &Polygon, line: &Line, jitter: f64, options: &ImpulseOptions) -> Option<Impulse> {
    let centroid = polygon.centroid();
    let foot = line.foot_of_perpendicular(centroid);

    let along = unit_vector(line.vector).ok()?;
    let away = unit_vector(centroid - foot).ok()?;

    let force = along * (0.00002 + 0.0002 * jitter) + away * (0.0002 + 0.002 * jitter);

    Some(Impulse {
        at: foot,
        force: force * options.power,
    })
}

#[cfg(test)]
use crate::geom::EPSILON;
#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn push_away_from_the_cut() {
    // Right half of a square cut at x = 5, the centroid is at (7.5, 5).
    let piece = Polygon::new(vec![
        point(5.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(5.0, 10.0),
    ]);
    let line = Line::through(point(5.0, -5.0), point(5.0, 15.0));

    let impulse = slash_impulse(&piece, &line, 0.0, &ImpulseOptions::DEFAULT).unwrap();
    assert!((impulse.at - point(5.0, 5.0)).length() < EPSILON);
    assert!((impulse.force - vector(0.0002, 0.00002)).length() < EPSILON * EPSILON);

    let stronger = slash_impulse(&piece, &line, 1.0, &ImpulseOptions::DEFAULT.with_power(2.0)).unwrap();
    assert!((stronger.force - vector(0.0044, 0.00044)).length() < EPSILON * EPSILON);
}

#[test]
fn degenerate_cuts_give_no_impulse() {
    let piece = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ]);

    let through_centroid = Line::through(point(0.0, 0.0), point(10.0, 10.0));
    assert_eq!(slash_impulse(&piece, &through_centroid, 0.5, &ImpulseOptions::DEFAULT), None);

    let no_direction = Line::through(point(20.0, 0.0), point(20.0, 0.0));
    assert_eq!(slash_impulse(&piece, &no_direction, 0.5, &ImpulseOptions::DEFAULT), None);
}
