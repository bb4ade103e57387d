use crate::algorithms::impulse::{slash_impulse, Impulse, ImpulseOptions};
use crate::algorithms::winding::to_clockwise;
use crate::geom::utils::fuzzy_eq_point;
use crate::geom::{Line, Triangle};
use crate::math::Point;
use crate::path::Polygon;
use crate::tessellation::{Triangulator, TriangulationError};

use log::debug;

/// A piece of a shape, ready to become a rigid body.
///
/// The polygon is wound clockwise and the triangles cover it.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    polygon: Polygon,
    triangles: Vec<Triangle>,
    centroid: Point,
    impulse: Option<Impulse>,
}

impl Fragment {
    /// Creates a fragment from a polygon, triangulating it.
    pub fn new(polygon: &Polygon) -> Result<Self, TriangulationError> {
        Fragment::with_triangulator(polygon, &mut Triangulator::new())
    }

    fn with_triangulator(
        polygon: &Polygon,
        triangulator: &mut Triangulator,
    ) -> Result<Self, TriangulationError> {
        let polygon = to_clockwise(polygon);
        let triangles = triangulator.triangulate(&polygon)?;
        let centroid = polygon.centroid();

        Ok(Fragment {
            polygon,
            triangles,
            centroid,
            impulse: None,
        })
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Mean of the polygon's vertices.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// The push received when this fragment was cut off from its parent, if any.
    #[inline]
    pub fn impulse(&self) -> Option<&Impulse> {
        self.impulse.as_ref()
    }

    /// Cuts the fragment along the line through `p0` and `p1`.
    ///
    /// When the cut produces several pieces, each of them gets an impulse pushing it away
    /// from the line, `jitter` being called once per piece. Otherwise the result is a copy
    /// of this fragment, without impulse.
    pub fn slash(
        &self,
        p0: Point,
        p1: Point,
        options: &ImpulseOptions,
        mut jitter: impl FnMut() -> f64,
    ) -> Result<Vec<Fragment>, TriangulationError> {
        if fuzzy_eq_point(p0, p1) {
            return Ok(vec![self.without_impulse()]);
        }

        let line = Line::through(p0, p1);
        let pieces = crate::algorithms::slice::slice(&self.polygon, &line);
        if pieces.len() < 2 {
            return Ok(vec![self.without_impulse()]);
        }

        debug!("Slashed a fragment into {} pieces.", pieces.len());

        let mut triangulator = Triangulator::new();
        pieces
            .iter()
            .map(|piece| -> Result<Fragment, TriangulationError> {
                let mut fragment = Fragment::with_triangulator(piece, &mut triangulator)?;
                fragment.impulse = slash_impulse(&fragment.polygon, &line, jitter(), options);
                Ok(fragment)
            })
            .collect()
    }

    fn without_impulse(&self) -> Fragment {
        Fragment {
            impulse: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
use crate::algorithms::area::area;
#[cfg(test)]
use crate::geom::EPSILON;
#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn square() -> Polygon {
    Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ])
}

#[test]
fn new_fragment() {
    let fragment = Fragment::new(&square().reversed()).unwrap();

    assert_eq!(fragment.polygon(), &square());
    assert_eq!(fragment.triangles().len(), 2);
    assert_eq!(fragment.centroid(), point(5.0, 5.0));
    assert!(fragment.impulse().is_none());
}

#[test]
fn slash_in_halves() {
    let fragment = Fragment::new(&square()).unwrap();
    let pieces = fragment
        .slash(point(5.0, -5.0), point(5.0, 15.0), &ImpulseOptions::DEFAULT, || 0.5)
        .unwrap();

    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert!((area(piece.polygon(), true) - 50.0).abs() < EPSILON);
        assert_eq!(piece.triangles().len(), 2);

        // Pushed away from the line, on the side of its centroid.
        let impulse = piece.impulse().unwrap();
        assert!((impulse.at.x - 5.0).abs() < EPSILON);
        assert!(impulse.force.x * (piece.centroid().x - 5.0) > 0.0);
    }
}

#[test]
fn slash_that_misses() {
    let fragment = Fragment::new(&square()).unwrap();
    let mut calls = 0;
    let pieces = fragment
        .slash(point(20.0, 0.0), point(20.0, 10.0), &ImpulseOptions::DEFAULT, || {
            calls += 1;
            0.5
        })
        .unwrap();

    assert_eq!(pieces, vec![fragment]);
    assert_eq!(calls, 0);
}
