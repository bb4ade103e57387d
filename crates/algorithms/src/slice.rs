//! Cutting polygons with an infinite line.
//!
//! Each step inserts the line's crossings into the polygon's ring, picks one pair of
//! crossings bounding a piece of the line that runs inside the polygon, and splits the
//! ring in two along it. The pieces are split again until no valid pair remains, so that
//! a concave polygon crossed several times by the line comes out in as many pieces.
//!
//! A vertex lying on the line counts as many crossings as there are directions along the
//! line that enter the polygon from it: one where the boundary crosses the line, none
//! where a convex corner only touches it, and two where a reflex corner touches it.

use crate::geom::utils::{fuzzy_eq_point, mid_point};
use crate::geom::{Line, EPSILON};
use crate::math::{Point, Vector};
use crate::path::Polygon;
use crate::winding::to_clockwise;

use log::debug;

/// Parameters for `slice_with_options`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct SliceOptions {
    /// Maximum number of splits performed for one call.
    ///
    /// Default value: `None`, meaning the number of edges of the input polygon.
    pub max_splits: Option<usize>,
}

impl SliceOptions {
    pub const DEFAULT: Self = SliceOptions { max_splits: None };

    #[inline]
    pub const fn with_max_splits(mut self, max_splits: usize) -> Self {
        self.max_splits = Some(max_splits);
        self
    }
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cuts the polygon along the line.
///
/// Returns the polygon unchanged, as the only element, when the line does not split it.
/// Otherwise returns the pieces, wound clockwise, with their areas summing up to the area
/// of the input.
pub fn slice(polygon: &Polygon, line: &Line) -> Vec<Polygon> {
    slice_with_options(polygon, line, &SliceOptions::DEFAULT)
}

/// Same as `slice`, with a configurable split budget.
pub fn slice_with_options(polygon: &Polygon, line: &Line, options: &SliceOptions) -> Vec<Polygon> {
    if !line.is_valid() || polygon.is_degenerate() {
        return vec![polygon.clone()];
    }

    let mut budget = options.max_splits.unwrap_or_else(|| polygon.len());
    let mut split = false;
    let mut pending = vec![to_clockwise(polygon)];
    let mut output = Vec::new();

    while let Some(current) = pending.pop() {
        if budget == 0 {
            debug!("Split budget exhausted, keeping a piece of {} points.", current.len());
            output.push(current);
            continue;
        }

        match slice_once(&current, line) {
            Some((a, b)) => {
                budget -= 1;
                split = true;
                pending.extend(
                    vec![a, b]
                        .into_iter()
                        .map(Polygon::new)
                        .filter(|piece| !piece.is_degenerate()),
                );
            }
            None => output.push(current),
        }
    }

    if !split {
        return vec![polygon.clone()];
    }

    debug!("Sliced a polygon into {} pieces.", output.len());

    output
}

// Splits the polygon once, returning the point lists of both pieces.
fn slice_once(polygon: &Polygon, line: &Line) -> Option<(Vec<Point>, Vec<Point>)> {
    let (points, mut crossings) = insert_crossings(polygon, line);

    if crossings.is_empty() {
        return None;
    }
    if crossings.len() % 2 == 1 {
        debug!("Odd number of crossings ({}), not splitting.", crossings.len());
        return None;
    }

    crossings.sort_by(|a, b| {
        let a = line.projection(points[*a]);
        let b = line.projection(points[*b]);
        a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
    });

    let n = points.len();
    let (low, high) = crossings
        .chunks_exact(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .find(|&(low, high)| {
            let along_edge = high == low + 1 || (low == 0 && high == n - 1);
            !along_edge
                && !fuzzy_eq_point(points[low], points[high])
                && is_inside(&points, mid_point(points[low], points[high]))
        })?;

    debug!(
        "Splitting {} points at {} and {} ({} crossings).",
        n,
        low,
        high,
        crossings.len()
    );

    let mut first = points[..=low].to_vec();
    first.extend_from_slice(&points[high..]);
    let second = points[low..=high].to_vec();

    Some((first, second))
}

// The ring with the crossing points inserted, and the positions of the crossings in it.
// A vertex on the line appears once per interior direction, so the count stays even.
fn insert_crossings(polygon: &Polygon, line: &Line) -> (Vec<Point>, Vec<usize>) {
    let mut points = Vec::with_capacity(polygon.len() + 4);
    let mut crossings = Vec::new();

    for (idx, edge) in polygon.edges().enumerate() {
        points.push(edge.from);

        if line.contains(edge.from) {
            let vertex = points.len() - 1;
            for _ in 0..interior_directions(polygon, idx, line) {
                crossings.push(vertex);
            }
            continue;
        }

        // Endpoints on the line are handled as vertices.
        match edge.line_intersection(line) {
            Some(p) if !fuzzy_eq_point(p, edge.to) => {
                points.push(p);
                crossings.push(points.len() - 1);
            }
            _ => {}
        }
    }

    (points, crossings)
}

// How many of the two directions of the line point into the interior at vertex `idx`.
// Expects a clockwise polygon.
fn interior_directions(polygon: &Polygon, idx: usize, line: &Line) -> usize {
    let points = polygon.points();
    let vertex = points[idx];
    let to_prev = (points[polygon.prev_index(idx)] - vertex).normalize();
    let to_next = (points[polygon.next_index(idx)] - vertex).normalize();
    let direction = line.vector.normalize();
    let convex = sine(-to_prev, to_next) >= 0.0;

    [direction, -direction]
        .iter()
        .filter(|&&d| {
            if convex {
                sine(to_next, d) > 0.0 && sine(d, to_prev) > 0.0
            } else {
                !(sine(to_prev, d) >= 0.0 && sine(d, to_next) >= 0.0)
            }
        })
        .count()
}

// Cross product of unit vectors, snapped to zero for (anti)parallel ones.
fn sine(a: Vector, b: Vector) -> f64 {
    let s = a.cross(b);
    if s.abs() < EPSILON {
        0.0
    } else {
        s
    }
}

// Crossing number test with half-open edges, so that a ray through a vertex counts once.
fn is_inside(points: &[Point], p: Point) -> bool {
    let n = points.len();
    let mut inside = false;
    for idx in 0..n {
        let a = points[idx];
        let b = points[(idx + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x > p.x {
                inside = !inside;
            }
        }
    }

    inside
}

#[cfg(test)]
use crate::area::area;
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

#[cfg(test)]
fn sorted_areas(pieces: &[Polygon]) -> Vec<f64> {
    let mut areas: Vec<f64> = pieces.iter().map(|p| area(p, false)).collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    areas
}

#[test]
fn square_in_halves() {
    let line = Line::through(point(5.0, -5.0), point(5.0, 15.0));
    let pieces = slice(&square(), &line);

    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert!((area(piece, true) - 50.0).abs() < EPSILON);
        assert_eq!(piece.len(), 4);
    }
}

#[test]
fn diagonal_through_vertices() {
    let line = Line::through(point(0.0, 0.0), point(10.0, 10.0));
    let pieces = slice(&square(), &line);

    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert_eq!(piece.len(), 3);
        assert!((area(piece, false) - 50.0).abs() < EPSILON);
    }
}

#[test]
fn lines_that_do_not_split() {
    let square = square();

    let outside = Line::through(point(20.0, 0.0), point(20.0, 10.0));
    assert_eq!(slice(&square, &outside), vec![square.clone()]);

    let along_edge = Line::through(point(-5.0, 0.0), point(15.0, 0.0));
    assert_eq!(slice(&square, &along_edge), vec![square.clone()]);

    // Only touches the corner at (10, 0).
    let touching = Line::through(point(10.0, 0.0), point(20.0, 10.0));
    assert_eq!(slice(&square, &touching), vec![square.clone()]);

    let invalid = Line::through(point(5.0, 5.0), point(5.0, 5.0));
    assert_eq!(slice(&square, &invalid), vec![square.clone()]);

    // Unchanged means not even re-wound.
    let reversed = square.reversed();
    assert_eq!(slice(&reversed, &outside), vec![reversed.clone()]);
}

#[test]
fn concave_polygon_in_three_pieces() {
    // A U shape, the notch opening towards y = 0.
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
    let line = Line::through(point(-5.0, 3.0), point(15.0, 3.0));
    let pieces = slice(&polygon, &line);

    assert_eq!(pieces.len(), 3);
    let areas = sorted_areas(&pieces);
    assert!((areas[0] - 9.0).abs() < EPSILON);
    assert!((areas[1] - 9.0).abs() < EPSILON);
    assert!((areas[2] - 54.0).abs() < EPSILON);
    assert!((areas.iter().sum::<f64>() - area(&polygon, false)).abs() < EPSILON);

    // The same shape wound the other way gives the same pieces.
    let pieces = slice(&polygon.reversed(), &line);
    assert_eq!(sorted_areas(&pieces), areas);
}

#[test]
fn split_budget() {
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
    let line = Line::through(point(-5.0, 3.0), point(15.0, 3.0));

    let pieces = slice_with_options(&polygon, &line, &SliceOptions::DEFAULT.with_max_splits(1));
    assert_eq!(pieces.len(), 2);
    let total: f64 = pieces.iter().map(|p| area(p, false)).sum();
    assert!((total - 72.0).abs() < EPSILON);

    let pieces = slice_with_options(&polygon, &line, &SliceOptions::DEFAULT.with_max_splits(0));
    assert_eq!(pieces, vec![polygon]);
}

#[test]
fn slanted_cut_conserves_area() {
    let line = Line::through(point(-1.0, 2.0), point(11.0, 7.0));
    let pieces = slice(&square(), &line);

    assert_eq!(pieces.len(), 2);
    let total: f64 = pieces.iter().map(|p| area(p, false)).sum();
    assert!((total - 100.0).abs() < EPSILON);
}

#[test]
fn line_through_a_reflex_vertex() {
    // Two spikes joined at the reflex vertex (5, 5).
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(5.0, 5.0),
        point(0.0, 10.0),
    ]);
    let line = Line::through(point(-5.0, 5.0), point(15.0, 5.0));

    let (_, crossings) = insert_crossings(&polygon, &line);
    assert_eq!(crossings.len(), 4);

    for polygon in &[polygon.clone(), polygon.reversed()] {
        let pieces = slice(polygon, &line);
        assert_eq!(pieces.len(), 3);
        let areas = sorted_areas(&pieces);
        assert!((areas[0] - 12.5).abs() < EPSILON);
        assert!((areas[1] - 12.5).abs() < EPSILON);
        assert!((areas[2] - 50.0).abs() < EPSILON);
    }
}

#[test]
fn line_along_the_notch_floor() {
    // The U shape cut along the bottom of its notch, through two reflex vertices.
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
    let line = Line::through(point(-5.0, 7.0), point(15.0, 7.0));
    let pieces = slice(&polygon, &line);

    assert_eq!(pieces.len(), 3);
    let areas = sorted_areas(&pieces);
    assert!((areas[0] - 21.0).abs() < EPSILON);
    assert!((areas[1] - 21.0).abs() < EPSILON);
    assert!((areas[2] - 30.0).abs() < EPSILON);
}

#[test]
fn six_crossings_with_four_on_vertices() {
    // Three prongs, the line running along the floor of both gaps.
    let polygon = Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 60.0),
        point(20.0, 60.0),
        point(20.0, 0.0),
        point(30.0, 0.0),
        point(30.0, 60.0),
        point(40.0, 60.0),
        point(40.0, 0.0),
        point(50.0, 0.0),
        point(50.0, 80.0),
        point(0.0, 80.0),
    ]);
    let line = Line::through(point(-5.0, 60.0), point(60.0, 60.0));

    let (_, crossings) = insert_crossings(&to_clockwise(&polygon), &line);
    assert_eq!(crossings.len(), 6);

    let pieces = slice(&polygon, &line);
    assert_eq!(pieces.len(), 4);
    let areas = sorted_areas(&pieces);
    for prong in &areas[..3] {
        assert!((prong - 600.0).abs() < EPSILON);
    }
    assert!((areas[3] - 1000.0).abs() < EPSILON);
}

#[test]
fn line_touching_a_convex_vertex() {
    let diamond = Polygon::new(vec![
        point(5.0, 0.0),
        point(10.0, 5.0),
        point(5.0, 10.0),
        point(0.0, 5.0),
    ]);
    let line = Line::through(point(-5.0, 0.0), point(15.0, 0.0));

    let (_, crossings) = insert_crossings(&diamond, &line);
    assert!(crossings.is_empty());
    assert_eq!(slice(&diamond, &line), vec![diamond.clone()]);

    // Through two opposite corners it does split.
    let line = Line::through(point(-5.0, 5.0), point(15.0, 5.0));
    let pieces = slice(&diamond, &line);
    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert!((area(piece, false) - 25.0).abs() < EPSILON);
    }
}
