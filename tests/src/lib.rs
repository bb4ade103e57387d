//! Shapes shared by the cross-crate tests and the benchmarks.

use shatter::math::{point, Point};
use shatter::path::Polygon;
use shatter::svg::{Primitive, ShapeDescriptor};

pub fn square() -> Polygon {
    Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ])
}

/// A square with a notch, open towards y = 0.
pub fn notched_square() -> Polygon {
    Polygon::new(vec![
        point(0.0, 0.0),
        point(3.0, 0.0),
        point(3.0, 7.0),
        point(7.0, 7.0),
        point(7.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ])
}

/// Three prongs pointing towards y = 0.
pub fn comb() -> Polygon {
    Polygon::new(vec![
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
    ])
}

/// Two spikes towards y = 10, joined at the reflex vertex `(5, 5)`.
pub fn spikes() -> Polygon {
    Polygon::new(vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(5.0, 5.0),
        point(0.0, 10.0),
    ])
}

pub fn diamond() -> Polygon {
    Polygon::new(vec![
        point(5.0, 0.0),
        point(10.0, 5.0),
        point(5.0, 10.0),
        point(0.0, 5.0),
    ])
}

/// A five-pointed star centered on `(50, 50)`.
pub fn star() -> Polygon {
    let mut points = Vec::new();
    for i in 0..10 {
        let radius = if i % 2 == 0 { 40.0 } else { 16.0 };
        let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
        points.push(point(50.0 + radius * angle.cos(), 50.0 + radius * angle.sin()));
    }

    Polygon::new(points)
}

pub fn circle_descriptor() -> ShapeDescriptor {
    ShapeDescriptor::new(Primitive::Circle {
        cx: 50.0,
        cy: 50.0,
        r: 30.0,
    })
}

pub fn curved_path_descriptor() -> ShapeDescriptor {
    ShapeDescriptor::new(Primitive::Path {
        d: "M 10 10 L 90 10 Q 100 50 90 90 C 60 110 40 70 10 90 Z".to_string(),
    })
}

/// The polygons the properties are checked against.
pub fn sample_polygons() -> Vec<(&'static str, Polygon)> {
    let mut polygons = vec![
        ("square", square()),
        ("notched square", notched_square()),
        ("comb", comb()),
        ("star", star()),
    ];
    for (name, descriptor) in &[
        ("circle", circle_descriptor()),
        ("curved path", curved_path_descriptor()),
    ] {
        if let Ok(polygon) = shatter::flatten_shape(descriptor) {
            polygons.push((*name, polygon));
        }
    }

    polygons
}

/// Lines avoiding the vertices of the sample polygons.
pub fn sample_lines() -> Vec<(Point, Point)> {
    vec![
        (point(-10.0, 33.3), point(110.0, 41.7)),
        (point(47.3, -10.0), point(52.1, 110.0)),
        (point(-10.0, -5.0), point(110.0, 97.0)),
        (point(-10.0, 25.5), point(110.0, 25.5)),
        (point(2.5, -10.0), point(7.5, 110.0)),
        (point(-10.0, 55.0), point(110.0, 48.0)),
    ]
}

#[cfg(test)]
mod properties;
