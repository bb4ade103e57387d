//! Flattening of SVG shape elements into polylines.

use crate::error::ShapeError;
use crate::math::{point, Point, Vector};
use crate::path::geom::{approximate_arc, ArcError};
use crate::path::{flatten_path, FlattenOptions, Polygon, Polyline};
use crate::style::Style;
use crate::transform::apply_transform_chain;

use log::warn;
use std::collections::HashMap;
use std::f64::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Path,
    Rect,
    Ellipse,
    Circle,
}

/// The geometry of a shape element, before flattening.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// Path commands, as in the `d` attribute.
    Path { d: String },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Circle { cx: f64, cy: f64, r: f64 },
}

impl Primitive {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Primitive::Path { .. } => ShapeKind::Path,
            Primitive::Rect { .. } => ShapeKind::Rect,
            Primitive::Ellipse { .. } => ShapeKind::Ellipse,
            Primitive::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Flattens the primitive, without transform.
    ///
    /// Rectangles produce their four corners, clockwise with y pointing down. Ellipses and
    /// circles produce `options.ellipse_segments` points, the closing point is not repeated.
    pub fn flatten(&self, options: &FlattenOptions) -> Result<Polyline, ArcError> {
        let polyline = match *self {
            Primitive::Path { ref d } => return flatten_path(d, options),
            Primitive::Rect {
                x,
                y,
                width,
                height,
            } => Polyline::new(
                vec![
                    point(x, y),
                    point(x + width, y),
                    point(x + width, y + height),
                    point(x, y + height),
                ],
                true,
            ),
            Primitive::Ellipse { cx, cy, rx, ry } => {
                full_turn(rx, ry, point(cx, cy), options.ellipse_segments)
            }
            Primitive::Circle { cx, cy, r } => {
                full_turn(r, r, point(cx, cy), options.ellipse_segments)
            }
        };

        Ok(polyline)
    }
}

fn full_turn(rx: f64, ry: f64, center: Point, segments: usize) -> Polyline {
    let mut points = approximate_arc(rx, ry, 0.0, 2.0 * PI, center, 0.0, segments);
    points.pop();

    Polyline::new(points, true)
}

/// Everything needed to produce a shape: geometry, optional transform chain and style.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ShapeDescriptor {
    pub primitive: Primitive,
    pub transform: Option<String>,
    pub style: Style,
}

impl ShapeDescriptor {
    pub fn new(primitive: Primitive) -> Self {
        ShapeDescriptor {
            primitive,
            transform: None,
            style: Style::default(),
        }
    }

    /// Reads a descriptor from an element's name and attributes.
    ///
    /// Missing or invalid numeric attributes count as zero. The style comes from the
    /// `style` attribute when there is one, from the presentation attributes otherwise.
    pub fn from_attributes(
        element: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<Self, ShapeError> {
        let get = |name: &str| {
            attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        };
        let number = |name: &str| match get(name).map(|value| value.trim().parse::<f64>()) {
            Some(Ok(value)) => value,
            Some(Err(_)) => {
                warn!("Invalid {} attribute on <{}>, using 0.", name, element);
                0.0
            }
            None => {
                warn!("Missing {} attribute on <{}>, using 0.", name, element);
                0.0
            }
        };

        let primitive = match element.to_ascii_lowercase().as_str() {
            "path" => Primitive::Path {
                d: match get("d") {
                    Some(d) => d.to_string(),
                    None => {
                        warn!("Missing d attribute on <{}>.", element);
                        String::new()
                    }
                },
            },
            "rect" => Primitive::Rect {
                x: number("x"),
                y: number("y"),
                width: number("width"),
                height: number("height"),
            },
            "ellipse" => Primitive::Ellipse {
                cx: number("cx"),
                cy: number("cy"),
                rx: number("rx"),
                ry: number("ry"),
            },
            "circle" => Primitive::Circle {
                cx: number("cx"),
                cy: number("cy"),
                r: number("r"),
            },
            _ => return Err(ShapeError::UnsupportedElement(element.to_string())),
        };

        let style = match get("style") {
            Some(style) => Style::parse(style),
            None => Style::from_attributes(
                attributes
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            ),
        };

        Ok(ShapeDescriptor {
            primitive,
            transform: get("transform").map(str::to_string),
            style,
        })
    }

    /// Flattens the primitive, then applies the transform chain and the import scale and
    /// shift.
    pub fn extract(&self, options: &ImportOptions) -> Result<Shape, ShapeError> {
        let mut polyline = self.primitive.flatten(&options.flatten)?;

        if let Some(transform) = &self.transform {
            polyline.points = apply_transform_chain(transform, polyline.points);
        }

        let scale = options.scale;
        let shift = options.shift;
        let polyline = polyline.map_points(|p| (p.to_vector() * scale + shift).to_point());

        Ok(Shape {
            kind: self.primitive.kind(),
            polyline,
            style: self.style.clone(),
        })
    }
}

/// A flattened shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Shape {
    pub kind: ShapeKind,
    pub polyline: Polyline,
    pub style: Style,
}

impl Shape {
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.polyline.closed
    }

    pub fn to_polygon(&self) -> Polygon {
        self.polyline.to_polygon()
    }
}

/// Parameters for turning shape descriptors into shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ImportOptions {
    pub flatten: FlattenOptions,

    /// Every point is multiplied by this factor, after the transform chain.
    ///
    /// Default value: `1.0`.
    pub scale: f64,

    /// Added to every point after scaling.
    ///
    /// Default value: `(0, 0)`.
    pub shift: Vector,
}

impl ImportOptions {
    pub const DEFAULT: Self = ImportOptions {
        flatten: FlattenOptions::DEFAULT,
        scale: 1.0,
        shift: Vector::new(0.0, 0.0),
    };

    #[inline]
    pub const fn with_flatten_options(mut self, flatten: FlattenOptions) -> Self {
        self.flatten = flatten;
        self
    }

    #[inline]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub const fn with_shift(mut self, x: f64, y: f64) -> Self {
        self.shift = Vector::new(x, y);
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Flattens a shape descriptor.
pub fn extract_shape(
    descriptor: &ShapeDescriptor,
    options: &ImportOptions,
) -> Result<Shape, ShapeError> {
    descriptor.extract(options)
}

#[cfg(test)]
use crate::path::geom::utils::fuzzy_eq_point;
#[cfg(test)]
use crate::style::Paint;

#[cfg(test)]
fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn rect() {
    let descriptor = ShapeDescriptor::new(Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: 10.0,
        height: 10.0,
    });
    let shape = descriptor.extract(&ImportOptions::DEFAULT).unwrap();

    assert_eq!(shape.kind, ShapeKind::Rect);
    assert!(shape.is_closed());
    assert_eq!(
        shape.polyline.points,
        vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 10.0)
        ]
    );
}

#[test]
fn circle_has_no_closing_duplicate() {
    let options = ImportOptions::DEFAULT
        .with_flatten_options(FlattenOptions::DEFAULT.with_ellipse_segments(16));
    let shape = ShapeDescriptor::new(Primitive::Circle {
        cx: 5.0,
        cy: 5.0,
        r: 5.0,
    })
    .extract(&options)
    .unwrap();

    assert_eq!(shape.polyline.points.len(), 16);
    assert_eq!(shape.to_polygon().len(), 16);
    for p in &shape.polyline.points {
        assert!(((*p - point(5.0, 5.0)).length() - 5.0).abs() < 1e-6);
    }
}

#[test]
fn descriptor_from_attributes() {
    let descriptor = ShapeDescriptor::from_attributes(
        "ellipse",
        &attributes(&[
            ("cx", "10"),
            ("cy", " 20 "),
            ("rx", "5"),
            ("ry", "2"),
            ("fill", "none"),
            ("stroke", "#000"),
            ("transform", "translate(1,1)"),
        ]),
    )
    .unwrap();

    assert_eq!(
        descriptor.primitive,
        Primitive::Ellipse {
            cx: 10.0,
            cy: 20.0,
            rx: 5.0,
            ry: 2.0
        }
    );
    assert_eq!(descriptor.transform.as_deref(), Some("translate(1,1)"));
    assert_eq!(descriptor.style.fill, Some(Paint::None));
    assert_eq!(descriptor.style.stroke, Some(Paint::Color("#000".to_string())));
}

#[test]
fn style_attribute_wins_over_presentation_attributes() {
    let descriptor = ShapeDescriptor::from_attributes(
        "rect",
        &attributes(&[("width", "3"), ("fill", "blue"), ("style", "stroke:red")]),
    )
    .unwrap();

    assert_eq!(descriptor.style.fill, None);
    assert_eq!(descriptor.style.stroke, Some(Paint::Color("red".to_string())));
    // Missing attributes count as zero.
    assert_eq!(
        descriptor.primitive,
        Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: 3.0,
            height: 0.0
        }
    );
}

#[test]
fn unsupported_element() {
    let result = ShapeDescriptor::from_attributes("text", &HashMap::new());
    assert_eq!(
        result,
        Err(ShapeError::UnsupportedElement("text".to_string()))
    );
}

#[test]
fn import_options_in_const_context() {
    const SHIFTED: ImportOptions = ImportOptions::DEFAULT.with_scale(3.0).with_shift(1.0, -2.0);
    assert_eq!(SHIFTED.shift, Vector::new(1.0, -2.0));
    assert_eq!(SHIFTED.scale, 3.0);
    assert_eq!(SHIFTED.flatten, FlattenOptions::DEFAULT);
}

#[test]
fn transform_then_scale_and_shift() {
    let descriptor = ShapeDescriptor::from_attributes(
        "path",
        &attributes(&[("d", "M 1 1 L 2 1 L 2 2 Z"), ("transform", "translate(1, 0)")]),
    )
    .unwrap();
    let options = ImportOptions::DEFAULT.with_scale(2.0).with_shift(10.0, 0.0);
    let shape = extract_shape(&descriptor, &options).unwrap();

    assert!(shape.is_closed());
    assert!(fuzzy_eq_point(shape.polyline.points[0], point(14.0, 2.0)));
    assert!(fuzzy_eq_point(shape.polyline.points[2], point(16.0, 4.0)));
}

#[test]
fn unrealizable_arc_is_an_error() {
    let descriptor = ShapeDescriptor::new(Primitive::Path {
        d: "M 0 0 A 1 1 0 0 1 10 0".to_string(),
    });
    assert!(matches!(
        descriptor.extract(&ImportOptions::DEFAULT),
        Err(ShapeError::Arc(ArcError::Unrealizable { .. }))
    ));
}
