//! The handful of presentation attributes carried along with shapes.

use log::warn;
use std::fmt::Write;
use svgtypes::{NumberListParser, StyleParser};

/// A fill or stroke paint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Paint {
    /// Explicitly disabled with `none`.
    None,
    /// Any other value, kept verbatim.
    Color(String),
}

impl Paint {
    /// Colors, `currentColor` and references are kept as written.
    fn parse(value: &str) -> Option<Self> {
        match svgtypes::Paint::from_str(value) {
            Ok(svgtypes::Paint::None) => Some(Paint::None),
            Ok(_) => Some(Paint::Color(value.to_string())),
            Err(e) => {
                warn!("Invalid paint {:?}: {}.", value, e);
                None
            }
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Paint::Color(_))
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Paint::Color(color) => Some(color),
            Paint::None => None,
        }
    }
}

/// Line cap as in `stroke-linecap`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "butt" => Some(LineCap::Butt),
            "round" => Some(LineCap::Round),
            "square" => Some(LineCap::Square),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Line join as in `stroke-linejoin`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "miter" => Some(LineJoin::Miter),
            "round" => Some(LineJoin::Round),
            "bevel" => Some(LineJoin::Bevel),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// Style of a shape. Every field is optional, `None` meaning not specified.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub line_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
    /// An empty pattern stands for `stroke-dasharray: none`.
    pub line_dash: Option<Vec<f64>>,
}

impl Style {
    /// Parses a `style` attribute such as `fill:red;stroke-width:2`.
    ///
    /// A malformed declaration ends parsing, the declarations before it are kept.
    pub fn parse(src: &str) -> Self {
        let mut style = Style::default();
        for declaration in StyleParser::from(src) {
            match declaration {
                Ok((key, value)) => style.set(&key.to_string(), &value.to_string()),
                Err(e) => {
                    warn!("Invalid style {:?}: {}, skipping the rest.", src, e);
                    break;
                }
            }
        }

        style
    }

    /// Reads the style from presentation attributes. Unrelated attributes are ignored.
    pub fn from_attributes<'l>(attributes: impl IntoIterator<Item = (&'l str, &'l str)>) -> Self {
        let mut style = Style::default();
        for (key, value) in attributes {
            style.set(key, value);
        }

        style
    }

    /// Sets one property. Keys are case-insensitive, unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();

        match key.as_str() {
            "fill" => self.fill = Paint::parse(value),
            "stroke" => self.stroke = Paint::parse(value),
            "stroke-width" => self.line_width = parse_number(&key, value),
            "stroke-opacity" => self.stroke_opacity = parse_number(&key, value),
            "fill-opacity" => self.fill_opacity = parse_number(&key, value),
            "stroke-linecap" => {
                self.line_cap = LineCap::parse(value);
                if self.line_cap.is_none() {
                    warn!("Unknown stroke-linecap {:?}.", value);
                }
            }
            "stroke-linejoin" => {
                self.line_join = LineJoin::parse(value);
                if self.line_join.is_none() {
                    warn!("Unknown stroke-linejoin {:?}.", value);
                }
            }
            "stroke-dasharray" => self.line_dash = parse_dash_array(value),
            _ => {}
        }
    }

    /// Whether the shape is filled. Unspecified fill counts as not filled, the way
    /// `serialize_style` writes it.
    pub fn is_filled(&self) -> bool {
        self.fill.as_ref().map_or(false, Paint::is_enabled)
    }

    /// Whether the shape is stroked. Unspecified stroke counts as not stroked.
    pub fn is_stroked(&self) -> bool {
        self.stroke.as_ref().map_or(false, Paint::is_enabled)
    }
}

fn parse_number(key: &str, value: &str) -> Option<f64> {
    let number = value.parse::<f64>().ok();
    if number.is_none() {
        warn!("Invalid {} {:?}.", key, value);
    }

    number
}

fn parse_dash_array(value: &str) -> Option<Vec<f64>> {
    if value.eq_ignore_ascii_case("none") {
        return Some(Vec::new());
    }

    match NumberListParser::from(value).collect::<Result<Vec<f64>, _>>() {
        Ok(dashes) => Some(dashes),
        Err(e) => {
            warn!("Invalid stroke-dasharray {:?}: {}.", value, e);
            None
        }
    }
}

/// Serializes the style as a `style` attribute value.
///
/// `fill` and `stroke` are always written (`none` when disabled or unspecified), the other
/// keys only when specified.
pub fn serialize_style(style: &Style) -> String {
    let mut output = String::new();

    match style.fill.as_ref().and_then(Paint::color) {
        Some(color) => {
            let _ = write!(output, "fill:{};", color);
        }
        None => output.push_str("fill:none;"),
    }
    if let Some(opacity) = style.fill_opacity {
        let _ = write!(output, "fill-opacity:{};", opacity);
    }

    match style.stroke.as_ref().and_then(Paint::color) {
        Some(color) => {
            let _ = write!(output, "stroke:{};", color);
        }
        None => output.push_str("stroke:none;"),
    }
    if let Some(width) = style.line_width {
        let _ = write!(output, "stroke-width:{};", width);
    }
    if let Some(opacity) = style.stroke_opacity {
        let _ = write!(output, "stroke-opacity:{};", opacity);
    }
    if let Some(cap) = style.line_cap {
        let _ = write!(output, "stroke-linecap:{};", cap.as_str());
    }
    if let Some(join) = style.line_join {
        let _ = write!(output, "stroke-linejoin:{};", join.as_str());
    }
    if let Some(dashes) = &style.line_dash {
        if dashes.is_empty() {
            output.push_str("stroke-dasharray:none;");
        } else {
            let dashes: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
            let _ = write!(output, "stroke-dasharray:{};", dashes.join(","));
        }
    }

    output
}

#[test]
fn parse_style_attribute() {
    let style = Style::parse(
        "fill:#ff0000; STROKE:none;stroke-width: 2.5;stroke-linecap:round;stroke-linejoin:bevel;\
         stroke-dasharray:4,2 1;fill-opacity:0.5;font-size:12px",
    );

    assert_eq!(style.fill, Some(Paint::Color("#ff0000".to_string())));
    assert_eq!(style.stroke, Some(Paint::None));
    assert_eq!(style.line_width, Some(2.5));
    assert_eq!(style.line_cap, Some(LineCap::Round));
    assert_eq!(style.line_join, Some(LineJoin::Bevel));
    assert_eq!(style.line_dash, Some(vec![4.0, 2.0, 1.0]));
    assert_eq!(style.fill_opacity, Some(0.5));
    assert_eq!(style.stroke_opacity, None);
    assert!(style.is_filled());
    assert!(!style.is_stroked());
}

#[test]
fn invalid_values_are_dropped() {
    let style = Style::parse(
        "stroke-width:wide;stroke-linecap:pointy;fill:#12;stroke-dasharray:NONE;stroke:blue",
    );
    assert_eq!(style.line_width, None);
    assert_eq!(style.line_cap, None);
    assert_eq!(style.fill, None);
    assert_eq!(style.line_dash, Some(Vec::new()));
    assert_eq!(style.stroke, Some(Paint::Color("blue".to_string())));

    let style = Style::parse("stroke-dasharray:4 x 2");
    assert_eq!(style.line_dash, None);

    // Nothing after a declaration without a value is read.
    let style = Style::parse("stroke:red;garbage;fill:blue");
    assert_eq!(style.stroke, Some(Paint::Color("red".to_string())));
    assert_eq!(style.fill, None);
}

#[test]
fn style_from_attributes() {
    let style = Style::from_attributes(vec![
        ("d", "M 0 0"),
        ("fill", "none"),
        ("Stroke", "blue"),
        ("stroke-opacity", "0.25"),
    ]);

    assert_eq!(style.fill, Some(Paint::None));
    assert_eq!(style.stroke, Some(Paint::Color("blue".to_string())));
    assert_eq!(style.stroke_opacity, Some(0.25));
    assert!(!style.is_filled());
}

#[test]
fn serialize() {
    assert_eq!(serialize_style(&Style::default()), "fill:none;stroke:none;");

    let style = Style::parse("fill:red;stroke:black;stroke-width:2;stroke-linejoin:round;stroke-dasharray:3,1");
    let serialized = serialize_style(&style);
    assert_eq!(
        serialized,
        "fill:red;stroke:black;stroke-width:2;stroke-linejoin:round;stroke-dasharray:3,1;"
    );
    assert_eq!(Style::parse(&serialized), style);
}

#[test]
fn unspecified_paint_is_disabled() {
    let style = Style::default();
    assert!(!style.is_filled());
    assert!(!style.is_stroked());

    // Reading the serialized default back gives the same answer.
    let reparsed = Style::parse(&serialize_style(&style));
    assert_eq!(reparsed.is_filled(), style.is_filled());
    assert_eq!(reparsed.is_stroked(), style.is_stroked());

    assert!(Style::parse("fill:currentColor").is_filled());
}
