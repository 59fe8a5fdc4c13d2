//! Pens for node outlines and connectors.
//!
//! A mind map uses two pens: a thin square-ended outline around every node
//! and a wider round-ended pen for connectors. [`StrokeDefinition`] covers
//! both; [`apply_stroke!`](crate::apply_stroke!) writes one onto an SVG
//! element.
//!
//! ```
//! use arbor_core::color::Color;
//! use arbor_core::draw::StrokeDefinition;
//! use svg::node::element as svg_element;
//!
//! let pen = StrokeDefinition::rounded(Color::new("#90A4AE").unwrap(), 2.0);
//! let line = arbor_core::apply_stroke!(svg_element::Line::new(), &pen);
//! assert!(line.to_string().contains("stroke-linecap=\"round\""));
//! ```

use crate::color::Color;

/// Shape of line ends and corners.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Square ends cut at the endpoint, mitred corners.
    #[default]
    Butt,
    /// Round ends and round corners.
    Round,
}

impl StrokeCap {
    /// Value of the SVG `stroke-linecap` attribute.
    pub fn linecap(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }

    /// Value of the SVG `stroke-linejoin` attribute.
    pub fn linejoin(self) -> &'static str {
        match self {
            Self::Butt => "miter",
            Self::Round => "round",
        }
    }
}

/// Color, width and end shape of a drawn line.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// A square-ended pen.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::Butt,
        }
    }

    /// A round-ended pen, as used for connectors.
    pub fn rounded(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::Round,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width`, `stroke-linecap` and
/// `stroke-linejoin` on an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().linecap())
            .set("stroke-linejoin", stroke.cap().linejoin())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pen() {
        let pen = StrokeDefinition::default();
        assert_eq!(pen.width(), 1.0);
        assert_eq!(pen.color().to_string(), "#000000");
        assert_eq!(pen.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_connector_pen_is_round() {
        let pen = StrokeDefinition::rounded(Color::new("#90A4AE").unwrap(), 2.0);
        assert_eq!(pen.width(), 2.0);
        assert_eq!(pen.cap().linecap(), "round");
        assert_eq!(pen.cap().linejoin(), "round");
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let pen = StrokeDefinition::new(Color::new("red").unwrap(), 3.0);

        let ellipse = crate::apply_stroke!(svg::node::element::Ellipse::new(), &pen);
        let rendered = ellipse.to_string();

        assert!(rendered.contains("stroke-width=\"3\""));
        assert!(rendered.contains("stroke-linecap=\"butt\""));
        assert!(rendered.contains("stroke-linejoin=\"miter\""));
    }
}
