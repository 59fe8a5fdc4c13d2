//! Connector strokes between two nodes.

use std::str::FromStr;

use serde::Deserialize;
use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
    graph::Connector,
};

/// How connectors are stroked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    /// Quadratic curve bent through the connector's control point
    #[default]
    Curved,
    /// Straight line between the endpoints
    Straight,
}

impl FromStr for ConnectorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curved" => Ok(Self::Curved),
            "straight" => Ok(Self::Straight),
            _ => Err(format!(
                "invalid connector style `{s}`, valid values: curved, straight"
            )),
        }
    }
}

/// A connector ready to be rendered.
///
/// Connector geometry is absolute, so the position passed to
/// [`Drawable::render_to_layers`] acts as a translation offset.
#[derive(Debug)]
pub struct ConnectorDrawable<'a> {
    connector: &'a Connector,
    style: ConnectorStyle,
    stroke: &'a StrokeDefinition,
}

impl<'a> ConnectorDrawable<'a> {
    pub fn new(connector: &'a Connector, style: ConnectorStyle, stroke: &'a StrokeDefinition) -> Self {
        Self {
            connector,
            style,
            stroke,
        }
    }

    /// SVG path data for this connector, translated by `offset`.
    pub fn path_data(&self, offset: Point) -> String {
        let start = self.connector.start() + offset;
        let end = self.connector.end() + offset;

        match self.style {
            ConnectorStyle::Straight => {
                format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
            }
            ConnectorStyle::Curved => {
                let control = self.connector.control() + offset;
                format!(
                    "M {} {} Q {} {} {} {}",
                    start.x(),
                    start.y(),
                    control.x(),
                    control.y(),
                    end.x(),
                    end.y()
                )
            }
        }
    }
}

impl Drawable for ConnectorDrawable<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = svg_element::Path::new()
            .set("d", self.path_data(position))
            .set("fill", "none");
        let path = crate::apply_stroke!(path, self.stroke);
        output.add_to_layer(RenderLayer::Connector, Box::new(path));

        output
    }

    fn size(&self) -> Size {
        let delta = self.connector.end() - self.connector.start();
        Size::new(delta.x().abs(), delta.y().abs())
    }
}
