//! Node shapes: an ellipse with a centered label.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Visual definition shared by all nodes of a map.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    size: Size,
    fill: Color,
    stroke: StrokeDefinition,
    text_color: Color,
    font_size: f32,
    font_family: String,
}

impl NodeDefinition {
    pub fn new(size: Size, fill: Color, stroke: StrokeDefinition) -> Self {
        Self {
            size,
            fill,
            stroke,
            ..Self::default()
        }
    }

    /// Sets the label color and font (builder style).
    pub fn with_text(mut self, color: Color, font_size: f32, font_family: impl Into<String>) -> Self {
        self.text_color = color;
        self.font_size = font_size;
        self.font_family = font_family.into();
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for NodeDefinition {
    fn default() -> Self {
        Self {
            size: Size::new(100.0, 60.0),
            fill: Color::new("white").expect("'white' is a valid CSS color"),
            stroke: StrokeDefinition::default(),
            text_color: Color::default(),
            font_size: 14.0,
            font_family: "Arial".to_string(),
        }
    }
}

/// A labelled node ready to be rendered.
#[derive(Debug)]
pub struct NodeDrawable<'a> {
    definition: &'a NodeDefinition,
    label: &'a str,
}

impl<'a> NodeDrawable<'a> {
    pub fn new(definition: &'a NodeDefinition, label: &'a str) -> Self {
        Self { definition, label }
    }
}

impl Drawable for NodeDrawable<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let size = self.definition.size();

        let ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", size.width() / 2.0)
            .set("ry", size.height() / 2.0)
            .set("fill", self.definition.fill().to_string())
            .set("fill-opacity", self.definition.fill().alpha());
        let ellipse = crate::apply_stroke!(ellipse, self.definition.stroke());
        output.add_to_layer(RenderLayer::Node, Box::new(ellipse));

        let text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("fill", self.definition.text_color().to_string())
            .add(SvgText::new(self.label));
        output.add_to_layer(RenderLayer::Text, Box::new(text));

        output
    }

    fn size(&self) -> Size {
        self.definition.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_definition_default() {
        let definition = NodeDefinition::default();
        assert_eq!(definition.size(), Size::new(100.0, 60.0));
        assert_eq!(definition.font_size(), 14.0);
        assert_eq!(definition.font_family(), "Arial");
    }

    #[test]
    fn test_node_drawable_renders_ellipse_and_label() {
        let definition = NodeDefinition::default();
        let drawable = NodeDrawable::new(&definition, "Ownership");

        let rendered: String = drawable
            .render_to_layers(Point::new(10.0, 20.0))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains("<ellipse"));
        assert!(rendered.contains("cx=\"10\""));
        assert!(rendered.contains("rx=\"50\""));
        assert!(rendered.contains("Ownership"));
        assert_eq!(drawable.size(), Size::new(100.0, 60.0));
    }

    #[test]
    fn test_node_drawable_escapes_label() {
        let definition = NodeDefinition::default();
        let drawable = NodeDrawable::new(&definition, "A < B & C");

        let rendered: String = drawable
            .render_to_layers(Point::default())
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains("A &lt; B &amp; C"));
    }
}
