//! SVG export of a mind-map scene.
//!
//! The canvas covers the union of all node ellipses plus a margin on every
//! side. Content is drawn in four layers: background, connectors, node
//! ellipses and labels.

use log::{debug, info};
use svg::{
    Document,
    node::element::{Group, Rectangle},
};

use arbor_core::{
    color::Color,
    draw::{
        ConnectorDrawable, ConnectorStyle, Drawable, LayeredOutput, NodeDefinition,
        NodeDrawable, RenderLayer, StrokeDefinition,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{config::StyleConfig, export, scene::Scene};

/// Builder for [`Svg`], validating the style before any rendering starts.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            background: style.background_color().map_err(export::Error::Render)?,
            connector_stroke: style.connector_stroke().map_err(export::Error::Render)?,
            connector_style: style.connector(),
            node_definition: style.node_definition().map_err(export::Error::Render)?,
            margin: style.margin(),
        })
    }
}

/// SVG exporter for scenes.
#[derive(Debug)]
pub struct Svg {
    background: Color,
    connector_stroke: StrokeDefinition,
    connector_style: ConnectorStyle,
    node_definition: NodeDefinition,
    margin: f32,
}

impl Svg {
    /// Bounds of all node ellipses; an empty scene yields zero-sized bounds.
    pub fn content_bounds(&self, scene: &Scene) -> Bounds {
        scene
            .bounds(self.node_definition.size())
            .unwrap_or_default()
    }

    /// Renders `scene` into an SVG document.
    pub fn render_scene(&self, scene: &Scene) -> Document {
        let content = self.content_bounds(scene);
        let canvas = content.inflate(self.margin);
        let size = canvas.size();
        debug!(width = size.width(), height = size.height(); "SVG canvas size");

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(self.background_rect(canvas)));

        for edge in scene.edges() {
            let drawable =
                ConnectorDrawable::new(edge.connector(), self.connector_style, &self.connector_stroke);
            output.merge(drawable.render_to_layers(Point::default()));
        }

        for node in scene.nodes() {
            let drawable = NodeDrawable::new(&self.node_definition, node.label());
            output.merge(drawable.render_to_layers(node.position()));
        }

        let offset = canvas.min();
        let mut main_group = Group::new().set(
            "transform",
            format!("translate({}, {})", -offset.x(), -offset.y()),
        );
        for layer in output.render() {
            main_group = main_group.add(layer);
        }

        Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height())
            .add(main_group)
    }

    /// The canvas size `scene` renders to.
    pub fn canvas_size(&self, scene: &Scene) -> Size {
        self.content_bounds(scene).inflate(self.margin).size()
    }

    fn background_rect(&self, canvas: Bounds) -> Rectangle {
        Rectangle::new()
            .set("x", canvas.min_x())
            .set("y", canvas.min_y())
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", self.background.to_string())
            .set("fill-opacity", self.background.alpha())
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene) -> Result<String, export::Error> {
        let doc = self.render_scene(scene);
        info!(nodes = scene.nodes().len(), edges = scene.edges().len(); "SVG document rendered");
        Ok(doc.to_string())
    }
}
