//! Z-ordered grouping of SVG elements.
//!
//! Every drawable tags the elements it produces with a [`RenderLayer`].
//! [`LayeredOutput::render`] then emits one `<g data-layer="...">` per
//! non-empty layer, bottom to top: background, connectors, node shapes,
//! labels. A connector therefore never covers a node, whatever order the
//! scene was drawn in.
//!
//! ```
//! # use arbor_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Node, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! assert_eq!(output.render().len(), 2);
//! ```

use svg::node::element::Group;

/// A boxed SVG element.
pub type SvgNode = Box<dyn svg::Node>;

/// Drawing layers, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    Background,
    Connector,
    Node,
    Text,
}

impl RenderLayer {
    const ALL: [RenderLayer; 4] = [Self::Background, Self::Connector, Self::Node, Self::Text];

    /// Value of the `data-layer` attribute on the layer's group.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Connector => "connector",
            Self::Node => "node",
            Self::Text => "text",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// SVG elements collected per layer, in insertion order.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: [Vec<SvgNode>; 4],
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers[layer.slot()].push(node);
    }

    /// Moves every element of `other` into `self`, keeping layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (mine, theirs) in self.layers.iter_mut().zip(other.layers) {
            mine.extend(theirs);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Vec::is_empty)
    }

    /// One group per non-empty layer, bottom layer first.
    pub fn render(self) -> Vec<SvgNode> {
        RenderLayer::ALL
            .into_iter()
            .zip(self.layers)
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(layer, nodes)| {
                let group = nodes
                    .into_iter()
                    .fold(Group::new().set("data-layer", layer.name()), Group::add);
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
