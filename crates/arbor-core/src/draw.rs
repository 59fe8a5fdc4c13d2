//! Drawable Components for Mind-Map Rendering
//!
//! This module provides drawable abstractions for rendering mind-map elements.
//! Scene records ([`crate::graph`]) carry no rendering behavior; a renderer wraps
//! them into the drawables defined here, all of which implement [`Drawable`].

mod connector;
mod layer;
mod node;
mod stroke;

pub use connector::{ConnectorDrawable, ConnectorStyle};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use node::{NodeDefinition, NodeDrawable};
pub use stroke::{StrokeCap, StrokeDefinition};

use crate::geometry::{Point, Size};

/// The minimal capability a renderer needs from anything it draws.
pub trait Drawable: std::fmt::Debug {
    /// Render this drawable with its center (or origin) at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The size occupied by this drawable.
    fn size(&self) -> Size;
}
