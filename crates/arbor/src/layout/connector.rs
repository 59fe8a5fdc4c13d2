//! Connector geometry between two placed nodes.

use log::trace;

use arbor_core::{
    geometry::Point,
    graph::{Connector, Edge, Node},
};

/// Fraction of the connector length by which the control point is offset.
pub const CURVE_OFFSET: f32 = 0.2;

/// Builds the connector from `start` to `end`.
///
/// The control point sits on the perpendicular through the midpoint, offset
/// by `0.2 * length` towards `angle + 90°`. With y pointing down, that is a
/// clockwise bend on screen. A zero-length connector keeps its control point
/// at the midpoint.
///
/// # Examples
///
/// ```
/// # use arbor::layout::build_connector;
/// # use arbor_core::geometry::Point;
/// let connector = build_connector(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
/// assert_eq!(connector.control(), Point::new(50.0, 20.0));
/// ```
pub fn build_connector(start: Point, end: Point) -> Connector {
    let delta = end - start;
    let control = start.midpoint(end) + delta.perpendicular() * CURVE_OFFSET;
    Connector::new(start, end, control)
}

/// Recomputes every edge's connector from the current node positions.
///
/// Edges whose endpoints are not in `nodes` are left untouched.
pub fn rebuild_connectors(nodes: &[Node], edges: &mut [Edge]) {
    for edge in edges.iter_mut() {
        let (Some(source), Some(target)) = (
            nodes.get(edge.source().index()),
            nodes.get(edge.target().index()),
        ) else {
            continue;
        };
        edge.set_connector(build_connector(source.position(), target.position()));
    }
    trace!(edges = edges.len(); "Rebuilt connectors");
}
