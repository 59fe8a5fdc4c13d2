//! Overlap relaxation.
//!
//! A repulsion-only pass: every pair of nodes closer than the minimum
//! distance pushes each other apart with a force of
//! `(min_distance - distance) * damping`. Forces are summed per node over the
//! whole pass and applied together at the end of it, so the result does not
//! depend on the order in which pairs overlap.
//!
//! Each pass visits all ordered pairs, which is quadratic in the number of
//! nodes. That is fine for hand-sized mind maps and is the scaling limit of
//! this module.

use log::debug;

use arbor_core::{
    geometry::Point,
    graph::{Node, NodeId},
};

/// Parameters of a relaxation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxParams {
    min_distance: f32,
    iterations: usize,
    damping: f32,
}

impl RelaxParams {
    pub fn new(min_distance: f32, iterations: usize, damping: f32) -> Self {
        Self {
            min_distance,
            iterations,
            damping,
        }
    }

    /// Pairs closer than this repel each other.
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Maximum number of passes.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }
}

impl Default for RelaxParams {
    fn default() -> Self {
        Self::new(250.0, 50, 0.6)
    }
}

/// Outcome of a relaxation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxReport {
    passes: usize,
    converged: bool,
}

impl RelaxReport {
    /// Number of passes that moved nodes.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// True when no pair is left closer than the minimum distance.
    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Relaxes node positions in place.
///
/// The `pinned` node, usually the root, receives forces but never moves.
/// Stops as soon as a pass finds no overlapping pair; otherwise runs
/// `params.iterations()` passes and checks once more whether any overlap is
/// left.
///
/// Two nodes at exactly the same position are separated along the x axis:
/// the one inserted first moves towards -x.
pub fn relax(nodes: &mut [Node], pinned: Option<NodeId>, params: &RelaxParams) -> RelaxReport {
    let mut displacements = vec![Point::default(); nodes.len()];
    let mut passes = 0;
    let mut converged = false;

    for _ in 0..params.iterations() {
        if accumulate_forces(nodes, params, &mut displacements) == 0 {
            converged = true;
            break;
        }

        for (index, (node, displacement)) in nodes.iter_mut().zip(&displacements).enumerate() {
            if pinned.is_some_and(|id| id.index() == index) {
                continue;
            }
            node.set_position(node.position() + *displacement);
        }
        passes += 1;
    }

    if !converged {
        converged = accumulate_forces(nodes, params, &mut displacements) == 0;
    }

    debug!(
        nodes = nodes.len(),
        passes = passes,
        converged = converged,
        min_distance = params.min_distance();
        "Relaxation finished"
    );

    RelaxReport { passes, converged }
}

/// Fills `displacements` with the net force on every node.
///
/// Returns the number of pairwise contributions.
fn accumulate_forces(nodes: &[Node], params: &RelaxParams, displacements: &mut [Point]) -> usize {
    let mut contributions = 0;

    for (i, node) in nodes.iter().enumerate() {
        let position = node.position();
        let mut net = Point::default();

        for (j, other) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }

            let distance = position.distance(other.position());
            if distance >= params.min_distance() {
                continue;
            }

            let direction = if distance > 0.0 {
                (position - other.position()) * (1.0 / distance)
            } else if i < j {
                Point::new(-1.0, 0.0)
            } else {
                Point::new(1.0, 0.0)
            };

            let magnitude = (params.min_distance() - distance) * params.damping();
            net += direction * magnitude;
            contributions += 1;
        }

        displacements[i] = net;
    }

    contributions
}
