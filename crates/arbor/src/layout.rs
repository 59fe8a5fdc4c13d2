//! Mind-map layout.
//!
//! Positions are computed in three stages, each in its own module:
//!
//! 1. [`radial`] places the root at the origin and its descendants on
//!    shrinking rings around their parents.
//! 2. [`relax`] pushes overlapping nodes apart with a damped repulsion pass.
//! 3. [`connector`] derives curve geometry from the final positions.

pub mod connector;
pub mod radial;
pub mod relax;

pub use connector::{build_connector, rebuild_connectors};
pub use radial::{RadialLayout, layout_tree};
pub use relax::{RelaxParams, RelaxReport, relax};
