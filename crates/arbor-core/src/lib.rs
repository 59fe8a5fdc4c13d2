//! Arbor Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Arbor mind-map
//! crates. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and angle helpers ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke definitions, render layers and the [`draw::Drawable`] capability
//! - **Tree**: The nested branch records a mind map is built from ([`tree`] module)
//! - **Graph**: Plain node and edge records owned by a scene ([`graph`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod graph;
pub mod tree;
