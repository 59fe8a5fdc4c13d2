//! Configuration types for Arbor mind-map layout and rendering.
//!
//! This module provides configuration structures that control how mind maps
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! loading from TOML files; every field falls back to its default when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Radial layout and relaxation tuning parameters.
//! - [`StyleConfig`] - Colors, connector style and node geometry used by the SVG exporter.
//!
//! # Example
//!
//! ```
//! # use arbor::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().initial_radius(), 500.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use arbor_core::{
    color::Color,
    draw::{ConnectorStyle, NodeDefinition, StrokeDefinition},
    geometry::Size,
};

use crate::layout::RelaxParams;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks the layout tuning parameters.
    ///
    /// # Errors
    ///
    /// See [`LayoutConfig::validate`].
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()
    }
}

/// Tuning parameters of the radial layout and the relaxation pass.
///
/// Angles are given in degrees. Missing keys take the defaults listed on
/// each getter.
///
/// ```
/// # use arbor::config::LayoutConfig;
/// let tight = LayoutConfig::default()
///     .with_initial_radius(300.0)
///     .with_min_node_distance(120.0);
/// assert_eq!(tight.initial_radius(), 300.0);
/// assert_eq!(tight.level_spacing(), 400.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    initial_radius: f32,
    level_spacing: f32,
    min_node_distance: f32,
    branch_angle: f32,
    iterations: usize,
    damping: f32,
    level_decay: f32,
    min_level_factor: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial_radius: 500.0,
            level_spacing: 400.0,
            min_node_distance: 250.0,
            branch_angle: 60.0,
            iterations: 50,
            damping: 0.6,
            level_decay: 0.1,
            min_level_factor: 0.1,
        }
    }
}

impl LayoutConfig {
    /// Distance from the root to its children. Default `500`.
    pub fn initial_radius(&self) -> f32 {
        self.initial_radius
    }

    /// Base distance between deeper levels. Default `400`.
    pub fn level_spacing(&self) -> f32 {
        self.level_spacing
    }

    /// Minimum separation enforced by relaxation. Default `250`.
    pub fn min_node_distance(&self) -> f32 {
        self.min_node_distance
    }

    /// Angular window for children of non-root nodes, in degrees. Default `60`.
    pub fn branch_angle(&self) -> f32 {
        self.branch_angle
    }

    /// Maximum number of relaxation passes. Default `50`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Scale applied to each repulsive force. Default `0.6`.
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Radius shrink per depth level. Default `0.1`.
    pub fn level_decay(&self) -> f32 {
        self.level_decay
    }

    /// Lower bound of the per-level radius factor. Default `0.1`.
    pub fn min_level_factor(&self) -> f32 {
        self.min_level_factor
    }

    /// Radius scale for nodes at `depth`: `1 - depth * level_decay`, floored.
    pub fn level_factor(&self, depth: usize) -> f32 {
        (1.0 - depth as f32 * self.level_decay).max(self.min_level_factor)
    }

    /// Checks that every parameter can drive a layout.
    ///
    /// Radius, spacing and minimum distance must be positive, damping and the
    /// minimum level factor must lie in `(0, 1]`, and the level decay must not
    /// be negative. Every value must be finite.
    ///
    /// ```
    /// # use arbor::config::LayoutConfig;
    /// assert!(LayoutConfig::default().validate().is_ok());
    /// assert!(LayoutConfig::default().with_damping(-0.5).validate().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending key.
    pub fn validate(&self) -> Result<(), String> {
        let radius = self.initial_radius;
        check_layout_value("initial_radius", radius, radius > 0.0, "a number greater than 0")?;
        let spacing = self.level_spacing;
        check_layout_value("level_spacing", spacing, spacing > 0.0, "a number greater than 0")?;
        let distance = self.min_node_distance;
        check_layout_value("min_node_distance", distance, distance > 0.0, "a number greater than 0")?;
        check_layout_value("branch_angle", self.branch_angle, true, "a finite number")?;
        let damping = self.damping;
        check_layout_value("damping", damping, damping > 0.0 && damping <= 1.0, "a number in (0, 1]")?;
        let decay = self.level_decay;
        check_layout_value("level_decay", decay, decay >= 0.0, "a number of at least 0")?;
        let floor = self.min_level_factor;
        check_layout_value("min_level_factor", floor, floor > 0.0 && floor <= 1.0, "a number in (0, 1]")
    }

    /// Parameters of the relaxation pass derived from this configuration.
    pub fn relax_params(&self) -> RelaxParams {
        RelaxParams::new(self.min_node_distance, self.iterations, self.damping)
    }

    pub fn with_initial_radius(mut self, radius: f32) -> Self {
        self.initial_radius = radius;
        self
    }

    pub fn with_level_spacing(mut self, spacing: f32) -> Self {
        self.level_spacing = spacing;
        self
    }

    pub fn with_min_node_distance(mut self, distance: f32) -> Self {
        self.min_node_distance = distance;
        self
    }

    pub fn with_branch_angle(mut self, degrees: f32) -> Self {
        self.branch_angle = degrees;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_level_decay(mut self, decay: f32, min_factor: f32) -> Self {
        self.level_decay = decay;
        self.min_level_factor = min_factor;
        self
    }
}

/// Visual styling configuration for exported maps.
///
/// Colors are stored as CSS color strings and validated when the exporter is
/// built, so a bad value is reported instead of silently replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    connector_color: String,
    connector_width: f32,
    connector: ConnectorStyle,
    node_fill: String,
    node_stroke: String,
    node_width: f32,
    node_height: f32,
    label_color: String,
    font_size: f32,
    font_family: String,
    margin: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_string(),
            connector_color: "#90A4AE".to_string(),
            connector_width: 2.0,
            connector: ConnectorStyle::default(),
            node_fill: "#FFFFFF".to_string(),
            node_stroke: "#000000".to_string(),
            node_width: 100.0,
            node_height: 60.0,
            label_color: "#000000".to_string(),
            font_size: 14.0,
            font_family: "Arial".to_string(),
            margin: 50.0,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        parse_color("background_color", &self.background_color)
    }

    /// Returns the connector pen: configured color and width, round caps and joins.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn connector_stroke(&self) -> Result<StrokeDefinition, String> {
        let color = parse_color("connector_color", &self.connector_color)?;
        Ok(StrokeDefinition::rounded(color, self.connector_width))
    }

    /// How connectors are drawn.
    pub fn connector(&self) -> ConnectorStyle {
        self.connector
    }

    /// Size of the node ellipse.
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Blank space around the map content.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Builds the shared node definition.
    ///
    /// # Errors
    ///
    /// Returns an error if any node or label color cannot be parsed.
    pub fn node_definition(&self) -> Result<NodeDefinition, String> {
        let fill = parse_color("node_fill", &self.node_fill)?;
        let stroke = parse_color("node_stroke", &self.node_stroke)?;
        let label = parse_color("label_color", &self.label_color)?;

        Ok(
            NodeDefinition::new(self.node_size(), fill, StrokeDefinition::new(stroke, 1.0))
                .with_text(label, self.font_size, self.font_family.clone()),
        )
    }

    pub fn with_connector(mut self, connector: ConnectorStyle) -> Self {
        self.connector = connector;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
}

fn check_layout_value(key: &str, value: f32, in_range: bool, expected: &str) -> Result<(), String> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(format!("Invalid layout.{key} in config: expected {expected}, got {value}"))
    }
}
