//! Arbor - radial mind-map layout and rendering.
//!
//! Turns a nested `center`/`branches` tree, typed by hand or generated by a
//! language model, into positioned nodes and curved connectors, and renders
//! the result to SVG.

pub mod config;
pub mod export;
pub mod generate;
pub mod layout;
pub mod scene;
pub mod storage;

mod error;

pub use arbor_core::{color, draw, geometry, graph, tree};

pub use error::ArborError;
pub use scene::{Scene, SceneError};
pub use storage::StorageError;

use log::{debug, info, trace};

use arbor_core::tree::MindMapTree;

use config::AppConfig;
use export::Exporter;
use generate::{CompletionClient, CredentialProvider, Generator};

/// Builder for parsing, laying out and rendering mind maps.
///
/// # Examples
///
/// ```rust
/// use arbor::{MindMapBuilder, config::AppConfig};
///
/// let source = r#"{"center": "Rust", "branches": [{"text": "Ownership"}, {"text": "Traits"}]}"#;
///
/// let builder = MindMapBuilder::new(AppConfig::default());
/// let tree = builder.parse(source).expect("Failed to parse");
/// let scene = builder.layout(&tree).expect("Failed to lay out");
/// let svg = builder.render_svg(&scene).expect("Failed to render");
///
/// assert!(svg.contains("Ownership"));
/// ```
#[derive(Debug, Default)]
pub struct MindMapBuilder {
    config: AppConfig,
}

impl MindMapBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Parse`] for malformed JSON or a missing `center`.
    pub fn parse(&self, source: &str) -> Result<MindMapTree, ArborError> {
        info!("Parsing mind map tree");
        let tree = arbor_parser::parse_tree(source)
            .map_err(|err| ArborError::new_parse_error(err, source))?;
        trace!(tree:?; "Parsed tree");
        Ok(tree)
    }

    /// Parse a generated response containing a fenced JSON block.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Parse`] when there is no block or it is invalid.
    pub fn parse_response(&self, response: &str) -> Result<MindMapTree, ArborError> {
        info!("Extracting mind map from response");
        arbor_parser::parse_response(response)
            .map_err(|err| ArborError::new_parse_error(err, response))
    }

    /// Generate a tree for `topic` through `generator`.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Generate`] for request failures and
    /// [`ArborError::Parse`] when the response holds no valid tree.
    pub fn generate<C, P>(
        &self,
        generator: &Generator<C, P>,
        topic: &str,
    ) -> Result<MindMapTree, ArborError>
    where
        C: CompletionClient,
        P: CredentialProvider,
    {
        Ok(generator.generate(topic)?)
    }

    /// Lay out a tree: radial placement, relaxation and connectors.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Config`] if a layout tuning parameter is out of
    /// range. Nothing is placed in that case.
    pub fn layout(&self, tree: &MindMapTree) -> Result<Scene, ArborError> {
        self.config.validate().map_err(ArborError::Config)?;

        let (scene, report) = Scene::from_tree(tree, self.config.layout());
        if !report.converged() {
            info!(passes = report.passes(); "Relaxation stopped before resolving all overlaps");
        }
        debug!(nodes = scene.nodes().len(), edges = scene.edges().len(); "Mind map laid out");
        Ok(scene)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Export`] if the style configuration is invalid.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, ArborError> {
        info!("Rendering SVG");
        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        let svg = exporter.export_scene(scene)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Serialize a scene to the saved-map JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Storage`] if serialization fails.
    pub fn save(&self, scene: &Scene) -> Result<String, ArborError> {
        Ok(storage::save(scene)?)
    }

    /// Load a scene from the saved-map JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Storage`] for invalid files.
    pub fn load(&self, source: &str) -> Result<Scene, ArborError> {
        info!("Loading saved map");
        Ok(storage::load(source)?)
    }
}
