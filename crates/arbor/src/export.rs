pub mod svg;

use thiserror::Error;

use crate::scene::Scene;

/// Renders a scene into a document.
pub trait Exporter {
    /// Renders `scene` and returns the document text.
    fn export_scene(&self, scene: &Scene) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),
}
