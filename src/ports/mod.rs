mod artifact_renderer;

pub use artifact_renderer::ArtifactRenderer;
