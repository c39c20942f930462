pub mod template;

pub use template::MinijinjaArtifactRenderer;
