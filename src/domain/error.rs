use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for driver config generation.
#[derive(Debug, Error)]
pub enum DriverConfigError {
    /// Deployment strategy is neither `gce` nor `gke`.
    #[error("Unknown deployment strategy '{value}': expected gce or gke")]
    UnsupportedDeploymentStrategy { value: String },

    /// Storage-class filename has no extension separator, or nothing before it.
    #[error("Malformed storage class filename '{0}': expected a name with an extension")]
    MalformedFilename(String),

    /// Template file missing, unreadable, or not valid template syntax.
    ///
    /// `kind` is the I/O kind of a read failure, or `InvalidData` for syntax errors.
    #[error("Failed to load template {}: {reason}", path.display())]
    TemplateLoad { path: PathBuf, reason: String, kind: io::ErrorKind },

    /// Destination file could not be created or truncated.
    #[error("Failed to create {}: {source}", path.display())]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Substitution, write, or flush failed while rendering.
    #[error("Failed to render {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    /// Direct YAML serialization failed.
    #[error("YAML serialization error: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// Request file is not valid TOML for a driver config request.
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl DriverConfigError {
    /// Provide an `io::ErrorKind`-like view for callers that only branch on I/O kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            DriverConfigError::UnsupportedDeploymentStrategy { .. }
            | DriverConfigError::MalformedFilename(_)
            | DriverConfigError::ConfigParse(_) => io::ErrorKind::InvalidInput,
            DriverConfigError::TemplateLoad { kind, .. } => *kind,
            DriverConfigError::OutputCreation { source, .. } => source.kind(),
            DriverConfigError::Render { .. } | DriverConfigError::Serialize(_) => {
                io::ErrorKind::InvalidData
            }
        }
    }
}
