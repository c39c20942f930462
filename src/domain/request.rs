use serde::Deserialize;

use super::DriverConfigError;

/// Parameters a test run resolves before generating the driver config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfigRequest {
    /// Node platform; `windows` is the only value with special handling.
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Storage-class descriptor, relative to the test config directory.
    pub storage_class_file: String,

    /// Snapshot-class descriptor, relative to the test config directory.
    #[serde(default)]
    pub snapshot_class_file: Option<String>,

    /// `gce` or `gke`.
    pub deployment_strategy: String,
}

fn default_platform() -> String {
    "linux".to_string()
}

impl DriverConfigRequest {
    pub fn new(
        platform: impl Into<String>,
        storage_class_file: impl Into<String>,
        snapshot_class_file: Option<String>,
        deployment_strategy: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            storage_class_file: storage_class_file.into(),
            snapshot_class_file,
            deployment_strategy: deployment_strategy.into(),
        }
    }

    /// Parse a request from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, DriverConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Snapshot class file, treating an empty string as not supplied.
    pub fn snapshot_class_file(&self) -> Option<&str> {
        self.snapshot_class_file.as_deref().filter(|file| !file.is_empty())
    }
}
