use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{Capability, CapabilitySet, DriverConfigError};

/// Fully resolved test driver configuration.
///
/// Field names are the variable names available to the config template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub(crate) storage_class_file: PathBuf,
    pub(crate) storage_class: String,
    pub(crate) snapshot_class_file: Option<PathBuf>,
    pub(crate) capabilities: CapabilitySet,
    pub(crate) supported_fs_types: Vec<String>,
    pub(crate) minimum_volume_size: String,
    pub(crate) num_allowed_topologies: u32,
}

impl ResolvedConfig {
    /// Absolute path of the storage-class descriptor.
    pub fn storage_class_file(&self) -> &Path {
        &self.storage_class_file
    }

    pub fn storage_class(&self) -> &str {
        &self.storage_class
    }

    /// Absolute path of the snapshot-class descriptor, if one was supplied.
    pub fn snapshot_class_file(&self) -> Option<&Path> {
        self.snapshot_class_file.as_deref()
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn supported_fs_types(&self) -> &[String] {
        &self.supported_fs_types
    }

    pub fn minimum_volume_size(&self) -> &str {
        &self.minimum_volume_size
    }

    pub fn num_allowed_topologies(&self) -> u32 {
        self.num_allowed_topologies
    }

    /// Serialize straight to YAML, bypassing the template.
    pub fn to_yaml(&self) -> Result<String, DriverConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
