//! csi-test-config: resolve a CSI driver's advertised capabilities and render the
//! test driver config consumed by the Kubernetes external-storage e2e suite.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::{Path, PathBuf};

use adapters::MinijinjaArtifactRenderer;
use app::commands::generate;

pub use domain::{
    Capability, CapabilitySet, CapabilityStep, DeploymentStrategy, DriverConfigError,
    DriverConfigRequest, Platform, ResolvedConfig, TestConfigLayout, resolve,
};
pub use ports::ArtifactRenderer;

/// Generate `test/k8s-integration/config/test-config.yaml` under `package_root`.
///
/// Loads `test-config-template.in` from the same directory, renders the
/// resolved config into it, and returns the path of the written file.
pub fn generate_driver_config_file(
    package_root: &Path,
    request: &DriverConfigRequest,
) -> Result<PathBuf, DriverConfigError> {
    let layout = TestConfigLayout::new(package_root);
    let output_path = layout.output_path();
    generate::execute(&MinijinjaArtifactRenderer::new(), &layout, request, &output_path)
}

/// Like [`generate_driver_config_file`], but writes to `output_path`.
pub fn generate_driver_config_file_to(
    package_root: &Path,
    request: &DriverConfigRequest,
    output_path: &Path,
) -> Result<PathBuf, DriverConfigError> {
    let layout = TestConfigLayout::new(package_root);
    generate::execute(&MinijinjaArtifactRenderer::new(), &layout, request, output_path)
}
