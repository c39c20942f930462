//! Driver config generation: resolve, then render.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{DriverConfigError, DriverConfigRequest, TestConfigLayout, resolve};
use crate::ports::ArtifactRenderer;

/// Resolve `request` and render it to `output_path` using the layout's template.
///
/// Resolution runs first, so an invalid request never touches the filesystem.
pub fn execute<R: ArtifactRenderer>(
    renderer: &R,
    layout: &TestConfigLayout,
    request: &DriverConfigRequest,
    output_path: &Path,
) -> Result<PathBuf, DriverConfigError> {
    let config = resolve(layout, request)?;
    let template_path = layout.template_path();

    debug!(
        template = %template_path.display(),
        output = %output_path.display(),
        "rendering test driver config"
    );

    renderer.render(&config, &template_path, output_path)
}
