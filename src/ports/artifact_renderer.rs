use std::path::{Path, PathBuf};

use crate::domain::{DriverConfigError, ResolvedConfig};

/// Port for turning a resolved config into the on-disk test driver config.
pub trait ArtifactRenderer {
    /// Render `config` through the template at `template_path` into `output_path`.
    ///
    /// The template must load before the output is created, so a load failure
    /// leaves `output_path` untouched. Returns the path that was written.
    fn render(
        &self,
        config: &ResolvedConfig,
        template_path: &Path,
        output_path: &Path,
    ) -> Result<PathBuf, DriverConfigError>;
}
