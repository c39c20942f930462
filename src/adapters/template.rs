use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use tracing::info;

use crate::domain::{DriverConfigError, ResolvedConfig};
use crate::ports::ArtifactRenderer;

/// Artifact renderer using Minijinja.
///
/// Undefined variables are errors, so a template naming a field that
/// `ResolvedConfig` does not carry fails instead of rendering blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaArtifactRenderer;

impl MinijinjaArtifactRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn build_environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

impl ArtifactRenderer for MinijinjaArtifactRenderer {
    fn render(
        &self,
        config: &ResolvedConfig,
        template_path: &Path,
        output_path: &Path,
    ) -> Result<PathBuf, DriverConfigError> {
        let source = fs::read_to_string(template_path).map_err(|err| {
            let kind = err.kind();
            template_load_error(template_path, err, kind)
        })?;
        let env = build_environment();
        let template = env.template_from_str(&source).map_err(|err| {
            template_load_error(template_path, err, io::ErrorKind::InvalidData)
        })?;

        let file = File::create(output_path).map_err(|source| {
            DriverConfigError::OutputCreation { path: output_path.to_path_buf(), source }
        })?;
        let mut writer = BufWriter::new(file);

        template
            .render_to_write(config, &mut writer)
            .map_err(|err| render_error(output_path, err))?;
        writer.flush().map_err(|err| render_error(output_path, err))?;

        info!(path = %output_path.display(), "wrote test driver config");
        Ok(output_path.to_path_buf())
    }
}

fn template_load_error(
    path: &Path,
    err: impl std::fmt::Display,
    kind: io::ErrorKind,
) -> DriverConfigError {
    DriverConfigError::TemplateLoad { path: path.to_path_buf(), reason: err.to_string(), kind }
}

fn render_error(path: &Path, err: impl std::fmt::Display) -> DriverConfigError {
    DriverConfigError::Render { path: path.to_path_buf(), reason: err.to_string() }
}
