use std::path::{Path, PathBuf};

/// Test configuration directory, relative to the package root.
pub const TEST_CONFIG_DIR: &str = "test/k8s-integration/config";
/// Template file inside [`TEST_CONFIG_DIR`].
pub const CONFIG_TEMPLATE_FILE: &str = "test-config-template.in";
/// Rendered config file inside [`TEST_CONFIG_DIR`].
pub const CONFIG_FILE: &str = "test-config.yaml";

/// File layout of the e2e test configuration under a package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfigLayout {
    package_root: PathBuf,
}

impl TestConfigLayout {
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self { package_root: package_root.into() }
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    /// `<root>/test/k8s-integration/config`
    pub fn config_dir(&self) -> PathBuf {
        self.package_root.join(TEST_CONFIG_DIR)
    }

    /// `<root>/test/k8s-integration/config/test-config-template.in`
    pub fn template_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_TEMPLATE_FILE)
    }

    /// `<root>/test/k8s-integration/config/test-config.yaml`
    pub fn output_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    /// Join a descriptor file name onto the config directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.config_dir().join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths_hang_off_config_dir() {
        let layout = TestConfigLayout::new("/src/pd-csi");
        assert_eq!(layout.package_root(), Path::new("/src/pd-csi"));
        assert_eq!(layout.config_dir(), PathBuf::from("/src/pd-csi/test/k8s-integration/config"));
        assert_eq!(
            layout.template_path(),
            PathBuf::from("/src/pd-csi/test/k8s-integration/config/test-config-template.in")
        );
        assert_eq!(
            layout.output_path(),
            PathBuf::from("/src/pd-csi/test/k8s-integration/config/test-config.yaml")
        );
        assert_eq!(
            layout.resolve("sc-standard.yaml"),
            PathBuf::from("/src/pd-csi/test/k8s-integration/config/sc-standard.yaml")
        );
    }
}
