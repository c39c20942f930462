//! Shared testing utilities for driver config generation tests.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use csi_test_config::{DriverConfigRequest, TestConfigLayout};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// The template shipped with the crate.
pub const SHIPPED_TEMPLATE: &str =
    include_str!("../../test/k8s-integration/config/test-config-template.in");

/// Testing harness providing an isolated package root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a package root with the shipped template in place.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_template(SHIPPED_TEMPLATE);
        ctx
    }

    /// Create a package root with an empty test config directory and no template.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child(csi_test_config::domain::TEST_CONFIG_DIR)
            .create_dir_all()
            .expect("Failed to create test config directory");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn layout(&self) -> TestConfigLayout {
        TestConfigLayout::new(self.root())
    }

    pub fn output_path(&self) -> PathBuf {
        self.layout().output_path()
    }

    /// Replace the template under the package root.
    pub fn write_template(&self, content: &str) {
        self.root
            .child(csi_test_config::domain::TEST_CONFIG_DIR)
            .child(csi_test_config::domain::CONFIG_TEMPLATE_FILE)
            .write_str(content)
            .expect("Failed to write template");
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("Failed to read rendered config")
    }

    pub fn output_yaml(&self) -> Value {
        serde_yaml::from_str(&self.read_output()).expect("Rendered config is not valid YAML")
    }
}

pub fn request(platform: &str, sc: &str, snapshot: &str, strategy: &str) -> DriverConfigRequest {
    DriverConfigRequest::new(platform, sc, Some(snapshot.to_string()), strategy)
}

/// Keys of a YAML mapping, in document order.
pub fn mapping_keys(value: &Value) -> Vec<String> {
    value
        .as_mapping()
        .expect("expected a YAML mapping")
        .keys()
        .map(|key| key.as_str().expect("expected string key").to_string())
        .collect()
}
