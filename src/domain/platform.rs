use std::fmt;
use std::str::FromStr;

use super::DriverConfigError;

/// Node operating system family the driver is tested on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Any Unix-like platform (`linux`, or anything not recognized).
    #[default]
    Unix,
    /// Windows nodes: no raw block volumes, no fsGroup ownership changes.
    Windows,
}

impl Platform {
    /// Map a platform name. Only the exact value `windows` is special.
    pub fn from_name(name: &str) -> Platform {
        match name {
            "windows" => Platform::Windows,
            _ => Platform::Unix,
        }
    }

    /// Filesystem types the driver can format on this platform.
    pub fn supported_fs_types(&self) -> &'static [&'static str] {
        match self {
            Platform::Unix => &["ext2", "ext3", "ext4", "xfs"],
            Platform::Windows => &["ntfs"],
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Unix => f.write_str("unix"),
            Platform::Windows => f.write_str("windows"),
        }
    }
}

/// Deployment target for the driver under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentStrategy {
    /// Driver deployed onto a self-managed cluster on Compute Engine.
    Gce,
    /// Driver managed by GKE.
    Gke,
}

impl DeploymentStrategy {
    pub const ALL: [DeploymentStrategy; 2] = [DeploymentStrategy::Gce, DeploymentStrategy::Gke];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStrategy::Gce => "gce",
            DeploymentStrategy::Gke => "gke",
        }
    }
}

impl FromStr for DeploymentStrategy {
    type Err = DriverConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gce" => Ok(DeploymentStrategy::Gce),
            "gke" => Ok(DeploymentStrategy::Gke),
            other => {
                Err(DriverConfigError::UnsupportedDeploymentStrategy { value: other.to_string() })
            }
        }
    }
}

impl fmt::Display for DeploymentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
