use std::fmt;

use serde::{Serialize, Serializer};

/// Driver capability tags understood by the external-storage e2e harness.
///
/// Tag strings match the keys of the harness `DriverInfo.Capabilities` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Persistence,
    Block,
    FsGroup,
    Exec,
    Multipods,
    Topology,
    ControllerExpansion,
    NodeExpansion,
    SnapshotDataSource,
}

impl Capability {
    /// Harness tags this driver never advertises.
    ///
    /// `volumeLimits` is supported by the disk but its harness test is too slow to run.
    pub const UNSUPPORTED: [&'static str; 5] =
        ["pvcDataSource", "RWX", "volumeLimits", "singleNodeVolume", "dataSource"];

    /// Tag string as written into the test config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Persistence => "persistence",
            Capability::Block => "block",
            Capability::FsGroup => "fsGroup",
            Capability::Exec => "exec",
            Capability::Multipods => "multipods",
            Capability::Topology => "topology",
            Capability::ControllerExpansion => "controllerExpansion",
            Capability::NodeExpansion => "nodeExpansion",
            Capability::SnapshotDataSource => "snapshotDataSource",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered, duplicate-free set of capabilities.
///
/// Insertion order is kept so the rendered config diffs cleanly between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CapabilitySet(Vec<Capability>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a capability unless it is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, capability: Capability) -> bool {
        if self.contains(capability) {
            return false;
        }
        self.0.push(capability);
        true
    }

    pub fn extend<I: IntoIterator<Item = Capability>>(&mut self, capabilities: I) {
        for capability in capabilities {
            self.insert(capability);
        }
    }

    /// Drop a capability, keeping the relative order of the rest.
    pub fn remove(&mut self, capability: Capability) -> bool {
        let before = self.0.len();
        self.0.retain(|c| *c != capability);
        self.0.len() != before
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tag strings in insertion order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.0.iter().map(Capability::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a Capability;
    type IntoIter = std::slice::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
