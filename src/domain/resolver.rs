//! Capability resolution for the driver under test.
//!
//! The capability list is produced by applying named [`CapabilityStep`]s, in order,
//! to an empty [`CapabilitySet`]. Everything here is pure: no I/O, no clock.

use tracing::debug;

use super::{
    Capability, CapabilitySet, DeploymentStrategy, DriverConfigError, DriverConfigRequest,
    Platform, ResolvedConfig, StorageClassFile, TestConfigLayout,
};

const BASE_CAPABILITIES: [Capability; 6] = [
    Capability::Persistence,
    Capability::Block,
    Capability::FsGroup,
    Capability::Exec,
    Capability::Multipods,
    Capability::Topology,
];

/// One transformation of the capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStep {
    /// Capabilities every supported deployment advertises.
    Base,
    /// Platform restrictions; Windows nodes lack raw block and fsGroup support.
    Platform(Platform),
    /// Online volume expansion, available on both gce and gke.
    Deployment(DeploymentStrategy),
    /// Snapshot provisioning, enabled when a snapshot class is supplied.
    Snapshot,
}

impl CapabilityStep {
    pub fn name(&self) -> &'static str {
        match self {
            CapabilityStep::Base => "base",
            CapabilityStep::Platform(_) => "platform",
            CapabilityStep::Deployment(_) => "deployment",
            CapabilityStep::Snapshot => "snapshot",
        }
    }

    pub fn apply(&self, set: &mut CapabilitySet) {
        match self {
            CapabilityStep::Base => set.extend(BASE_CAPABILITIES),
            CapabilityStep::Platform(Platform::Windows) => {
                set.remove(Capability::Block);
                set.remove(Capability::FsGroup);
            }
            CapabilityStep::Platform(Platform::Unix) => {}
            CapabilityStep::Deployment(DeploymentStrategy::Gce | DeploymentStrategy::Gke) => {
                set.extend([Capability::ControllerExpansion, Capability::NodeExpansion]);
            }
            CapabilityStep::Snapshot => {
                set.insert(Capability::SnapshotDataSource);
            }
        }
    }
}

/// Ordered steps for a platform, strategy, and snapshot-class presence.
pub fn capability_steps(
    platform: Platform,
    strategy: DeploymentStrategy,
    with_snapshot: bool,
) -> Vec<CapabilityStep> {
    let mut steps = vec![
        CapabilityStep::Base,
        CapabilityStep::Platform(platform),
        CapabilityStep::Deployment(strategy),
    ];
    if with_snapshot {
        steps.push(CapabilityStep::Snapshot);
    }
    steps
}

pub fn resolve_capabilities(
    platform: Platform,
    strategy: DeploymentStrategy,
    with_snapshot: bool,
) -> CapabilitySet {
    let mut set = CapabilitySet::new();
    for step in capability_steps(platform, strategy, with_snapshot) {
        step.apply(&mut set);
        debug!(step = step.name(), capabilities = ?set.tags(), "applied capability step");
    }
    set
}

/// Resolve a request against a package layout.
///
/// Fails before producing anything if the deployment strategy or storage-class
/// file name is invalid.
pub fn resolve(
    layout: &TestConfigLayout,
    request: &DriverConfigRequest,
) -> Result<ResolvedConfig, DriverConfigError> {
    let strategy: DeploymentStrategy = request.deployment_strategy.parse()?;
    let storage_class = StorageClassFile::new(&request.storage_class_file)?;
    let platform = Platform::from_name(&request.platform);
    let snapshot_class_file = request.snapshot_class_file().map(|file| layout.resolve(file));

    let capabilities = resolve_capabilities(platform, strategy, snapshot_class_file.is_some());
    let sizing = storage_class.sizing();

    debug!(
        %platform,
        %strategy,
        storage_class = storage_class.name(),
        minimum_volume_size = sizing.minimum_volume_size,
        "resolved driver config"
    );

    Ok(ResolvedConfig {
        storage_class_file: layout.resolve(storage_class.file_name()),
        storage_class: storage_class.name().to_string(),
        snapshot_class_file,
        capabilities,
        supported_fs_types: platform.supported_fs_types().iter().map(|s| s.to_string()).collect(),
        minimum_volume_size: sizing.minimum_volume_size.to_string(),
        num_allowed_topologies: sizing.num_allowed_topologies,
    })
}
