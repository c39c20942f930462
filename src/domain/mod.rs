pub mod capability;
pub mod error;
pub mod paths;
pub mod platform;
pub mod request;
pub mod resolved_config;
pub mod resolver;
pub mod storage_class;

pub use capability::{Capability, CapabilitySet};
pub use error::DriverConfigError;
pub use paths::{CONFIG_FILE, CONFIG_TEMPLATE_FILE, TEST_CONFIG_DIR, TestConfigLayout};
pub use platform::{DeploymentStrategy, Platform};
pub use request::DriverConfigRequest;
pub use resolved_config::ResolvedConfig;
pub use resolver::{CapabilityStep, capability_steps, resolve, resolve_capabilities};
pub use storage_class::{REGIONAL_PD_STORAGE_CLASS, StorageClassFile, VolumeSizing};
