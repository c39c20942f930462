use super::DriverConfigError;

/// Identifier of the regional persistent disk storage class.
pub const REGIONAL_PD_STORAGE_CLASS: &str = "sc-regional-pd";

/// Storage-class file name with its derived identifier.
///
/// Guarantees:
/// - `name` is the file name truncated at its last `.`
/// - `name` is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageClassFile {
    file_name: String,
    name: String,
}

impl StorageClassFile {
    /// Derive the identifier from a descriptor file name.
    ///
    /// Fails with `MalformedFilename` when there is no `.` or when stripping the
    /// extension would leave an empty name (`.yaml`).
    pub fn new(file_name: &str) -> Result<Self, DriverConfigError> {
        let name = match file_name.rfind('.') {
            Some(idx) if idx > 0 => &file_name[..idx],
            _ => return Err(DriverConfigError::MalformedFilename(file_name.to_string())),
        };
        Ok(Self { file_name: file_name.to_string(), name: name.to_string() })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Storage class identifier (`sc-standard.yaml` -> `sc-standard`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_regional_pd(&self) -> bool {
        self.name == REGIONAL_PD_STORAGE_CLASS
    }

    pub fn sizing(&self) -> VolumeSizing {
        if self.is_regional_pd() { VolumeSizing::REGIONAL } else { VolumeSizing::STANDARD }
    }
}

/// Volume size floor and zone allowance advertised for a storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeSizing {
    pub minimum_volume_size: &'static str,
    pub num_allowed_topologies: u32,
}

impl VolumeSizing {
    pub const STANDARD: VolumeSizing =
        VolumeSizing { minimum_volume_size: "5Gi", num_allowed_topologies: 1 };

    /// Regional disks replicate across two zones and have a 200Gi floor.
    pub const REGIONAL: VolumeSizing =
        VolumeSizing { minimum_volume_size: "200Gi", num_allowed_topologies: 2 };
}
