//! Program metadata loaded from RON files.
//!
//! A metadata file lists the program's core principles, injection points,
//! assets, academics, abilities and the services abilities can be injected
//! into. Every field is optional:
//!
//! ```ron
//! (
//!     core_principles: ["determinism"],
//!     injection_points: {"startup": "bootstrap"},
//!     services: ["sync"],
//! )
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};
use crate::lifecycle::{GoldenAge, LifecycleRegistry};
use crate::state::State2Bit;

/// Read access to program metadata on top of the [`GoldenAge`] lifecycle.
pub trait ProgramMetadata: GoldenAge {
    fn core_principles(&self) -> &[String];
    fn injection_points(&self) -> &BTreeMap<String, String>;
    fn assets(&self) -> &[String];
    fn academics(&self) -> &[String];
    fn abilities(&self) -> &[String];

    /// Services that can have abilities injected.
    fn services(&self) -> &[String];
}

/// Metadata document as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopMetadata {
    pub core_principles: Vec<String>,
    pub injection_points: BTreeMap<String, String>,
    pub assets: Vec<String>,
    pub academics: Vec<String>,
    pub abilities: Vec<String>,
    pub services: Vec<String>,
}

impl DesktopMetadata {
    pub fn from_ron_str(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| RuntimeError::ParseMetadata(e.to_string()))
    }

    /// Load metadata from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ReadMetadata {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = Self::from_ron_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            services = metadata.services.len(),
            abilities = metadata.abilities.len(),
            "metadata loaded"
        );
        Ok(metadata)
    }

    pub fn declares_service(&self, name: &str) -> bool {
        self.services.iter().any(|service| service == name)
    }
}

/// [`ProgramMetadata`] backed by a [`DesktopMetadata`] document and a
/// [`LifecycleRegistry`].
///
/// Services must be declared in the metadata before they can start.
#[derive(Debug, Default)]
pub struct MetadataProgram {
    metadata: DesktopMetadata,
    registry: LifecycleRegistry,
}

impl MetadataProgram {
    pub fn new(metadata: DesktopMetadata, registry: LifecycleRegistry) -> Self {
        Self { metadata, registry }
    }

    pub fn metadata(&self) -> &DesktopMetadata {
        &self.metadata
    }

    pub fn registry(&self) -> &LifecycleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LifecycleRegistry {
        &mut self.registry
    }
}

impl GoldenAge for MetadataProgram {
    fn begin_task(&mut self, name: &str) -> Result<&mut State2Bit> {
        self.registry.begin_task(name)
    }

    fn end_task(&mut self, name: &str) -> Result<()> {
        self.registry.end_task(name)
    }

    fn start_service(&mut self, name: &str) -> Result<&mut State2Bit> {
        if !self.metadata.declares_service(name) {
            return Err(RuntimeError::UnknownService(name.to_owned()));
        }
        self.registry.start_service(name)
    }

    fn end_service(&mut self, name: &str) -> Result<()> {
        self.registry.end_service(name)
    }

    fn start_ability(&mut self, name: &str) -> Result<&mut State2Bit> {
        self.registry.start_ability(name)
    }

    fn end_ability(&mut self, name: &str) -> Result<()> {
        self.registry.end_ability(name)
    }
}

impl ProgramMetadata for MetadataProgram {
    fn core_principles(&self) -> &[String] {
        &self.metadata.core_principles
    }

    fn injection_points(&self) -> &BTreeMap<String, String> {
        &self.metadata.injection_points
    }

    fn assets(&self) -> &[String] {
        &self.metadata.assets
    }

    fn academics(&self) -> &[String] {
        &self.metadata.academics
    }

    fn abilities(&self) -> &[String] {
        &self.metadata.abilities
    }

    fn services(&self) -> &[String] {
        &self.metadata.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        core_principles: ["determinism", "clarity"],
        injection_points: {"startup": "bootstrap"},
        services: ["sync"],
    )"#;

    #[test]
    fn missing_fields_default_to_empty() {
        let metadata = DesktopMetadata::from_ron_str(SAMPLE).unwrap();
        assert_eq!(metadata.core_principles, ["determinism", "clarity"]);
        assert_eq!(
            metadata.injection_points.get("startup").map(String::as_str),
            Some("bootstrap")
        );
        assert!(metadata.assets.is_empty());
        assert!(metadata.declares_service("sync"));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = DesktopMetadata::from_ron_str("(services: [").unwrap_err();
        assert_eq!(err.error_code(), "RUNTIME_PARSE_METADATA");
    }

    #[test]
    fn undeclared_services_cannot_start() {
        let metadata = DesktopMetadata::from_ron_str(SAMPLE).unwrap();
        let mut program = MetadataProgram::new(metadata, LifecycleRegistry::default());

        assert!(program.start_service("sync").is_ok());
        assert!(matches!(
            program.start_service("backup"),
            Err(RuntimeError::UnknownService(name)) if name == "backup"
        ));
        assert_eq!(program.services().to_vec(), vec!["sync".to_owned()]);
    }
}
