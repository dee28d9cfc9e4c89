//! Runtime that owns the long-lived stores.
//!
//! The cursor and permission set live behind [`Shared`] handles so clients can
//! clone them out; the lifecycle registry and the counter are owned directly.

use std::path::PathBuf;

use golden_age_core::{AbilityPermissions, Cursor};

use crate::counter::CounterModel;
use crate::error::{Result, RuntimeError};
use crate::lifecycle::LifecycleRegistry;
use crate::metadata::{DesktopMetadata, MetadataProgram};
use crate::shared::Shared;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Initial cursor bound. Negative values mean an empty sequence.
    pub sequence_size: i64,
    /// Abilities granted when the runtime is built.
    pub granted_abilities: Vec<String>,
    /// RON metadata file to load if no metadata is supplied directly.
    pub metadata_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub const SEQUENCE_SIZE_VAR: &'static str = "GOLDEN_AGE_SEQUENCE_SIZE";
    pub const ABILITIES_VAR: &'static str = "GOLDEN_AGE_ABILITIES";
    pub const METADATA_VAR: &'static str = "GOLDEN_AGE_METADATA";

    /// Reads the configuration from `GOLDEN_AGE_*` environment variables.
    ///
    /// Unset variables keep their defaults. `GOLDEN_AGE_ABILITIES` is a
    /// comma-separated list.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::SEQUENCE_SIZE_VAR) {
            config.sequence_size = raw.trim().parse().map_err(|_| RuntimeError::InvalidConfig {
                key: Self::SEQUENCE_SIZE_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(Self::ABILITIES_VAR) {
            config.granted_abilities = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect();
        }

        config.metadata_path = lookup(Self::METADATA_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

/// Owner of the cursor, permissions, lifecycle program and counter.
#[derive(Debug)]
pub struct Runtime {
    cursor: Shared<Cursor>,
    permissions: Shared<AbilityPermissions>,
    program: MetadataProgram,
    counter: CounterModel,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn cursor(&self) -> Shared<Cursor> {
        self.cursor.clone()
    }

    pub fn permissions(&self) -> Shared<AbilityPermissions> {
        self.permissions.clone()
    }

    pub fn program(&self) -> &MetadataProgram {
        &self.program
    }

    pub fn program_mut(&mut self) -> &mut MetadataProgram {
        &mut self.program
    }

    pub fn counter(&self) -> &CounterModel {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut CounterModel {
        &mut self.counter
    }
}

/// Builder for [`Runtime`].
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    cursor: Option<Shared<Cursor>>,
    permissions: Option<Shared<AbilityPermissions>>,
    metadata: Option<DesktopMetadata>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing cursor instead of creating one.
    pub fn cursor(mut self, cursor: Shared<Cursor>) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Share an existing permission set instead of creating one.
    pub fn permissions(mut self, permissions: Shared<AbilityPermissions>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Use `metadata` instead of loading `config.metadata_path`.
    pub fn metadata(mut self, metadata: DesktopMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            cursor,
            permissions,
            metadata,
        } = self;

        let cursor = cursor.unwrap_or_default();
        cursor.with(|c| c.set_sequence_size(config.sequence_size))?;

        let permissions = permissions.unwrap_or_default();
        permissions.with(|p| {
            for ability in &config.granted_abilities {
                p.grant_permission(ability.as_str());
            }
        })?;

        let metadata = match (metadata, &config.metadata_path) {
            (Some(metadata), _) => metadata,
            (None, Some(path)) => DesktopMetadata::load(path)?,
            (None, None) => DesktopMetadata::default(),
        };

        tracing::info!(
            sequence_size = config.sequence_size,
            abilities = config.granted_abilities.len(),
            services = metadata.services.len(),
            "runtime built"
        );

        let registry = LifecycleRegistry::new(permissions.clone());
        Ok(Runtime {
            cursor,
            permissions,
            program: MetadataProgram::new(metadata, registry),
            counter: CounterModel::new(),
        })
    }
}
