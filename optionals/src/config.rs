//! Configuration-based container declarations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::ContainerBuilder;
use crate::container::ContainerKind;
use crate::error::{DiError, DiResult};
use crate::naming;
use crate::registry::InitializerRegistry;
use crate::variants::ContainerVariant;

/// Slot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// Slot name
    pub name: String,
    /// Registry factory to use; defaults to the slot's `init<Name>`
    #[serde(default)]
    pub initializer: Option<String>,
}

/// Container configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Variant the configuration is for
    pub kind: ContainerKind,
    /// Slots in declaration order
    #[serde(default)]
    pub slots: Vec<SlotConfig>,
}

impl ContainerConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> DiResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| DiError::ConfigError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from JSON string
    pub fn from_json(json_str: &str) -> DiResult<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| DiError::ConfigError(format!("Failed to parse JSON: {}", e)))
    }

    /// Declare the configured slots on a builder
    ///
    /// Each slot receives the registry factory it names, registered under
    /// the slot's own `init<Name>`. Slots whose factory is missing are still
    /// declared, so validating the built container reports them.
    pub fn apply_to_builder<C: ContainerVariant>(
        &self,
        builder: &mut ContainerBuilder<C>,
        registry: &InitializerRegistry,
    ) -> DiResult<()> {
        if self.kind != C::KIND {
            return Err(DiError::ConfigError(format!(
                "configuration is for {}, not {}",
                self.kind,
                C::KIND
            )));
        }

        for slot in &self.slots {
            builder.declare(&slot.name);

            let Ok(method) = naming::initializer_name(&slot.name) else {
                continue;
            };
            let source = slot.initializer.as_deref().unwrap_or(&method);

            match registry.get_initializer(source) {
                Some(initializer) => {
                    builder.register_initializer(initializer.renamed(method));
                }
                None => {
                    debug!("{}: no factory '{}' for slot '{}'", self.kind, source, slot.name);
                }
            }
        }

        Ok(())
    }

    /// Build a container straight from this configuration
    pub fn build<C: ContainerVariant>(&self, registry: &InitializerRegistry) -> DiResult<C> {
        let mut builder = ContainerBuilder::<C>::new();
        self.apply_to_builder(&mut builder, registry)?;
        builder.build()
    }
}

/// Configuration builder
pub struct ConfigBuilder {
    kind: ContainerKind,
    slots: Vec<SlotConfig>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            slots: Vec::new(),
        }
    }

    /// Add a slot using its default initializer
    pub fn add_slot(&mut self, name: &str) -> &mut Self {
        self.slots.push(SlotConfig {
            name: name.to_string(),
            initializer: None,
        });
        self
    }

    /// Add a slot fed by a named registry factory
    pub fn add_slot_from(&mut self, name: &str, initializer: &str) -> &mut Self {
        self.slots.push(SlotConfig {
            name: name.to_string(),
            initializer: Some(initializer.to_string()),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> ContainerConfig {
        ContainerConfig {
            kind: self.kind,
            slots: self.slots,
        }
    }
}

// Example configuration file format:
// ```toml
// kind = "injectables"
//
// [[slots]]
// name = "logger"
//
// [[slots]]
// name = "database"
// initializer = "initPostgres"
// ```
