//! Core slot container shared by both container variants

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::dependency::{Dependency, Initializer};
use crate::error::{DiError, DiResult};
use crate::naming;

/// Which flavour of container a `DependencyContainer` backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum ContainerKind {
    Optionals,
    Injectables,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Optionals => write!(f, "Optionals"),
            ContainerKind::Injectables => write!(f, "Injectables"),
        }
    }
}

/// One named slot
#[derive(Clone)]
struct SlotEntry {
    name: String,
    /// Derived `init<Name>`
    initializer: String,
    value: Option<Arc<dyn Dependency>>,
}

/// Ordered set of named dependency slots plus their initializers
///
/// Slots keep the order in which they were declared or first assigned;
/// validation walks them in that order.
#[derive(Clone)]
pub struct DependencyContainer {
    kind: ContainerKind,
    slots: Vec<SlotEntry>,
    /// Slot name to position in `slots`
    slot_index: FxHashMap<String, usize>,
    /// Derived initializer name to position in `slots`
    initializer_index: FxHashMap<String, usize>,
    /// Registered initializers by method name
    initializers: FxHashMap<String, Initializer>,
}

impl DependencyContainer {
    /// Create an empty container
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            slots: Vec::new(),
            slot_index: FxHashMap::default(),
            initializer_index: FxHashMap::default(),
            initializers: FxHashMap::default(),
        }
    }

    /// Variant this container backs
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Declare a slot, optionally with a default value
    pub fn declare(&mut self, name: &str, default: Option<Arc<dyn Dependency>>) -> DiResult<()> {
        if self.slot_index.contains_key(name) {
            return Err(DiError::DuplicateSlot(name.to_string()));
        }
        self.push_slot(name, default)?;
        Ok(())
    }

    fn push_slot(&mut self, name: &str, value: Option<Arc<dyn Dependency>>) -> DiResult<usize> {
        let initializer = naming::initializer_name(name)?;

        if let Some(&existing) = self.initializer_index.get(&initializer) {
            return Err(DiError::InitializerNameCollision {
                slot: name.to_string(),
                existing: self.slots[existing].name.clone(),
                initializer,
            });
        }

        let position = self.slots.len();
        trace!("{}: slot '{}' -> {}", self.kind, name, initializer);
        self.slot_index.insert(name.to_string(), position);
        self.initializer_index.insert(initializer.clone(), position);
        self.slots.push(SlotEntry {
            name: name.to_string(),
            initializer,
            value,
        });
        Ok(position)
    }

    /// Register an initializer under its `init<Name>` method name
    pub fn register_initializer(&mut self, initializer: Initializer) -> DiResult<()> {
        naming::check_initializer_name(&initializer.name)?;

        if self.initializers.contains_key(&initializer.name) {
            return Err(DiError::DuplicateInitializer(initializer.name));
        }

        self.initializers
            .insert(initializer.name.clone(), initializer);
        Ok(())
    }

    /// Look up a slot's current value
    ///
    /// Unknown names, unset slots and names that could never be slots all
    /// read as `None`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Dependency>> {
        let value = self
            .slot_index
            .get(name)
            .and_then(|&position| self.slots[position].value.clone());

        if value.is_none() {
            trace!("{}: '{}' is absent", self.kind, name);
        }
        value
    }

    /// Look up a slot's value as a concrete type
    ///
    /// A value of some other type reads as `None`.
    pub fn get_as<T: Dependency>(&self, name: &str) -> Option<Arc<T>> {
        self.get(name)?.downcast_arc::<T>().ok()
    }

    /// Whether the slot exists and holds a value
    pub fn is_set(&self, name: &str) -> bool {
        self.slot_index
            .get(name)
            .is_some_and(|&position| self.slots[position].value.is_some())
    }

    /// Whether the slot exists, set or not
    pub fn has_slot(&self, name: &str) -> bool {
        self.slot_index.contains_key(name)
    }

    /// Whether an initializer is registered under this method name
    pub fn has_initializer(&self, method: &str) -> bool {
        self.initializers.contains_key(method)
    }

    /// The initializer registered under this method name
    pub fn initializer(&self, method: &str) -> Option<&Initializer> {
        self.initializers.get(method)
    }

    /// Slot names in declaration order
    pub fn slot_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Assign a value to a slot, replacing any previous one
    ///
    /// Assigning to an undeclared name creates the slot at the end of the
    /// declaration order.
    pub fn set<T: Dependency>(&mut self, name: &str, value: T) -> DiResult<()> {
        self.set_arc(name, Arc::new(value))
    }

    /// Assign an already shared value to a slot
    pub fn set_arc(&mut self, name: &str, value: Arc<dyn Dependency>) -> DiResult<()> {
        let position = match self.slot_index.get(name) {
            Some(&position) => position,
            None => {
                debug!("{}: creating slot '{}' on assignment", self.kind, name);
                self.push_slot(name, None)?
            }
        };

        debug!("{}: assigning slot '{}'", self.kind, name);
        self.slots[position].value = Some(value);
        Ok(())
    }

    /// Return a slot to the unset state, handing back its previous value
    pub fn unset(&mut self, name: &str) -> Option<Arc<dyn Dependency>> {
        let position = *self.slot_index.get(name)?;
        self.slots[position].value.take()
    }

    /// Run the slot's `init<Name>` initializer and store the result
    pub fn initialize(&mut self, name: &str) -> DiResult<()> {
        let position = *self
            .slot_index
            .get(name)
            .ok_or_else(|| DiError::SlotNotFound(name.to_string()))?;
        let method = self.slots[position].initializer.clone();
        self.run_initializer(&method, position)
    }

    /// Run an initializer by method name, e.g. `initTrueOrFalse`
    ///
    /// The value lands in the slot whose derived initializer name matches.
    pub fn call(&mut self, method: &str) -> DiResult<()> {
        if !self.initializers.contains_key(method) {
            return Err(DiError::InitializerNotFound(method.to_string()));
        }
        let position = *self
            .initializer_index
            .get(method)
            .ok_or_else(|| DiError::SlotNotFound(method.to_string()))?;
        self.run_initializer(method, position)
    }

    fn run_initializer(&mut self, method: &str, position: usize) -> DiResult<()> {
        let initializer = self
            .initializers
            .get(method)
            .ok_or_else(|| DiError::InitializerNotFound(method.to_string()))?;

        let value = initializer.create();
        let slot = &mut self.slots[position];
        debug!(
            "{}: {} populated '{}' ({})",
            self.kind, method, slot.name, initializer.produces
        );
        slot.value = Some(value);
        Ok(())
    }

    /// Check that every slot has an initializer named after it
    ///
    /// Slots are checked in declaration order and the first one without an
    /// initializer is reported.
    pub fn validate(&self) -> DiResult<()> {
        for slot in &self.slots {
            if !self.initializers.contains_key(&slot.initializer) {
                warn!(
                    "{}: slot '{}' has no '{}' initializer",
                    self.kind, slot.name, slot.initializer
                );
                return Err(DiError::InvalidOptionalDependency {
                    container: self.kind,
                    property: slot.name.clone(),
                    expected: slot.initializer.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for DependencyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots = f.debug_map();
        for slot in &self.slots {
            slots.entry(&slot.name, &slot.value.is_some());
        }
        slots.finish()?;
        write!(f, " ({}, {} initializers)", self.kind, self.initializers.len())
    }
}
