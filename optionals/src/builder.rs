//! Container builder for declaring slots and initializers

use std::marker::PhantomData;
use std::sync::Arc;

use crate::container::DependencyContainer;
use crate::dependency::{Dependency, Initializer};
use crate::error::{DiError, DiResult};
use crate::naming;
use crate::variants::ContainerVariant;

/// Builder for a container's slot and initializer registry
///
/// Registration problems (bad names, duplicates, collisions) are held back
/// and reported by `build`. Once one has been recorded, later registrations
/// are ignored so the first problem is the one reported.
pub struct ContainerBuilder<C> {
    container: DependencyContainer,
    error: Option<DiError>,
    _variant: PhantomData<C>,
}

impl<C: ContainerVariant> ContainerBuilder<C> {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: DependencyContainer::new(C::KIND),
            error: None,
            _variant: PhantomData,
        }
    }

    fn record(
        &mut self,
        register: impl FnOnce(&mut DependencyContainer) -> DiResult<()>,
    ) -> &mut Self {
        if self.error.is_none() {
            if let Err(error) = register(&mut self.container) {
                self.error = Some(error);
            }
        }
        self
    }

    /// Declare an unset slot
    pub fn declare(&mut self, name: &str) -> &mut Self {
        self.record(|container| container.declare(name, None))
    }

    /// Declare a slot that starts out holding `value`
    pub fn declare_with_default<T: Dependency>(&mut self, name: &str, value: T) -> &mut Self {
        let value: Arc<dyn Dependency> = Arc::new(value);
        self.record(|container| container.declare(name, Some(value)))
    }

    /// Register an initializer under an `init<Name>` method name
    pub fn initializer<T, F>(&mut self, method: &str, factory: F) -> &mut Self
    where
        T: Dependency,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let initializer = Initializer::new(method, factory);
        self.record(|container| container.register_initializer(initializer))
    }

    /// Register an already built initializer
    pub fn register_initializer(&mut self, initializer: Initializer) -> &mut Self {
        self.record(|container| container.register_initializer(initializer))
    }

    /// Declare a slot together with its initializer
    ///
    /// The initializer is registered under the name derived from the slot,
    /// so the pair always validates.
    pub fn slot_with_initializer<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: Dependency,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.record(|container| {
            let method = naming::initializer_name(name)?;
            container.declare(name, None)?;
            container.register_initializer(Initializer::new(method, factory))
        })
    }

    /// Build the container
    pub fn build(self) -> DiResult<C> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(C::from_container(self.container)),
        }
    }
}

impl<C: ContainerVariant> Default for ContainerBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension methods for fluent builder pattern
impl<C: ContainerVariant> ContainerBuilder<C> {
    /// Add multiple slots using a configuration function
    pub fn add_slots<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        configure(&mut self);
        self
    }

    /// Add the slots a module declares
    pub fn add_module<M: Module<C>>(mut self, module: M) -> Self {
        module.configure(&mut self);
        self
    }
}

/// A reusable group of slot declarations
pub trait Module<C> {
    /// Declare slots and initializers for this module
    fn configure(&self, builder: &mut ContainerBuilder<C>);
}
