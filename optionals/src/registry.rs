//! Initializer registry for configuration-based containers

use rustc_hash::FxHashMap;

use crate::dependency::{Dependency, Initializer};
use crate::error::{DiError, DiResult};

/// Named initializer factories that configured slots can draw from
#[derive(Default, Clone)]
pub struct InitializerRegistry {
    factories: FxHashMap<String, Initializer>,
}

impl InitializerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a name
    pub fn register_factory<T, F>(&mut self, name: &str, factory: F) -> DiResult<()>
    where
        T: Dependency,
        F: Fn() -> T + Send + Sync + 'static,
    {
        if self.factories.contains_key(name) {
            return Err(DiError::DuplicateInitializer(name.to_string()));
        }
        self.factories
            .insert(name.to_string(), Initializer::new(name, factory));
        Ok(())
    }

    /// Get the factory registered under a name as an initializer
    pub fn get_initializer(&self, name: &str) -> Option<Initializer> {
        self.factories.get(name).cloned()
    }

    /// Whether a factory is registered under a name
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered factories
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Macro to register several factories at once
#[macro_export]
macro_rules! register_initializers {
    ($registry:expr, $($name:expr => $factory:expr),* $(,)?) => {
        {
            let registry: &mut $crate::registry::InitializerRegistry = $registry;
            $(
                registry.register_factory($name, $factory)?;
            )*
            Ok::<(), $crate::error::DiError>(())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_fetch() {
        let mut registry = InitializerRegistry::new();
        registry.register_factory("initPort", || 8080u16).unwrap();

        let initializer = registry.get_initializer("initPort").unwrap();
        assert_eq!(initializer.name, "initPort");
        assert_eq!(initializer.produces, "u16");
        assert_eq!(initializer.create().downcast_ref::<u16>(), Some(&8080));
        assert!(registry.get_initializer("initHost").is_none());
    }

    #[test]
    fn test_duplicate_factory_rejected() {
        let mut registry = InitializerRegistry::new();
        registry.register_factory("initPort", || 1u16).unwrap();
        assert_eq!(
            registry.register_factory("initPort", || 2u16),
            Err(DiError::DuplicateInitializer("initPort".to_string()))
        );
    }

    #[test]
    fn test_register_initializers_macro() {
        fn fill(registry: &mut InitializerRegistry) -> DiResult<()> {
            crate::register_initializers!(registry,
                "initPort" => || 8080u16,
                "initHost" => || "localhost".to_string(),
            )
        }

        let mut registry = InitializerRegistry::new();
        fill(&mut registry).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("initHost"));
    }
}
