//! The `Optionals` and `Injectables` containers
//!
//! Both variants behave identically; they differ only in name and in the
//! name of their validation method. Concrete containers embed one of them,
//! implement [`OptionalContainer`] by handing out the embedded slots, and
//! implement `AsRef` to the variant to pick up its validation method.

use std::sync::Arc;

use crate::builder::ContainerBuilder;
use crate::container::{ContainerKind, DependencyContainer};
use crate::dependency::Dependency;
use crate::error::DiResult;

/// Anything that exposes a registry of optional dependency slots
pub trait OptionalContainer {
    /// The underlying slot registry
    fn slots(&self) -> &DependencyContainer;

    /// Mutable access to the underlying slot registry
    fn slots_mut(&mut self) -> &mut DependencyContainer;

    /// Variant the container is built on
    fn kind(&self) -> ContainerKind {
        self.slots().kind()
    }

    /// Read a slot; absent slots read as `None`
    fn get(&self, name: &str) -> Option<Arc<dyn Dependency>> {
        self.slots().get(name)
    }

    /// Read a slot as a concrete type
    fn get_as<T: Dependency>(&self, name: &str) -> Option<Arc<T>>
    where
        Self: Sized,
    {
        self.slots().get_as::<T>(name)
    }

    /// Populate a slot through its initializer
    fn initialize(&mut self, name: &str) -> DiResult<()> {
        self.slots_mut().initialize(name)
    }

    /// Run an initializer by its `init<Name>` method name
    fn call(&mut self, method: &str) -> DiResult<()> {
        self.slots_mut().call(method)
    }

    /// Check that every slot has a matching initializer
    fn validate(&self) -> DiResult<()> {
        self.slots().validate()
    }
}

/// A container variant a [`ContainerBuilder`] can produce
pub trait ContainerVariant: Sized {
    /// Kind stamped on containers of this variant
    const KIND: ContainerKind;

    /// Wrap a finished slot registry
    fn from_container(container: DependencyContainer) -> Self;
}

macro_rules! container_variant {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $validation:ident, $require_valid:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            slots: DependencyContainer,
        }

        impl $name {
            /// Create a container with no slots
            pub fn new() -> Self {
                Self {
                    slots: DependencyContainer::new(ContainerKind::$kind),
                }
            }

            /// Create a builder for a container of this variant
            pub fn builder() -> ContainerBuilder<Self> {
                ContainerBuilder::new()
            }
        }

        #[doc = concat!("Validation entry point for `", stringify!($name), "` and containers built on it")]
        pub trait $validation: OptionalContainer {
            /// Check that every slot has an `init<Name>` initializer
            ///
            /// Meant for tests. Reports the first slot, in declaration order,
            /// that has no initializer.
            fn $require_valid(&self) -> DiResult<()> {
                self.validate()
            }
        }

        impl<C: OptionalContainer + AsRef<$name>> $validation for C {}

        impl AsRef<$name> for $name {
            fn as_ref(&self) -> &$name {
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ContainerVariant for $name {
            const KIND: ContainerKind = ContainerKind::$kind;

            fn from_container(slots: DependencyContainer) -> Self {
                Self { slots }
            }
        }

        impl OptionalContainer for $name {
            fn slots(&self) -> &DependencyContainer {
                &self.slots
            }

            fn slots_mut(&mut self) -> &mut DependencyContainer {
                &mut self.slots
            }
        }
    };
}

container_variant!(
    /// Container of optional dependencies
    Optionals,
    Optionals,
    OptionalsValidation,
    require_valid_optionals
);

container_variant!(
    /// Container of injectable dependencies
    Injectables,
    Injectables,
    InjectablesValidation,
    require_valid_injectables
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_container(container: &dyn OptionalContainer, kind: ContainerKind) {
        assert_eq!(container.kind(), kind);
        assert!(container.get("anything").is_none());
        container.validate().unwrap();
    }

    #[test]
    fn test_empty_variants() {
        assert_container(&Optionals::new(), ContainerKind::Optionals);
        assert_container(&Injectables::default(), ContainerKind::Injectables);
        assert!(Optionals::new().require_valid_optionals().is_ok());
        assert!(Injectables::new().require_valid_injectables().is_ok());
    }

    #[test]
    fn test_builder_stamps_kind() {
        let injectables = Injectables::builder().build().unwrap();
        assert_eq!(injectables.kind(), ContainerKind::Injectables);
        assert!(injectables.slots().is_empty());
    }
}
