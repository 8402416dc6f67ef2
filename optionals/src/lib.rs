//! Optional dependency containers
//!
//! A container declares named dependency slots. Reading a slot that was
//! never declared, or never populated, yields `None` instead of an error.
//! Every slot `fooBar` is expected to have an initializer named
//! `initFooBar`; that contract is only checked when asked, through
//! `require_valid_optionals` / `require_valid_injectables`, which are meant
//! to be called from tests.
//!
//! The crate ships two variants with identical behaviour, [`Optionals`] and
//! [`Injectables`]. Concrete containers embed one of them and implement
//! [`OptionalContainer`].

pub mod builder;
pub mod container;
pub mod dependency;
pub mod error;
pub mod naming;
pub mod variants;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "config")]
pub mod registry;

pub use builder::{ContainerBuilder, Module};
pub use container::{ContainerKind, DependencyContainer};
pub use dependency::{Dependency, Initializer, InitializerFn};
pub use error::{DiError, DiResult};
pub use naming::initializer_name;
pub use variants::{
    ContainerVariant, Injectables, InjectablesValidation, OptionalContainer, Optionals,
    OptionalsValidation,
};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        ContainerBuilder, ContainerKind, Dependency, DiError, DiResult, Injectables,
        InjectablesValidation, OptionalContainer, Optionals, OptionalsValidation,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{ConfigBuilder, ContainerConfig};

    #[cfg(feature = "config")]
    pub use crate::registry::InitializerRegistry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_container() {
        let mut builder = Optionals::builder();
        builder.slot_with_initializer("greeting", || "Hello, optionals!".to_string());

        let mut optionals = builder.build().unwrap();
        assert!(optionals.get("greeting").is_none());

        optionals.initialize("greeting").unwrap();
        let greeting = optionals.get_as::<String>("greeting").unwrap();
        assert_eq!(greeting.as_str(), "Hello, optionals!");
    }
}
