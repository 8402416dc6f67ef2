//! Dependency values and initializer factories

use downcast_rs::{impl_downcast, DowncastSync};
use std::fmt;
use std::sync::Arc;

/// Trait that every value stored in a slot implements
pub trait Dependency: DowncastSync {}

impl_downcast!(sync Dependency);

/// Blanket implementation for all suitable types
impl<T: std::any::Any + Send + Sync> Dependency for T {}

/// Factory that builds a slot's value
pub type InitializerFn = Arc<dyn Fn() -> Arc<dyn Dependency> + Send + Sync>;

/// A named initializer, the `init<Name>` half of a slot
#[derive(Clone)]
pub struct Initializer {
    /// Method-style name, e.g. `initTrueOrFalse`
    pub name: String,
    /// Type name of the value the factory produces
    pub produces: &'static str,
    factory: InitializerFn,
}

impl Initializer {
    /// Wrap a typed factory
    pub fn new<T, F>(name: impl Into<String>, factory: F) -> Self
    where
        T: Dependency,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            produces: std::any::type_name::<T>(),
            factory: Arc::new(move || Arc::new(factory()) as Arc<dyn Dependency>),
        }
    }

    /// Build a fresh value
    pub fn create(&self) -> Arc<dyn Dependency> {
        (self.factory)()
    }

    /// Same initializer under another name
    #[cfg(feature = "config")]
    pub(crate) fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            produces: self.produces,
            factory: self.factory.clone(),
        }
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("name", &self.name)
            .field("produces", &self.produces)
            .finish()
    }
}
