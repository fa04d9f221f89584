//! Logical-name registry for service handles.
//!
//! Providers register a handle once under a logical name such as `shipping.vessel`;
//! consumers resolve it by the same name and the interface type they expect, without
//! knowing what stands behind it. This plays the part service discovery plays between
//! processes.
//!
//! - Key = (interface type name, logical name). `T` may be a trait object.
//! - Value = `Arc<T>` stored as `Box<dyn Any + Send + Sync>`, downcast on read.
//! - Re-registering a name replaces the handle; `Arc`s already resolved stay valid.

use parking_lot::RwLock;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

/// Logical name of the consignment service.
pub const CONSIGNMENT_SERVICE: &str = "shipping.consignment";

/// Logical name of the vessel capability service.
pub const VESSEL_SERVICE: &str = "shipping.vessel";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no service registered as '{name}' for {interface}")]
    NotFound {
        name: String,
        interface: &'static str,
    },
}

type Key = (&'static str, String);
type Boxed = Box<dyn Any + Send + Sync>;

/// Registry of service handles keyed by interface type and logical name.
#[derive(Default)]
pub struct ServiceRegistry {
    map: RwLock<HashMap<Key, Boxed>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` as the `T` known by `name`.
    pub fn register<T>(&self, name: impl Into<String>, handle: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(name = %name, interface = type_name::<T>(), "Service registered");
        self.map
            .write()
            .insert((type_name::<T>(), name), Box::new(handle));
    }

    /// Look up the `T` registered under `name`.
    pub fn resolve<T>(&self, name: &str) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let not_found = || RegistryError::NotFound {
            name: name.to_string(),
            interface: type_name::<T>(),
        };
        let map = self.map.read();
        map.get(&(type_name::<T>(), name.to_string()))
            .and_then(|boxed| boxed.downcast_ref::<Arc<T>>())
            .cloned()
            .ok_or_else(not_found)
    }

    /// Remove the `T` registered under `name`, returning it if present.
    pub fn deregister<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let boxed = self.map.write().remove(&(type_name::<T>(), name.to_string()))?;
        boxed.downcast::<Arc<T>>().ok().map(|handle| *handle)
    }

    /// Drop every registered handle.
    pub fn clear(&self) {
        self.map.write().clear();
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct Harbour(&'static str);

    impl Greeter for Harbour {
        fn greet(&self) -> String {
            format!("ahoy from {}", self.0)
        }
    }

    #[test]
    fn resolves_trait_objects_by_name() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>("port.north", Arc::new(Harbour("north")));
        registry.register::<dyn Greeter>("port.south", Arc::new(Harbour("south")));

        let north = registry.resolve::<dyn Greeter>("port.north").unwrap();
        assert_eq!(north.greet(), "ahoy from north");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>("port.north", Arc::new(Harbour("north")));

        let err = registry.resolve::<dyn Greeter>("port.east").err().unwrap();
        assert!(matches!(err, RegistryError::NotFound { ref name, .. } if name == "port.east"));
    }

    #[test]
    fn same_name_different_interface_is_separate() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>("port", Arc::new(Harbour("north")));

        assert!(registry.resolve::<Harbour>("port").is_err());
    }

    #[test]
    fn reregistering_replaces_handle() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>("port", Arc::new(Harbour("old")));
        let held = registry.resolve::<dyn Greeter>("port").unwrap();
        registry.register::<dyn Greeter>("port", Arc::new(Harbour("new")));

        assert_eq!(registry.resolve::<dyn Greeter>("port").unwrap().greet(), "ahoy from new");
        assert_eq!(held.greet(), "ahoy from old");
    }

    #[test]
    fn deregister_and_clear() {
        let registry = ServiceRegistry::new();
        registry.register::<dyn Greeter>("a", Arc::new(Harbour("a")));
        registry.register::<dyn Greeter>("b", Arc::new(Harbour("b")));

        assert!(registry.deregister::<dyn Greeter>("a").is_some());
        assert!(registry.deregister::<dyn Greeter>("a").is_none());
        registry.clear();
        assert!(registry.is_empty());
    }
}
