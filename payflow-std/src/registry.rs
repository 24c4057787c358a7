//! Named gateway lookup.

use crate::gateway::Gateway;
use payflow_core::RegistryError;
use std::collections::HashMap;
use std::sync::Arc;

/// A set of gateways addressed by name, e.g. one per payment provider.
///
/// Gateways are stored behind `Arc` so one lookup can be handed to several
/// concurrent callers.
#[derive(Default)]
pub struct GatewayRegistry {
    gateways: HashMap<String, Arc<Gateway>>,
}

impl GatewayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `gateway` under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AlreadyExists`] if the name is taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        gateway: impl Into<Arc<Gateway>>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.gateways.contains_key(&name) {
            return Err(RegistryError::AlreadyExists(name));
        }
        self.gateways.insert(name, gateway.into());
        Ok(())
    }

    /// The gateway registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<Gateway>> {
        self.gateways.get(name).cloned()
    }

    /// The gateway registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::GatewayNotFound`] if nothing is registered under it.
    pub fn gateway(&self, name: &str) -> Result<Arc<Gateway>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::GatewayNotFound(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gateways.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered gateways.
    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    /// Returns `true` if no gateway is registered.
    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}
