//! Named services for pool construction
//!
//! A [`ServiceRegistry`] is an ordinary value: callers build one, register
//! what they need and pass it to the pools they construct.
//!
//! # Example
//!
//! ```rust
//! use adaptq_pool::services::ServiceRegistry;
//!
//! let registry = ServiceRegistry::with_defaults();
//!
//! let jw = registry.transform("jw").unwrap();
//! assert_eq!(jw.name(), "jw");
//!
//! let pool = registry.pool("singlet-adapted-uccsd").unwrap();
//! assert!(pool.is_number_of_particles_required());
//! ```

use crate::pool::OperatorPool;
use crate::singlet_adapted_uccsd::SingletAdaptedUccsd;
use crate::uccsd::Uccsd;
use crate::{PoolError, Result};
use adaptq_gates::{ExpITheta, InstructionFactory};
use adaptq_transform::{FermionTransform, JordanWigner};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of fermion transforms and instruction factories, keyed by name
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    transforms: HashMap<String, Arc<dyn FermionTransform>>,
    factories: HashMap<String, Arc<dyn InstructionFactory>>,
}

impl ServiceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding "jw" and "exp_i_theta"
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_transform(Arc::new(JordanWigner));
        registry.register_factory(Arc::new(ExpITheta));
        registry
    }

    /// Register a transform under its own name
    ///
    /// If a transform with the same name already exists, it will be replaced.
    pub fn register_transform(&mut self, transform: Arc<dyn FermionTransform>) {
        self.transforms
            .insert(transform.name().to_string(), transform);
    }

    /// Register an instruction factory under its own name
    ///
    /// If a factory with the same name already exists, it will be replaced.
    pub fn register_factory(&mut self, factory: Arc<dyn InstructionFactory>) {
        self.factories.insert(factory.name().to_string(), factory);
    }

    /// Look up a transform
    ///
    /// # Errors
    /// Returns [`PoolError::ServiceUnavailable`] if nothing is registered
    /// under `name`.
    pub fn transform(&self, name: &str) -> Result<Arc<dyn FermionTransform>> {
        self.transforms
            .get(name)
            .cloned()
            .ok_or_else(|| PoolError::service_unavailable("fermion transform", name))
    }

    /// Look up an instruction factory
    ///
    /// # Errors
    /// Returns [`PoolError::ServiceUnavailable`] if nothing is registered
    /// under `name`.
    pub fn factory(&self, name: &str) -> Result<Arc<dyn InstructionFactory>> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| PoolError::service_unavailable("instruction factory", name))
    }

    /// Construct a pool by name, wired to this registry's services
    pub fn pool(&self, name: &str) -> Result<Box<dyn OperatorPool>> {
        match name {
            SingletAdaptedUccsd::NAME => Ok(Box::new(SingletAdaptedUccsd::from_registry(self)?)),
            Uccsd::NAME => Ok(Box::new(Uccsd::from_registry(self)?)),
            _ => Err(PoolError::service_unavailable("operator pool", name)),
        }
    }

    /// Sorted names of registered transforms
    pub fn transform_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted names of registered factories
    pub fn factory_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("transforms", &self.transform_names())
            .field("factories", &self.factory_names())
            .finish()
    }
}
