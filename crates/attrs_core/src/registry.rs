//! Process-wide contract registry.
//!
//! Contracts are declared once per consumer type and read on every
//! construction afterwards. The registry is keyed by the consumer type's
//! [`TypeId`], so each Rust type owns at most one contract.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{Contract, ContractError, Result};

/// A registry of declared attribute contracts.
///
/// The registry maps consumer types to their contracts, allowing construction
/// code to look up the declared attribute set for any participating type.
#[derive(Default)]
pub struct ContractRegistry {
    contracts: HashMap<TypeId, Arc<Contract>>,
}

impl ContractRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            contracts: HashMap::new(),
        }
    }

    /// Registers a contract for the consumer type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::AlreadyDeclared`] if `T` already has a
    /// registered contract. Declaration happens exactly once per type; there
    /// is no re-declaration path.
    pub fn register<T: 'static>(&mut self, contract: Contract) -> Result<Arc<Contract>> {
        let key = TypeId::of::<T>();
        if self.contracts.contains_key(&key) {
            return Err(ContractError::already_declared(contract.name()));
        }

        debug!(
            contract = contract.name(),
            consumer = type_name::<T>(),
            "registering contract"
        );
        let contract = Arc::new(contract);
        self.contracts.insert(key, Arc::clone(&contract));
        Ok(contract)
    }

    /// Gets the contract registered for `T`.
    pub fn get<T: 'static>(&self) -> Option<Arc<Contract>> {
        self.contracts.get(&TypeId::of::<T>()).cloned()
    }

    /// Returns true if `T` has a registered contract.
    pub fn contains<T: 'static>(&self) -> bool {
        self.contracts.contains_key(&TypeId::of::<T>())
    }

    /// Names of all registered contracts.
    pub fn names(&self) -> Vec<&str> {
        self.contracts.values().map(|c| c.name()).collect()
    }

    /// Number of registered contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns true if no contracts are registered.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl std::fmt::Debug for ContractRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractRegistry")
            .field("contracts", &self.names())
            .finish()
    }
}

static GLOBAL: Lazy<RwLock<ContractRegistry>> =
    Lazy::new(|| RwLock::new(ContractRegistry::new()));

/// The process-wide registry shared by all consumer types.
pub fn global() -> &'static RwLock<ContractRegistry> {
    &GLOBAL
}

fn read_global() -> RwLockReadGuard<'static, ContractRegistry> {
    global().read().unwrap_or_else(|e| e.into_inner())
}

fn write_global() -> RwLockWriteGuard<'static, ContractRegistry> {
    global().write().unwrap_or_else(|e| e.into_inner())
}

/// Gets the contract for `T` from the global registry, declaring it first if
/// this is the first use.
///
/// `build` runs at most once per type for the lifetime of the process;
/// concurrent first uses race on the write lock and exactly one registers.
/// Repeated calls return the already-registered contract.
///
/// # Errors
///
/// Propagates the declaration error from `build` unchanged. Nothing is
/// registered in that case, so a later call runs `build` again.
pub fn declare<T: 'static>(build: impl FnOnce() -> Result<Contract>) -> Result<Arc<Contract>> {
    if let Some(contract) = read_global().get::<T>() {
        return Ok(contract);
    }

    let contract = build()?;
    let mut registry = write_global();
    if let Some(existing) = registry.get::<T>() {
        // Lost the declaration race; the first registration wins.
        return Ok(existing);
    }
    registry.register::<T>(contract)
}
