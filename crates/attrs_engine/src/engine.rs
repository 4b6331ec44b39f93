//! The construction engine.
//!
//! This module turns a contract plus supplied keyword arguments into a
//! fully-bound [`Instance`], or fails with a classified error. Validation
//! runs strictly before any binding, so a partial instance is never
//! observable.

use attrs_core::Contract;
use tracing::debug;

use crate::{Args, ConstructError, Instance, Result};

/// Constructs an [`Instance`] of `contract` from the supplied arguments.
///
/// The checks run in a fixed order:
///
/// 1. every supplied keyword must be declared — otherwise
///    [`ConstructError::UnknownAttributes`], naming every undeclared keyword;
/// 2. every required attribute must be supplied — otherwise
///    [`ConstructError::MissingAttributes`], naming every absent one;
/// 3. each attribute is then bound in declaration order, to the supplied
///    value if present, else to a fresh copy of its declared default.
///
/// Unknown keywords are checked before missing ones, so when both conditions
/// hold the unknown-keyword error wins. Defaults are cloned per call; no
/// default value is ever shared between instances.
///
/// # Example
///
/// ```rust
/// use attrs_core::ContractBuilder;
/// use attrs_engine::{Args, construct};
///
/// let contract = ContractBuilder::new("http_probe")
///     .required("endpoint")
///     .defaulted("retries", 3)
///     .build()
///     .unwrap();
///
/// let instance = construct(&contract, Args::new().with("endpoint", "https://example.com")).unwrap();
/// assert_eq!(instance.get("retries").unwrap().as_int(), Some(3));
/// ```
pub fn construct(contract: &Contract, args: Args) -> Result<Instance> {
    let unknown: Vec<String> = args
        .names()
        .filter(|name| !contract.contains(name))
        .map(String::from)
        .collect();
    if !unknown.is_empty() {
        return Err(ConstructError::unknown_attributes(contract.name(), unknown));
    }

    let missing: Vec<String> = contract
        .required()
        .filter(|spec| !args.contains(spec.name()))
        .map(|spec| spec.name().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConstructError::missing_attributes(contract.name(), missing));
    }

    let mut bindings = Vec::with_capacity(contract.len());
    for spec in contract.attributes() {
        let value = match (args.get(spec.name()), spec.default()) {
            (Some(value), _) => value.clone(),
            (None, Some(default)) => default.clone(),
            // Unreachable: attributes without a default passed the missing check.
            (None, None) => {
                return Err(ConstructError::missing_attributes(
                    contract.name(),
                    vec![spec.name().to_string()],
                ));
            }
        };
        bindings.push((spec.name().to_string(), value));
    }

    debug!(
        contract = contract.name(),
        attributes = bindings.len(),
        "constructed instance"
    );
    Ok(Instance::new(bindings))
}
