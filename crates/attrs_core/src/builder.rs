//! Builder for declaring attribute contracts.
//!
//! This module provides the fluent declaration API consumers use to describe
//! their attribute contract once, at type-definition time.

use std::collections::HashSet;

use crate::{AttrValue, AttributeSpec, Contract, ContractError, Result};

/// Builder for creating a [`Contract`].
///
/// Attributes are recorded in declaration order. Names must be unique across
/// the union of required and defaulted attributes; [`build`](Self::build)
/// rejects duplicates.
///
/// # Example
///
/// ```rust
/// use attrs_core::ContractBuilder;
///
/// let contract = ContractBuilder::new("mailer")
///     .required("recipient")
///     .required("subject")
///     .defaulted("retries", 3)
///     .callable()
///     .build()
///     .unwrap();
///
/// assert_eq!(contract.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    name: String,
    attributes: Vec<AttributeSpec>,
    primary_operation: Option<String>,
}

impl ContractBuilder {
    /// Creates a new contract builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Contract name, used in diagnostics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declares a required attribute.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(AttributeSpec::required(name));
        self
    }

    /// Declares a defaulted attribute.
    ///
    /// The default is resolved independently for every construction that
    /// omits the attribute.
    pub fn defaulted(mut self, name: impl Into<String>, default: impl Into<AttrValue>) -> Self {
        self.attributes.push(AttributeSpec::defaulted(name, default));
        self
    }

    /// Enables the one-shot callable form with the conventional operation
    /// name (`"call"`).
    pub fn callable(self) -> Self {
        self.callable_as(Contract::DEFAULT_OPERATION)
    }

    /// Enables the one-shot callable form with a custom primary operation
    /// name.
    ///
    /// The named operation is only checked against the consumer type at
    /// invocation time, not here.
    pub fn callable_as(mut self, operation: impl Into<String>) -> Self {
        self.primary_operation = Some(operation.into());
        self
    }

    /// Builds the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::DuplicateAttribute`] if an attribute name is
    /// declared more than once.
    pub fn build(self) -> Result<Contract> {
        let mut seen = HashSet::new();
        for spec in &self.attributes {
            if !seen.insert(spec.name()) {
                return Err(ContractError::duplicate_attribute(&self.name, spec.name()));
            }
        }

        Ok(Contract::new(
            self.name,
            self.attributes,
            self.primary_operation,
        ))
    }
}
