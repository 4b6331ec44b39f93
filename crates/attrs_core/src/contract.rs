//! Attribute contract types.
//!
//! This module contains the core types describing a consumer type's attribute
//! contract: which attribute names exist, which are required, which carry a
//! default value, and whether the one-shot callable form is enabled.

use serde::{Deserialize, Serialize};

use crate::AttrValue;

/// A single declared attribute.
///
/// An attribute is either required (no default) or defaulted. Specs are owned
/// by the [`Contract`] they were declared in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    name: String,
    default: Option<AttrValue>,
}

impl AttributeSpec {
    /// Creates a required attribute spec.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Creates a defaulted attribute spec.
    pub fn defaulted(name: impl Into<String>, default: impl Into<AttrValue>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared default value, if any.
    pub fn default(&self) -> Option<&AttrValue> {
        self.default.as_ref()
    }

    /// Returns true if this attribute carries a default value.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// The declared attribute contract for one consumer type.
///
/// A `Contract` is the ordered collection of [`AttributeSpec`]s a consumer
/// type declared, plus the optional name of the primary operation invoked by
/// the one-shot callable form. Contracts are created once through
/// [`ContractBuilder`](crate::ContractBuilder) and are immutable afterwards.
///
/// # Example
///
/// ```rust
/// use attrs_core::ContractBuilder;
///
/// let contract = ContractBuilder::new("http_probe")
///     .required("endpoint")
///     .defaulted("retries", 3)
///     .callable()
///     .build()
///     .unwrap();
///
/// assert!(contract.contains("endpoint"));
/// assert!(contract.is_callable());
/// assert_eq!(contract.required().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    name: String,
    attributes: Vec<AttributeSpec>,
    primary_operation: Option<String>,
}

impl Contract {
    /// Conventional name of the primary operation.
    pub const DEFAULT_OPERATION: &'static str = "call";

    pub(crate) fn new(
        name: String,
        attributes: Vec<AttributeSpec>,
        primary_operation: Option<String>,
    ) -> Self {
        Self {
            name,
            attributes,
            primary_operation,
        }
    }

    /// Contract name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if an attribute with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|spec| spec.name() == name)
    }

    /// Looks up a declared attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|spec| spec.name() == name)
    }

    /// Iterates over all declared attributes, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter()
    }

    /// Iterates over the required attributes, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|spec| !spec.has_default())
    }

    /// Iterates over the defaulted attributes, in declaration order.
    pub fn defaulted(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|spec| spec.has_default())
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attributes are declared.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns true if the one-shot callable form is enabled.
    pub fn is_callable(&self) -> bool {
        self.primary_operation.is_some()
    }

    /// Name of the primary operation, if the callable form is enabled.
    pub fn primary_operation(&self) -> Option<&str> {
        self.primary_operation.as_deref()
    }
}
