//! Fully-bound instances produced by the construction engine.

use attrs_core::AttrValue;

/// A constructed instance: one resolved value per declared attribute.
///
/// Instances are only created by [`construct`](crate::construct), after
/// validation has passed, so every declared attribute is bound. Bindings are
/// write-once: the accessor surface is read-only and keeps declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    bindings: Vec<(String, AttrValue)>,
}

impl Instance {
    pub(crate) fn new(bindings: Vec<(String, AttrValue)>) -> Self {
        Self { bindings }
    }

    /// Gets the bound value for an attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Returns true if the attribute is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|(n, _)| n == name)
    }

    /// Iterates over bound attribute names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over bound values, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &AttrValue> {
        self.bindings.iter().map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` bindings, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound attributes.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the instance has no bound attributes.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
