//! Error types for attribute contract declaration.

use thiserror::Error;

/// Result type for declaration operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Errors that can occur while declaring an attribute contract.
///
/// Declaration errors are fatal for the affected contract: a malformed
/// declaration is never registered, so no construction can run against it.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The same attribute name was declared more than once
    #[error("Duplicate attribute '{attribute}' declared in contract '{contract}'")]
    DuplicateAttribute {
        /// Contract being declared
        contract: String,
        /// Offending attribute name
        attribute: String,
    },

    /// A contract was already registered for the consumer type
    #[error("Contract '{contract}' is already declared for this type")]
    AlreadyDeclared {
        /// Contract that was registered first
        contract: String,
    },
}

impl ContractError {
    /// Creates a new duplicate attribute error.
    pub fn duplicate_attribute(
        contract: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self::DuplicateAttribute {
            contract: contract.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates a new already-declared error.
    pub fn already_declared(contract: impl Into<String>) -> Self {
        Self::AlreadyDeclared {
            contract: contract.into(),
        }
    }
}
