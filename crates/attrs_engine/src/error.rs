//! Error types for construction and invocation.

use attrs_core::ContractError;
use thiserror::Error;

/// Result type for construction operations.
pub type Result<T> = std::result::Result<T, ConstructError>;

/// Errors that can occur when constructing or invoking a consumer type.
///
/// All variants are invalid-argument class failures surfaced synchronously to
/// the caller. Callers match on the variant, not on message text.
#[derive(Debug, Error)]
pub enum ConstructError {
    /// Supplied keyword(s) not present in the declared contract
    #[error("Unknown attribute(s) [{}] supplied to contract '{contract}'", .attributes.join(", "))]
    UnknownAttributes {
        /// Contract the keywords were supplied to
        contract: String,
        /// Every undeclared keyword, in supply order
        attributes: Vec<String>,
    },

    /// Required attribute(s) without a default were not supplied
    #[error("Missing required attribute(s) [{}] for contract '{contract}'", .attributes.join(", "))]
    MissingAttributes {
        /// Contract being constructed
        contract: String,
        /// Every absent required attribute, in declaration order
        attributes: Vec<String>,
    },

    /// One-shot invocation requested on a contract that does not support it
    #[error("Operation '{operation}' is not enabled for contract '{contract}'")]
    UnsupportedOperation {
        /// Contract the invocation targeted
        contract: String,
        /// Operation that was requested
        operation: String,
    },

    /// Declaring the contract failed on first use
    #[error(transparent)]
    Declaration(#[from] ContractError),
}

impl ConstructError {
    /// Creates a new unknown-attributes error.
    pub fn unknown_attributes(contract: impl Into<String>, attributes: Vec<String>) -> Self {
        Self::UnknownAttributes {
            contract: contract.into(),
            attributes,
        }
    }

    /// Creates a new missing-attributes error.
    pub fn missing_attributes(contract: impl Into<String>, attributes: Vec<String>) -> Self {
        Self::MissingAttributes {
            contract: contract.into(),
            attributes,
        }
    }

    /// Creates a new unsupported-operation error.
    pub fn unsupported_operation(
        contract: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self::UnsupportedOperation {
            contract: contract.into(),
            operation: operation.into(),
        }
    }
}
