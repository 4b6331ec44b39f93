//! # Attribute Contracts Core
//!
//! Core types for the Attribute Contracts Engine.
//!
//! This crate provides the declaration side of keyword-style construction: a
//! consumer type declares, once, which named attributes it is built from —
//! some required, some with default values — and the resulting [`Contract`]
//! is recorded in a process-wide [`registry`] keyed by the consumer type.
//! The construction engine (the `attrs_engine` crate) validates supplied
//! keyword arguments against that contract.
//!
//! ## Key Concepts
//!
//! - **Contract**: the ordered set of attributes declared for one type
//! - **AttributeSpec**: one attribute, required or carrying a default value
//! - **AttrValue**: the untyped value bound to an attribute
//! - **Registry**: process-wide, declare-once storage of contracts
//!
//! ## Example
//!
//! ```rust
//! use attrs_core::ContractBuilder;
//!
//! let contract = ContractBuilder::new("http_probe")
//!     .required("endpoint")
//!     .defaulted("retries", 3)
//!     .callable()
//!     .build()
//!     .unwrap();
//!
//! assert!(contract.contains("endpoint"));
//! assert_eq!(contract.get("retries").unwrap().default().unwrap().as_int(), Some(3));
//! ```

pub mod builder;
pub mod contract;
pub mod error;
pub mod registry;
pub mod value;

pub use builder::*;
pub use contract::*;
pub use error::*;
pub use registry::ContractRegistry;
pub use value::*;
