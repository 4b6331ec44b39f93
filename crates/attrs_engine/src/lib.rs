//! # Attribute Contracts Engine
//!
//! Construction engine and callable adapter for attribute contracts.
//!
//! This crate provides the construction side of keyword-style construction:
//! supplied [`Args`] are validated against a declared contract (from
//! `attrs_core`), defaults are resolved per call, and the result is a
//! read-only [`Instance`]. Consumer types opt in through [`FromArgs`], and
//! optionally [`Callable`] for the one-shot construct-then-invoke form.
//!
//! ## Example
//!
//! ```rust
//! use attrs_core::{Contract, ContractBuilder};
//! use attrs_engine::{Args, Callable, FromArgs, Instance};
//!
//! struct Echo {
//!     attrs: Instance,
//! }
//!
//! impl FromArgs for Echo {
//!     fn declare() -> attrs_core::Result<Contract> {
//!         ContractBuilder::new("echo")
//!             .required("message")
//!             .defaulted("repeat", 1)
//!             .callable()
//!             .build()
//!     }
//!
//!     fn from_instance(attrs: Instance) -> Self {
//!         Self { attrs }
//!     }
//! }
//!
//! impl Callable for Echo {
//!     type Output = String;
//!
//!     fn call(&self) -> String {
//!         let message = self.attrs.get("message").and_then(|v| v.as_str()).unwrap_or("");
//!         let repeat = self.attrs.get("repeat").and_then(|v| v.as_int()).unwrap_or(1);
//!         message.repeat(repeat as usize)
//!     }
//! }
//!
//! assert_eq!(Echo::call_with(Args::new().with("message", "hi")).unwrap(), "hi");
//! ```

pub mod args;
pub mod callable;
pub mod engine;
pub mod error;
pub mod instance;

pub use args::*;
pub use callable::*;
pub use engine::*;
pub use error::*;
pub use instance::*;
