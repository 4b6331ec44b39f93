//! Consumer-facing construction traits and the one-shot callable adapter.
//!
//! [`FromArgs`] is the seam a consumer type implements to opt into
//! keyword-style construction: it supplies the one-time contract declaration
//! and the conversion from a bound [`Instance`]. [`Callable`] additionally
//! names the primary operation, collapsing "build + call" into a single
//! expression.

use std::any::Any;
use std::sync::Arc;

use attrs_core::{Contract, registry};

use crate::{Args, ConstructError, Instance, Result, construct};

/// Keyword-style construction for a consumer type.
///
/// Implementors declare their attribute contract once; the contract is
/// registered in the process-wide registry on first use and every
/// construction validates against it.
///
/// # Example
///
/// ```rust
/// use attrs_core::{Contract, ContractBuilder};
/// use attrs_engine::{Args, FromArgs, Instance};
///
/// struct HttpProbe {
///     attrs: Instance,
/// }
///
/// impl FromArgs for HttpProbe {
///     fn declare() -> attrs_core::Result<Contract> {
///         ContractBuilder::new("http_probe")
///             .required("endpoint")
///             .defaulted("retries", 3)
///             .build()
///     }
///
///     fn from_instance(attrs: Instance) -> Self {
///         Self { attrs }
///     }
/// }
///
/// let probe = HttpProbe::new(Args::new().with("endpoint", "https://example.com")).unwrap();
/// assert_eq!(probe.attrs.get("retries").unwrap().as_int(), Some(3));
/// ```
pub trait FromArgs: Any + Sized {
    /// Declares the attribute contract for this type.
    ///
    /// Runs at most once per process; the result is cached in the global
    /// registry.
    fn declare() -> attrs_core::Result<Contract>;

    /// Builds the consumer value from a fully-bound instance.
    ///
    /// Every declared attribute is bound when this runs, so implementations
    /// typically just store the instance.
    fn from_instance(instance: Instance) -> Self;

    /// The contract declared for this type, declaring it on first use.
    fn contract() -> Result<Arc<Contract>> {
        Ok(registry::declare::<Self>(Self::declare)?)
    }

    /// Constructs a new value from keyword arguments.
    ///
    /// # Errors
    ///
    /// Fails with [`ConstructError::UnknownAttributes`] or
    /// [`ConstructError::MissingAttributes`] when the supplied keywords do
    /// not satisfy the contract, and with [`ConstructError::Declaration`]
    /// if the first-use declaration itself is malformed.
    fn new(args: Args) -> Result<Self> {
        let contract = Self::contract()?;
        Ok(Self::from_instance(construct(&contract, args)?))
    }
}

/// The one-shot construct-then-invoke form.
///
/// The primary operation takes no arguments; [`call_with`](Self::call_with)
/// constructs the value and returns the operation's result verbatim. The
/// contract must have been declared callable, and its declared operation name
/// must match [`OPERATION`](Self::OPERATION) — both are checked at
/// invocation time.
///
/// # Example
///
/// ```rust
/// use attrs_core::{Contract, ContractBuilder};
/// use attrs_engine::{Args, Callable, FromArgs, Instance};
///
/// struct Greeter {
///     attrs: Instance,
/// }
///
/// impl FromArgs for Greeter {
///     fn declare() -> attrs_core::Result<Contract> {
///         ContractBuilder::new("greeter")
///             .required("name")
///             .callable()
///             .build()
///     }
///
///     fn from_instance(attrs: Instance) -> Self {
///         Self { attrs }
///     }
/// }
///
/// impl Callable for Greeter {
///     type Output = String;
///
///     fn call(&self) -> String {
///         format!("hello, {}", self.attrs.get("name").and_then(|v| v.as_str()).unwrap_or(""))
///     }
/// }
///
/// let greeting = Greeter::call_with(Args::new().with("name", "ada")).unwrap();
/// assert_eq!(greeting, "hello, ada");
/// ```
pub trait Callable: FromArgs {
    /// Result type of the primary operation.
    type Output;

    /// Name of the primary operation this type provides.
    const OPERATION: &'static str = Contract::DEFAULT_OPERATION;

    /// The primary operation, invoked on a fully-constructed value.
    fn call(&self) -> Self::Output;

    /// Constructs a value from keyword arguments and immediately invokes the
    /// primary operation, returning its result.
    ///
    /// # Errors
    ///
    /// Fails with [`ConstructError::UnsupportedOperation`] when the contract
    /// was not declared callable, or when its declared operation name does
    /// not match [`OPERATION`](Self::OPERATION). Construction failures
    /// propagate unchanged.
    fn call_with(args: Args) -> Result<Self::Output> {
        let contract = Self::contract()?;
        match contract.primary_operation() {
            Some(operation) if operation == Self::OPERATION => {}
            _ => {
                return Err(ConstructError::unsupported_operation(
                    contract.name(),
                    Self::OPERATION,
                ));
            }
        }

        Ok(Self::new(args)?.call())
    }
}
