//! Behavior of the one-shot callable adapter.
//!
//! A consumer type may implement the primary operation without its contract
//! having enabled the callable form, and a contract may name an operation
//! the type does not provide. Both must fail with the unsupported-operation
//! category at invocation time, while construction failures pass through the
//! adapter unchanged.

use attrs_core::{Contract, ContractBuilder};
use attrs_engine::{Args, Callable, ConstructError, FromArgs, Instance};
use pretty_assertions::assert_eq;

/// Callable form enabled with the conventional operation name.
struct SlugBuilder {
    attrs: Instance,
}

impl FromArgs for SlugBuilder {
    fn declare() -> attrs_core::Result<Contract> {
        ContractBuilder::new("slug_builder")
            .required("title")
            .defaulted("separator", "-")
            .callable()
            .build()
    }

    fn from_instance(attrs: Instance) -> Self {
        Self { attrs }
    }
}

impl Callable for SlugBuilder {
    type Output = String;

    fn call(&self) -> String {
        let title = self.attrs.get("title").and_then(|v| v.as_str()).unwrap_or("");
        let separator = self
            .attrs
            .get("separator")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        title.to_lowercase().split_whitespace().collect::<Vec<_>>().join(separator)
    }
}

/// Implements the operation, but the contract never enabled the callable form.
struct AuditRecord {
    attrs: Instance,
}

impl FromArgs for AuditRecord {
    fn declare() -> attrs_core::Result<Contract> {
        ContractBuilder::new("audit_record")
            .required("actor")
            .required("action")
            .build()
    }

    fn from_instance(attrs: Instance) -> Self {
        Self { attrs }
    }
}

impl Callable for AuditRecord {
    type Output = String;

    fn call(&self) -> String {
        format!(
            "{} {}",
            self.attrs.get("actor").and_then(|v| v.as_str()).unwrap_or(""),
            self.attrs.get("action").and_then(|v| v.as_str()).unwrap_or(""),
        )
    }
}

/// Contract names a primary operation the type does not provide.
struct Migrator {
    attrs: Instance,
}

impl FromArgs for Migrator {
    fn declare() -> attrs_core::Result<Contract> {
        ContractBuilder::new("migrator")
            .required("target_version")
            .callable_as("migrate")
            .build()
    }

    fn from_instance(attrs: Instance) -> Self {
        Self { attrs }
    }
}

impl Callable for Migrator {
    type Output = i64;

    // OPERATION stays at the conventional "call", mismatching the contract.
    fn call(&self) -> i64 {
        self.attrs
            .get("target_version")
            .and_then(|v| v.as_int())
            .unwrap_or(0)
    }
}

/// Custom operation name, aligned on both sides.
struct Compactor {
    attrs: Instance,
}

impl FromArgs for Compactor {
    fn declare() -> attrs_core::Result<Contract> {
        ContractBuilder::new("compactor")
            .required("segment")
            .callable_as("run")
            .build()
    }

    fn from_instance(attrs: Instance) -> Self {
        Self { attrs }
    }
}

impl Callable for Compactor {
    type Output = String;

    const OPERATION: &'static str = "run";

    fn call(&self) -> String {
        format!(
            "compacted {}",
            self.attrs.get("segment").and_then(|v| v.as_str()).unwrap_or(""),
        )
    }
}

#[test]
fn test_construct_then_invoke_returns_operation_result() {
    let slug = SlugBuilder::call_with(Args::new().with("title", "Hello Attribute World")).unwrap();
    assert_eq!(slug, "hello-attribute-world");

    let slug = SlugBuilder::call_with(
        Args::new()
            .with("title", "Hello Attribute World")
            .with("separator", "_"),
    )
    .unwrap();
    assert_eq!(slug, "hello_attribute_world");
}

#[test]
fn test_plain_construction_still_available() {
    let builder = SlugBuilder::new(Args::new().with("title", "One Two")).unwrap();
    assert_eq!(builder.call(), "one-two");
}

#[test]
fn test_not_enabled_contract_is_unsupported() {
    let err = AuditRecord::call_with(
        Args::new().with("actor", "deploy-bot").with("action", "rollout"),
    )
    .unwrap_err();

    match err {
        ConstructError::UnsupportedOperation { contract, operation } => {
            assert_eq!(contract, "audit_record");
            assert_eq!(operation, "call");
        }
        other => panic!("expected UnsupportedOperation, got {other:?}"),
    }

    // Regular construction is unaffected by the missing callable flag.
    let record = AuditRecord::new(
        Args::new().with("actor", "deploy-bot").with("action", "rollout"),
    )
    .unwrap();
    assert_eq!(record.call(), "deploy-bot rollout");
}

#[test]
fn test_operation_name_mismatch_is_unsupported() {
    let err = Migrator::call_with(Args::new().with("target_version", 7)).unwrap_err();

    match err {
        ConstructError::UnsupportedOperation { contract, operation } => {
            assert_eq!(contract, "migrator");
            assert_eq!(operation, "call");
        }
        other => panic!("expected UnsupportedOperation, got {other:?}"),
    }
}

#[test]
fn test_custom_operation_name_matches() {
    let result = Compactor::call_with(Args::new().with("segment", "wal-0042")).unwrap();
    assert_eq!(result, "compacted wal-0042");
}

#[test]
fn test_construction_errors_propagate_unchanged() {
    let err = SlugBuilder::call_with(Args::new()).unwrap_err();
    match err {
        ConstructError::MissingAttributes { contract, attributes } => {
            assert_eq!(contract, "slug_builder");
            assert_eq!(attributes, vec!["title"]);
        }
        other => panic!("expected MissingAttributes, got {other:?}"),
    }

    let err = SlugBuilder::call_with(
        Args::new().with("title", "x").with("locale", "en"),
    )
    .unwrap_err();
    assert!(matches!(err, ConstructError::UnknownAttributes { .. }));
}
