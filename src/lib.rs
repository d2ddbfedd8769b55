//! Runtime conformance checking of call arguments against declared types.
//!
//! A tracing harness observes calls in a dynamically typed host and hands
//! each argument to [`type_system::resolve_and_check`], together with the
//! declared signature of the callee. The result is one of four
//! [`Typecheck`] outcomes plus the value tags seen before and after promise
//! unwinding.

pub mod analysis;
pub mod config;
pub mod declaration;
pub mod type_system;
pub mod value;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use analysis::{audit_call, audit_calls, CallAudit, ObservedCall, TypecheckSummary};
pub use config::{AuditConfig, ConfigError};
pub use declaration::{CallSignature, DeclarationCache, SignatureProvider, TypeNode};
pub use type_system::{resolve_and_check, satisfies, Argument, Resolution, Typecheck};
pub use value::{Thunk, Value, ValueTag};
