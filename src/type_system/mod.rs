//! The runtime half of the optional type layer.
//!
//! `matcher` decides structural conformance of a value against a declared
//! type. `resolver` wraps it with the argument-level policies: unusable
//! signatures, missing arguments, variadic collectors, and promises that
//! must not be forced.

pub use self::matcher::satisfies;
pub use self::resolver::{resolve_and_check, Argument, Resolution};
pub use self::typecheck::{Typecheck, UnknownTypecheck};

mod matcher;
mod resolver;
mod typecheck;
