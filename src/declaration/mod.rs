//! Declared types: the parsed type-expression tree, the per-call signature
//! provider, and the per-package declaration cache.
pub mod cache;
pub mod error;
pub mod node;
pub mod provider;

pub use cache::{DeclarationCache, DeclarationSource, JsonDeclarationSource, PackageDeclarations};
pub use error::DeclarationError;
pub use node::{Field, FunctionType, ScalarKind, ScalarType, TypeNode};
pub use provider::{CallSignature, SignatureProvider, VARIADIC_FORMAL};
