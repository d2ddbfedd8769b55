//! Argument-level checking: peels promises without forcing them, applies the
//! missing/variadic/unusable-signature policies, then hands the value to the
//! matcher.
use super::matcher::satisfies;
use super::typecheck::Typecheck;
use crate::declaration::{SignatureProvider, TypeNode};
use crate::value::{Value, ValueTag};
use serde::Serialize;
use tracing::trace;

/// One argument observed at a call boundary, bound to a formal parameter.
pub struct Argument<'a, P: SignatureProvider + ?Sized> {
    value: &'a Value,
    signature: &'a P,
    position: usize,
    variadic: bool,
}

impl<'a, P: SignatureProvider + ?Sized> Argument<'a, P> {
    pub fn new(value: &'a Value, signature: &'a P, position: usize, variadic: bool) -> Self {
        Self { value, signature, position, variadic }
    }

    /// Binds `value` to the formal at `position`, asking the signature whether
    /// that formal collects variadic arguments.
    pub fn bind(value: &'a Value, signature: &'a P, position: usize) -> Self {
        let variadic = signature.is_variadic_collector(position);
        Self::new(value, signature, position, variadic)
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

/// The result of checking one argument, plus the tags recorded for diagnostics.
///
/// `outer_tag` is the tag of the raw argument; `inner_tag` is the tag of
/// whatever was finally checked (or of the unevaluated call that stopped the
/// unwinding). Both are `None` when there was no usable signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub typecheck: Typecheck,
    pub outer_tag: Option<ValueTag>,
    pub inner_tag: Option<ValueTag>,
}

impl Resolution {
    fn not_available() -> Self {
        Self { typecheck: Typecheck::NotAvailable, outer_tag: None, inner_tag: None }
    }
}

/// Checks one argument against its declared parameter type.
pub fn resolve_and_check<P: SignatureProvider + ?Sized>(argument: &Argument<'_, P>) -> Resolution {
    let signature = argument.signature;
    if !signature.signature_usable() {
        return Resolution::not_available();
    }
    let Some(ty) = signature.parameter_type(argument.position) else {
        return Resolution::not_available();
    };

    let outer_tag = argument.value.tag();
    let (typecheck, inner_tag) = if argument.variadic && matches!(ty, TypeNode::Vararg) {
        (Typecheck::Match, outer_tag)
    } else if outer_tag == ValueTag::MissingArgument {
        (Typecheck::Undefined, outer_tag)
    } else {
        unwind(argument.value, ty)
    };

    Resolution { typecheck, outer_tag: Some(outer_tag), inner_tag: Some(inner_tag) }
}

/// Follows memoized promise results until a non-promise is reached. A
/// pending promise is checked through its expression when that expression is
/// a literal or a plain reference; an unevaluated call cannot be classified
/// without running it, so the result is `Undefined`.
fn unwind(value: &Value, ty: &TypeNode) -> (Typecheck, ValueTag) {
    let Value::Promise(thunk) = value else {
        return (satisfies(value, ty), value.tag());
    };

    if let Some(result) = thunk.value() {
        return unwind(result, ty);
    }

    let expression = thunk.expression();
    if expression.is_application_form() {
        trace!(inner = %expression.tag(), "pending promise wraps a call; left undefined");
        (Typecheck::Undefined, expression.tag())
    } else {
        (satisfies(expression, ty), expression.tag())
    }
}
