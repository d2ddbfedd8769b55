//! The declared-signature side of a check: what type a parameter was declared with.
use super::node::{FunctionType, TypeNode};
use std::sync::Arc;

/// The name the host gives to a variadic collector parameter.
pub const VARIADIC_FORMAL: &str = "...";

/// Supplies the declared signature of the function behind one observed call.
pub trait SignatureProvider {
    /// False when the declaration is absent or could not be parsed.
    fn signature_usable(&self) -> bool;

    /// The declared type of the parameter at `position`, if there is one.
    fn parameter_type(&self, position: usize) -> Option<&TypeNode>;

    fn is_variadic_collector(&self, position: usize) -> bool;
}

/// A declaration looked up for one callee, paired with that callee's formals.
#[derive(Debug, Clone, Default)]
pub struct CallSignature {
    declared: Option<Arc<FunctionType>>,
    formals: Vec<String>,
}

impl CallSignature {
    pub fn new(declared: Option<Arc<FunctionType>>, formals: Vec<String>) -> Self {
        Self { declared, formals }
    }

    /// A signature with nothing declared.
    pub fn undeclared(formals: Vec<String>) -> Self {
        Self { declared: None, formals }
    }

    pub fn declared(&self) -> Option<&FunctionType> {
        self.declared.as_deref()
    }

    pub fn formals(&self) -> &[String] {
        &self.formals
    }
}

impl SignatureProvider for CallSignature {
    /// A declaration whose arity disagrees with the callee's formals cannot
    /// be lined up against its arguments, so it is as good as absent.
    fn signature_usable(&self) -> bool {
        self.declared
            .as_ref()
            .is_some_and(|f| f.arity() == self.formals.len())
    }

    fn parameter_type(&self, position: usize) -> Option<&TypeNode> {
        self.declared.as_ref()?.parameter(position)
    }

    fn is_variadic_collector(&self, position: usize) -> bool {
        self.formals.get(position).is_some_and(|f| f == VARIADIC_FORMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::ScalarKind;

    fn formals(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_arity_mismatch_is_unusable() {
        let f = Arc::new(FunctionType::new(vec![TypeNode::Any], TypeNode::Any));
        assert!(CallSignature::new(Some(f.clone()), formals(&["x"])).signature_usable());
        assert!(!CallSignature::new(Some(f), formals(&["x", "y"])).signature_usable());
        assert!(!CallSignature::undeclared(formals(&["x"])).signature_usable());
    }

    #[test]
    fn test_variadic_position() {
        let f = Arc::new(FunctionType::new(
            vec![TypeNode::Scalar(ScalarKind::Integer), TypeNode::Vararg],
            TypeNode::Any,
        ));
        let sig = CallSignature::new(Some(f), formals(&["n", "..."]));
        assert!(!sig.is_variadic_collector(0));
        assert!(sig.is_variadic_collector(1));
        assert!(!sig.is_variadic_collector(2));
        assert_eq!(sig.parameter_type(1), Some(&TypeNode::Vararg));
        assert_eq!(sig.parameter_type(2), None);
    }
}
