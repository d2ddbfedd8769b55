//! Call-level auditing: every argument of an observed call, and batches of
//! independent calls in parallel.
use crate::declaration::{DeclarationCache, DeclarationSource, SignatureProvider};
use crate::type_system::{resolve_and_check, Argument, Resolution, Typecheck};
use crate::value::Value;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A call as surfaced by the tracing harness: the callee, its formals, and the
/// raw argument bound to each formal, in formal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedCall {
    pub package: String,
    pub function: String,
    pub formals: Vec<String>,
    pub arguments: Vec<Value>,
}

/// One report row: a parameter position and what its check produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentAudit {
    pub position: usize,
    #[serde(flatten)]
    pub resolution: Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallAudit {
    pub package: String,
    pub function: String,
    pub arguments: SmallVec<[ArgumentAudit; 4]>,
}

impl CallAudit {
    pub fn results(&self) -> impl Iterator<Item = Typecheck> + '_ {
        self.arguments.iter().map(|a| a.resolution.typecheck)
    }

    /// True if no argument was found to violate its declaration.
    pub fn conforms(&self) -> bool {
        self.results().all(|t| t != Typecheck::Mismatch)
    }
}

/// Checks every argument of `call` against `signature`.
pub fn audit_call<P: SignatureProvider + ?Sized>(call: &ObservedCall, signature: &P) -> CallAudit {
    let arguments = call
        .arguments
        .iter()
        .enumerate()
        .map(|(position, value)| ArgumentAudit {
            position,
            resolution: resolve_and_check(&Argument::bind(value, signature, position)),
        })
        .collect();

    CallAudit {
        package: call.package.clone(),
        function: call.function.clone(),
        arguments,
    }
}

/// Audits a batch of calls. Calls are independent, so they are checked in
/// parallel; the output keeps the input order.
pub fn audit_calls<S>(cache: &DeclarationCache<S>, calls: &[ObservedCall]) -> Vec<CallAudit>
where
    S: DeclarationSource + Sync,
{
    calls
        .par_iter()
        .map(|call| {
            let signature = cache.signature(&call.package, &call.function, call.formals.clone());
            audit_call(call, &signature)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{
        DeclarationError, FunctionType, PackageDeclarations, ScalarKind, TypeNode,
    };
    use crate::value::{Thunk, ValueTag};
    use std::sync::Arc;

    struct FixedSource;

    impl DeclarationSource for FixedSource {
        fn load_package(&self, package: &str) -> Result<PackageDeclarations, DeclarationError> {
            if package != "base" {
                return Err(DeclarationError::Parse {
                    package: package.to_string(),
                    source: serde_json::from_str::<()>("x").unwrap_err(),
                });
            }
            let mut decls = PackageDeclarations::new();
            decls.insert(
                "rep".into(),
                Arc::new(FunctionType::new(
                    vec![TypeNode::Any, TypeNode::Scalar(ScalarKind::Integer), TypeNode::Vararg],
                    TypeNode::Any,
                )),
            );
            Ok(decls)
        }
    }

    fn rep_call(times: Value) -> ObservedCall {
        ObservedCall {
            package: "base".into(),
            function: "rep".into(),
            formals: vec!["x".into(), "times".into(), "...".into()],
            arguments: vec![
                Value::MissingArgument,
                times,
                Value::promise(Thunk::pending(Value::call("list", vec![]))),
            ],
        }
    }

    #[test]
    fn test_audit_call_rows() {
        let cache = DeclarationCache::new(FixedSource);
        let call = rep_call(Value::promise(Thunk::pending(Value::int(3))));
        let sig = cache.signature(&call.package, &call.function, call.formals.clone());
        let audit = audit_call(&call, &sig);

        let results: Vec<_> = audit.results().collect();
        assert_eq!(results, vec![Typecheck::Undefined, Typecheck::Match, Typecheck::Match]);
        assert_eq!(audit.arguments[1].resolution.inner_tag, Some(ValueTag::Integer));
        assert!(audit.conforms());
    }

    #[test]
    fn test_audit_calls_keeps_order() {
        let cache = DeclarationCache::new(FixedSource);
        let mut calls: Vec<_> = (0..32)
            .map(|i| rep_call(if i % 2 == 0 { Value::int(i) } else { Value::string("x") }))
            .collect();
        calls.push(ObservedCall {
            package: "utils".into(),
            function: "head".into(),
            formals: vec!["x".into()],
            arguments: vec![Value::Null],
        });

        let audits = audit_calls(&cache, &calls);
        assert_eq!(audits.len(), 33);
        for (i, audit) in audits.iter().take(32).enumerate() {
            assert_eq!(audit.conforms(), i % 2 == 0, "call {}", i);
        }
        assert_eq!(audits[32].arguments[0].resolution.typecheck, Typecheck::NotAvailable);
        assert_eq!(cache.loaded_packages(), 2);
    }

    #[test]
    fn test_row_serialization() {
        let row = ArgumentAudit {
            position: 1,
            resolution: Resolution {
                typecheck: Typecheck::Mismatch,
                outer_tag: Some(ValueTag::Promise),
                inner_tag: Some(ValueTag::Character),
            },
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"position":1,"typecheck":"Mismatch","outer_tag":"promise","inner_tag":"character"}"#
        );
    }
}
