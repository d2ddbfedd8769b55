//! The type-expression tree produced by the declaration parser.
//!
//! Trees are immutable once built and owned by the declaration cache; the
//! matcher only ever borrows them.
use crate::value::ValueTag;
use serde::{Deserialize, Serialize};

/// The element kind of a scalar or vector type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Logical,
    Integer,
    Double,
    Complex,
    Character,
    Raw,
}

impl ScalarKind {
    /// The vector tag whose elements have this kind.
    pub fn tag(&self) -> ValueTag {
        match self {
            ScalarKind::Logical => ValueTag::Logical,
            ScalarKind::Integer => ValueTag::Integer,
            ScalarKind::Double => ValueTag::Double,
            ScalarKind::Complex => ValueTag::Complex,
            ScalarKind::Character => ValueTag::Character,
            ScalarKind::Raw => ValueTag::Raw,
        }
    }
}

/// The element type of a vector: a kind, and whether missing elements are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarType {
    pub kind: ScalarKind,
    #[serde(default)]
    pub na_allowed: bool,
}

/// One `name: type` entry of a struct type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeNode,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    Any,
    Null,
    Nullable(Box<TypeNode>),
    /// Parenthesized type; transparent.
    Group(Box<TypeNode>),
    /// Alternatives, tried first to second.
    Union(Box<TypeNode>, Box<TypeNode>),
    /// Length-one vector of `kind` without missing elements.
    Scalar(ScalarKind),
    /// Length-one vector of `kind`, missing element allowed.
    NaScalar(ScalarKind),
    Vector(ScalarType),
    List(Vec<TypeNode>),
    Struct(Vec<Field>),
    Symbol,
    Pairlist,
    Environment,
    Language,
    Expression,
    ExternalPointer,
    Bytecode,
    WeakReference,
    Vararg,
    S4,
}

impl TypeNode {
    pub fn nullable(inner: TypeNode) -> Self {
        TypeNode::Nullable(Box::new(inner))
    }

    pub fn group(inner: TypeNode) -> Self {
        TypeNode::Group(Box::new(inner))
    }

    pub fn union(first: TypeNode, second: TypeNode) -> Self {
        TypeNode::Union(Box::new(first), Box::new(second))
    }

    pub fn vector(kind: ScalarKind) -> Self {
        TypeNode::Vector(ScalarType { kind, na_allowed: false })
    }

    pub fn na_vector(kind: ScalarKind) -> Self {
        TypeNode::Vector(ScalarType { kind, na_allowed: true })
    }

    pub fn structure(fields: Vec<(&str, TypeNode)>) -> Self {
        TypeNode::Struct(
            fields
                .into_iter()
                .map(|(name, ty)| Field { name: name.to_string(), ty })
                .collect(),
        )
    }

    /// True if this node is `Nullable`, possibly under groups and unions.
    pub fn admits_null(&self) -> bool {
        match self {
            TypeNode::Null | TypeNode::Nullable(_) => true,
            TypeNode::Group(inner) => inner.admits_null(),
            TypeNode::Union(first, second) => first.admits_null() || second.admits_null(),
            _ => false,
        }
    }
}

/// A declared function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub parameters: Vec<TypeNode>,
    #[serde(rename = "return", default = "any_type")]
    pub return_type: TypeNode,
}

fn any_type() -> TypeNode {
    TypeNode::Any
}

impl FunctionType {
    pub fn new(parameters: Vec<TypeNode>, return_type: TypeNode) -> Self {
        Self { parameters, return_type }
    }

    pub fn parameter(&self, position: usize) -> Option<&TypeNode> {
        self.parameters.get(position)
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_json_shape() {
        let json = r#"{
            "parameters": [
                {"scalar": "integer"},
                {"nullable": {"vector": {"kind": "double", "na_allowed": true}}},
                {"struct": [{"name": "x", "type": "any"}]},
                "vararg"
            ],
            "return": {"union": ["null", {"na_scalar": "character"}]}
        }"#;
        let f: FunctionType = serde_json::from_str(json).unwrap();
        assert_eq!(f.arity(), 4);
        assert_eq!(f.parameter(0), Some(&TypeNode::Scalar(ScalarKind::Integer)));
        assert_eq!(
            f.parameter(1),
            Some(&TypeNode::nullable(TypeNode::na_vector(ScalarKind::Double)))
        );
        assert_eq!(f.parameter(2), Some(&TypeNode::structure(vec![("x", TypeNode::Any)])));
        assert_eq!(f.parameter(3), Some(&TypeNode::Vararg));
        assert_eq!(
            f.return_type,
            TypeNode::union(TypeNode::Null, TypeNode::NaScalar(ScalarKind::Character))
        );
    }

    #[test]
    fn test_missing_return_defaults_to_any() {
        let f: FunctionType = serde_json::from_str(r#"{"parameters": []}"#).unwrap();
        assert_eq!(f.return_type, TypeNode::Any);
    }

    #[test]
    fn test_admits_null_looks_through_wrappers() {
        let t = TypeNode::group(TypeNode::union(
            TypeNode::Scalar(ScalarKind::Raw),
            TypeNode::nullable(TypeNode::Any),
        ));
        assert!(t.admits_null());
        assert!(!TypeNode::vector(ScalarKind::Raw).admits_null());
    }
}
