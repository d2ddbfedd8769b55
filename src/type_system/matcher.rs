//! Structural conformance of a value against a type-expression tree.
//!
//! `satisfies` is pure and recursive, and only ever answers `Match` or
//! `Mismatch`. Missing arguments, unresolved promises and unusable
//! declarations are argument-level concerns handled by the resolver.
use super::typecheck::Typecheck;
use crate::declaration::{Field, ScalarType, TypeNode};
use crate::value::{Value, ValueTag};

/// Checks whether `value` conforms to `ty`.
pub fn satisfies(value: &Value, ty: &TypeNode) -> Typecheck {
    let tag = value.tag();

    match ty {
        // First match wins; a mismatch on the first alternative is discarded.
        TypeNode::Union(first, second) => {
            return match satisfies(value, first) {
                Typecheck::Match => Typecheck::Match,
                _ => satisfies(value, second),
            };
        }
        TypeNode::Group(inner) => return satisfies(value, inner),
        TypeNode::Nullable(inner) if tag != ValueTag::Null => return satisfies(value, inner),
        _ => {}
    }

    match tag {
        ValueTag::Null => ty.admits_null().into(),

        ValueTag::Logical
        | ValueTag::Integer
        | ValueTag::Double
        | ValueTag::Complex
        | ValueTag::Character
        | ValueTag::Raw => satisfies_vector_or_scalar(value, tag, ty),

        ValueTag::List | ValueTag::Struct => match ty {
            TypeNode::List(element_types) => satisfies_list(value, element_types),
            TypeNode::Struct(fields) => satisfies_struct(value, fields),
            _ => Typecheck::Mismatch,
        },

        ValueTag::Symbol => matches!(ty, TypeNode::Symbol).into(),
        ValueTag::Pairlist => matches!(ty, TypeNode::Pairlist).into(),
        ValueTag::Environment => matches!(ty, TypeNode::Environment).into(),
        ValueTag::Language => matches!(ty, TypeNode::Language).into(),
        ValueTag::Expression => matches!(ty, TypeNode::Expression).into(),
        ValueTag::ExternalPointer => matches!(ty, TypeNode::ExternalPointer).into(),
        ValueTag::Bytecode => matches!(ty, TypeNode::Bytecode).into(),
        ValueTag::WeakReference => matches!(ty, TypeNode::WeakReference).into(),
        ValueTag::Vararg => matches!(ty, TypeNode::Vararg).into(),
        ValueTag::S4 => matches!(ty, TypeNode::S4).into(),

        // Conformance of callables is not checked.
        ValueTag::Closure
        | ValueTag::Builtin
        | ValueTag::Special
        | ValueTag::Promise
        | ValueTag::AnyMarker
        | ValueTag::CharMarker => Typecheck::Mismatch,

        ValueTag::MissingArgument => matches!(ty, TypeNode::Any).into(),
    }
}

fn satisfies_vector_or_scalar(value: &Value, tag: ValueTag, ty: &TypeNode) -> Typecheck {
    let element = match ty {
        TypeNode::Scalar(kind) => {
            if value.len() != 1 {
                return Typecheck::Mismatch;
            }
            ScalarType { kind: *kind, na_allowed: false }
        }
        TypeNode::NaScalar(kind) => {
            if value.len() != 1 {
                return Typecheck::Mismatch;
            }
            ScalarType { kind: *kind, na_allowed: true }
        }
        TypeNode::Vector(element) => *element,
        _ => return Typecheck::Mismatch,
    };

    if element.kind.tag() != tag {
        return Typecheck::Mismatch;
    }
    if !element.na_allowed && value.has_na() {
        return Typecheck::Mismatch;
    }
    Typecheck::Match
}

fn satisfies_list(value: &Value, element_types: &[TypeNode]) -> Typecheck {
    let elements = value.elements();
    if elements.len() != element_types.len() {
        return Typecheck::Mismatch;
    }
    for ((_, element), ty) in elements.into_iter().zip(element_types) {
        let result = satisfies(element, ty);
        if result != Typecheck::Match {
            return result;
        }
    }
    Typecheck::Match
}

/// Names are compared position by position, not looked up.
fn satisfies_struct(value: &Value, fields: &[Field]) -> Typecheck {
    let Some(names) = value.names() else {
        return Typecheck::Mismatch;
    };
    let elements = value.elements();
    if elements.len() != fields.len() || names.len() != fields.len() {
        return Typecheck::Mismatch;
    }
    for ((name, element), field) in elements.into_iter().zip(fields) {
        if name != Some(field.name.as_str()) {
            return Typecheck::Mismatch;
        }
        let result = satisfies(element, &field.ty);
        if result != Typecheck::Match {
            return result;
        }
    }
    Typecheck::Match
}
