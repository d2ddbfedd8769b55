//! Defines `Value`, the read-only projection of one observed runtime value.
//!
//! The host runtime hands the tracer a single dynamically typed object with
//! many kind-specific accessors. Here that object is a sum type with one
//! variant per tag, and the handful of queries the matcher needs (tag, length,
//! per-index missingness, named sub-values) are methods on it.

use super::tag::ValueTag;
use super::thunk::Thunk;
use serde::{Deserialize, Serialize};

/// Missing sentinel for logical vectors.
pub const NA_LOGICAL: i32 = i32::MIN;
/// Missing sentinel for integer vectors.
pub const NA_INTEGER: i32 = i32::MIN;

/// A complex number as stored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    #[serde(with = "na_double")]
    pub re: f64,
    #[serde(with = "na_double")]
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Either component being NaN makes the element missing.
    pub fn is_na(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

/// A generic vector. `names` is `Some` for struct-like lists; its length is
/// not forced to agree with `elements` because the host permits malformed
/// attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListValue {
    pub elements: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

/// An unevaluated call: a callee and its (unevaluated) arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub callee: String,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "data", rename_all = "snake_case")]
pub enum Value {
    Null,
    Logical(Vec<i32>),
    Integer(Vec<i32>),
    Double(#[serde(with = "na_double_vec")] Vec<f64>),
    Complex(Vec<Complex>),
    /// `None` is the character missing sentinel.
    Character(Vec<Option<String>>),
    Raw(Vec<u8>),
    Symbol(String),
    Pairlist(Vec<(Option<String>, Value)>),
    Environment(u64),
    Language(Call),
    Expression(Vec<Value>),
    List(ListValue),
    ExternalPointer(u64),
    Bytecode,
    WeakReference,
    /// The collected `...` arguments of a call frame.
    Vararg(Vec<Value>),
    S4 { class: String },
    Closure { formals: Vec<String> },
    Builtin(String),
    Special(String),
    Promise(Box<Thunk>),
    MissingArgument,
    AnyMarker,
    CharMarker(String),
}

impl Value {
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Null => ValueTag::Null,
            Value::Logical(_) => ValueTag::Logical,
            Value::Integer(_) => ValueTag::Integer,
            Value::Double(_) => ValueTag::Double,
            Value::Complex(_) => ValueTag::Complex,
            Value::Character(_) => ValueTag::Character,
            Value::Raw(_) => ValueTag::Raw,
            Value::Symbol(_) => ValueTag::Symbol,
            Value::Pairlist(_) => ValueTag::Pairlist,
            Value::Environment(_) => ValueTag::Environment,
            Value::Language(_) => ValueTag::Language,
            Value::Expression(_) => ValueTag::Expression,
            Value::List(list) if list.names.is_some() => ValueTag::Struct,
            Value::List(_) => ValueTag::List,
            Value::ExternalPointer(_) => ValueTag::ExternalPointer,
            Value::Bytecode => ValueTag::Bytecode,
            Value::WeakReference => ValueTag::WeakReference,
            Value::Vararg(_) => ValueTag::Vararg,
            Value::S4 { .. } => ValueTag::S4,
            Value::Closure { .. } => ValueTag::Closure,
            Value::Builtin(_) => ValueTag::Builtin,
            Value::Special(_) => ValueTag::Special,
            Value::Promise(_) => ValueTag::Promise,
            Value::MissingArgument => ValueTag::MissingArgument,
            Value::AnyMarker => ValueTag::AnyMarker,
            Value::CharMarker(_) => ValueTag::CharMarker,
        }
    }

    /// Element count for vector-like and list-like values; 0 for null and 1
    /// for every other tag.
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Logical(v) | Value::Integer(v) => v.len(),
            Value::Double(v) => v.len(),
            Value::Complex(v) => v.len(),
            Value::Character(v) => v.len(),
            Value::Raw(v) => v.len(),
            Value::Pairlist(v) => v.len(),
            Value::Expression(v) | Value::Vararg(v) => v.len(),
            Value::List(list) => list.elements.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `index` holds its kind's missing sentinel.
    /// Always false for raw vectors, non-vector tags and out-of-range indices.
    #[inline]
    pub fn is_na_at(&self, index: usize) -> bool {
        match self {
            Value::Logical(v) => v.get(index) == Some(&NA_LOGICAL),
            Value::Integer(v) => v.get(index) == Some(&NA_INTEGER),
            Value::Double(v) => v.get(index).is_some_and(|x| x.is_nan()),
            Value::Complex(v) => v.get(index).is_some_and(Complex::is_na),
            Value::Character(v) => matches!(v.get(index), Some(None)),
            _ => false,
        }
    }

    pub fn has_na(&self) -> bool {
        (0..self.len()).any(|i| self.is_na_at(i))
    }

    /// The names attribute of a list, if it has one.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Value::List(list) => list.names.as_deref(),
            _ => None,
        }
    }

    /// Ordered `(name, sub-value)` pairs of a list-like value. Names beyond the
    /// end of a short names attribute come back as `None`.
    pub fn elements(&self) -> Vec<(Option<&str>, &Value)> {
        match self {
            Value::List(list) => list
                .elements
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let name = list.names.as_ref().and_then(|n| n.get(i)).map(String::as_str);
                    (name, v)
                })
                .collect(),
            Value::Pairlist(items) => items.iter().map(|(n, v)| (n.as_deref(), v)).collect(),
            Value::Expression(items) | Value::Vararg(items) => {
                items.iter().map(|v| (None, v)).collect()
            }
            _ => Vec::new(),
        }
    }

    /// An application form is an unevaluated call; its type cannot be known
    /// without evaluating it.
    pub fn is_application_form(&self) -> bool {
        matches!(self, Value::Language(_))
    }

    // --- Constructors ---

    pub fn logical(values: &[Option<bool>]) -> Self {
        Value::Logical(
            values
                .iter()
                .map(|v| v.map_or(NA_LOGICAL, i32::from))
                .collect(),
        )
    }

    pub fn integer(values: &[Option<i32>]) -> Self {
        Value::Integer(values.iter().map(|v| v.unwrap_or(NA_INTEGER)).collect())
    }

    pub fn int(value: i32) -> Self {
        Value::Integer(vec![value])
    }

    pub fn double(value: f64) -> Self {
        Value::Double(vec![value])
    }

    pub fn character(values: &[Option<&str>]) -> Self {
        Value::Character(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    pub fn string(value: &str) -> Self {
        Value::Character(vec![Some(value.to_string())])
    }

    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(ListValue { elements, names: None })
    }

    pub fn named_list(fields: Vec<(&str, Value)>) -> Self {
        let (names, elements) = fields
            .into_iter()
            .map(|(n, v)| (n.to_string(), v))
            .unzip();
        Value::List(ListValue { elements, names: Some(names) })
    }

    pub fn call(callee: &str, arguments: Vec<Value>) -> Self {
        Value::Language(Call { callee: callee.to_string(), arguments })
    }

    pub fn promise(thunk: Thunk) -> Self {
        Value::Promise(Box::new(thunk))
    }
}

/// JSON has no NaN, so missing doubles travel as `null`.
mod na_double {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
        if x.is_nan() { s.serialize_none() } else { s.serialize_some(x) }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

mod na_double_vec {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &[f64], s: S) -> Result<S::Ok, S::Error> {
        let encoded: Vec<Option<f64>> = v.iter().map(|x| (!x.is_nan()).then_some(*x)).collect();
        encoded.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
        let decoded = Vec::<Option<f64>>::deserialize(d)?;
        Ok(decoded.into_iter().map(|x| x.unwrap_or(f64::NAN)).collect())
    }
}
