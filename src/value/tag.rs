//! The dynamic type discriminator of an observed value.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tag of a runtime value, as reported by the host's `typeof`.
///
/// `Struct` is the tag of a list with a names attribute. The matcher treats
/// it exactly like `List`; the distinction only shows up in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueTag {
    #[serde(rename = "NULL")]
    Null,
    #[serde(rename = "logical")]
    Logical,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "complex")]
    Complex,
    #[serde(rename = "character")]
    Character,
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "pairlist")]
    Pairlist,
    #[serde(rename = "environment")]
    Environment,
    #[serde(rename = "language")]
    Language,
    #[serde(rename = "expression")]
    Expression,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "struct")]
    Struct,
    #[serde(rename = "externalptr")]
    ExternalPointer,
    #[serde(rename = "bytecode")]
    Bytecode,
    #[serde(rename = "weakref")]
    WeakReference,
    #[serde(rename = "...")]
    Vararg,
    #[serde(rename = "S4")]
    S4,
    #[serde(rename = "closure")]
    Closure,
    #[serde(rename = "builtin")]
    Builtin,
    #[serde(rename = "special")]
    Special,
    #[serde(rename = "promise")]
    Promise,
    #[serde(rename = "missing")]
    MissingArgument,
    #[serde(rename = "any")]
    AnyMarker,
    #[serde(rename = "char")]
    CharMarker,
}

impl ValueTag {
    /// The stable label used in reports. Must agree with the serde renames above.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueTag::Null => "NULL",
            ValueTag::Logical => "logical",
            ValueTag::Integer => "integer",
            ValueTag::Double => "double",
            ValueTag::Complex => "complex",
            ValueTag::Character => "character",
            ValueTag::Raw => "raw",
            ValueTag::Symbol => "symbol",
            ValueTag::Pairlist => "pairlist",
            ValueTag::Environment => "environment",
            ValueTag::Language => "language",
            ValueTag::Expression => "expression",
            ValueTag::List => "list",
            ValueTag::Struct => "struct",
            ValueTag::ExternalPointer => "externalptr",
            ValueTag::Bytecode => "bytecode",
            ValueTag::WeakReference => "weakref",
            ValueTag::Vararg => "...",
            ValueTag::S4 => "S4",
            ValueTag::Closure => "closure",
            ValueTag::Builtin => "builtin",
            ValueTag::Special => "special",
            ValueTag::Promise => "promise",
            ValueTag::MissingArgument => "missing",
            ValueTag::AnyMarker => "any",
            ValueTag::CharMarker => "char",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueTag::Null)]
    #[case(ValueTag::Double)]
    #[case(ValueTag::Struct)]
    #[case(ValueTag::Vararg)]
    #[case(ValueTag::MissingArgument)]
    fn test_serde_label_agrees_with_as_str(#[case] tag: ValueTag) {
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, format!("\"{}\"", tag.as_str()));
        let back: ValueTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
