//! The four-valued outcome of a conformance check.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The outcome of checking one argument against its declared type.
///
/// The variant names double as the persisted report labels and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Typecheck {
    /// Could not be decided without forcing evaluation, or no argument was supplied.
    Undefined,
    Mismatch,
    Match,
    /// There is no usable declared type to check against.
    NotAvailable,
}

impl Typecheck {
    pub const ALL: [Typecheck; 4] = [
        Typecheck::Undefined,
        Typecheck::Mismatch,
        Typecheck::Match,
        Typecheck::NotAvailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Typecheck::Undefined => "Undefined",
            Typecheck::Mismatch => "Mismatch",
            Typecheck::Match => "Match",
            Typecheck::NotAvailable => "NotAvailable",
        }
    }

    pub fn is_match(&self) -> bool {
        *self == Typecheck::Match
    }

    /// True for the two outcomes that settle conformance one way or the other.
    pub fn is_definitive(&self) -> bool {
        matches!(self, Typecheck::Match | Typecheck::Mismatch)
    }

    fn informativeness(&self) -> u8 {
        match self {
            Typecheck::NotAvailable => 0,
            Typecheck::Undefined => 1,
            Typecheck::Mismatch | Typecheck::Match => 2,
        }
    }
}

impl From<bool> for Typecheck {
    fn from(matches: bool) -> Self {
        if matches { Typecheck::Match } else { Typecheck::Mismatch }
    }
}

/// Orders outcomes by how much they say: `NotAvailable < Undefined < {Mismatch, Match}`.
/// `Match` and `Mismatch` are incomparable.
impl PartialOrd for Typecheck {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.informativeness().cmp(&other.informativeness()) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Typecheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown typecheck label '{0}'")]
pub struct UnknownTypecheck(pub String);

impl FromStr for Typecheck {
    type Err = UnknownTypecheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Typecheck::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTypecheck(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Typecheck::Undefined, "Undefined")]
    #[case(Typecheck::Mismatch, "Mismatch")]
    #[case(Typecheck::Match, "Match")]
    #[case(Typecheck::NotAvailable, "NotAvailable")]
    fn test_stable_labels(#[case] t: Typecheck, #[case] label: &str) {
        assert_eq!(t.to_string(), label);
        assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", label));
        assert_eq!(label.parse::<Typecheck>().unwrap(), t);
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(
            "match".parse::<Typecheck>(),
            Err(UnknownTypecheck("match".to_string()))
        );
    }

    #[test]
    fn test_informativeness_order() {
        assert!(Typecheck::NotAvailable < Typecheck::Undefined);
        assert!(Typecheck::Undefined < Typecheck::Match);
        assert!(Typecheck::Undefined < Typecheck::Mismatch);
        assert!(Typecheck::NotAvailable < Typecheck::Mismatch);
        assert_eq!(Typecheck::Match.partial_cmp(&Typecheck::Mismatch), None);
        assert_eq!(Typecheck::Match.partial_cmp(&Typecheck::Match), Some(Ordering::Equal));
    }
}
