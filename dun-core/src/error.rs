// Error types for dun

use std::error::Error;
use std::fmt;

/// Failure kinds for union validation and dispatch
///
/// The display strings are a compatibility contract: downstream consumers
/// pattern-match on the exact message text, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionError {
    /// Input is null, not an object, or has no string tag at the discriminant
    NotAUnion,
    /// An exhaustive matcher has no handler for the input's tag
    IncompleteMatcher,
}

impl Error for UnionError {}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnionError::NotAUnion => {
                write!(f, "Data is not of type discriminated union!")
            }
            UnionError::IncompleteMatcher => {
                write!(f, "Matcher incomplete!")
            }
        }
    }
}
