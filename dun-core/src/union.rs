// Union validation and the dispatch surface

use crate::dispatch;
use crate::error::UnionError;
use crate::matcher::{Mapper, MapperAll, Matcher, MatcherWithDefault};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Conventional discriminant field name, used when no override is given
pub const DEFAULT_DISCRIMINANT: &str = "type";

/// Check whether `value` is a well-formed tagged union under the default
/// discriminant key.
pub fn is_union(value: &Value) -> bool {
    is_union_with(value, DEFAULT_DISCRIMINANT)
}

/// Check whether `value` is a well-formed tagged union: a JSON object whose
/// `discriminant` field holds a non-empty string. No deeper shape checking.
pub fn is_union_with(value: &Value, discriminant: &str) -> bool {
    extract_tag(value, discriminant).is_some()
}

/// Narrowing predicate: true iff `value`'s discriminant field equals `tag`.
///
/// Performs no validation. An input that is not a union simply has no string
/// at the discriminant and compares unequal.
pub fn is(value: &Value, tag: &str) -> bool {
    is_with(value, tag, DEFAULT_DISCRIMINANT)
}

/// Narrowing predicate under a custom discriminant key.
pub fn is_with(value: &Value, tag: &str, discriminant: &str) -> bool {
    value.get(discriminant).and_then(Value::as_str) == Some(tag)
}

fn extract_tag<'a>(value: &'a Value, discriminant: &str) -> Option<&'a str> {
    value
        .as_object()
        .and_then(|object| object.get(discriminant))
        .and_then(Value::as_str)
        .filter(|tag| !tag.is_empty())
}

/// Serializable summary of a validated union value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionInfo {
    pub discriminant: String,
    pub tag: String,
}

/// A validated view of a tagged union value.
///
/// Construction is the validation step: it fails with
/// `UnionError::NotAUnion` before any handler table exists, and a
/// constructed view can be dispatched repeatedly against different tables
/// without re-validating.
#[derive(Debug, Clone, Copy)]
pub struct Union<'a> {
    value: &'a Value,
    discriminant: &'a str,
    tag: &'a str,
}

impl<'a> Union<'a> {
    /// Validate `value` under the default discriminant key.
    pub fn new(value: &'a Value) -> Result<Self, UnionError> {
        Self::with_discriminant(value, DEFAULT_DISCRIMINANT)
    }

    /// Validate `value` under a custom discriminant key.
    pub fn with_discriminant(value: &'a Value, discriminant: &'a str) -> Result<Self, UnionError> {
        let tag = extract_tag(value, discriminant).ok_or(UnionError::NotAUnion)?;
        Ok(Union {
            value,
            discriminant,
            tag,
        })
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    pub fn discriminant(&self) -> &'a str {
        self.discriminant
    }

    /// Narrow to a specific tag.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub fn info(&self) -> UnionInfo {
        UnionInfo {
            discriminant: self.discriminant.to_string(),
            tag: self.tag.to_string(),
        }
    }

    /// Exhaustive dispatch. Fails with `UnionError::IncompleteMatcher` when
    /// the matcher has no handler for this value's tag.
    pub fn match_on<R>(&self, matcher: &Matcher<'_, R>) -> Result<R, UnionError> {
        dispatch::match_on(self.value, self.tag, matcher)
    }

    /// Dispatch with fallback; never fails.
    pub fn match_with_default<R>(&self, matcher: &MatcherWithDefault<'_, R>) -> R {
        dispatch::match_with_default(self.value, self.tag, matcher)
    }

    /// Partial transform. Returns `Cow::Borrowed` of the original value when
    /// the mapper has no arm for this value's tag.
    pub fn map(&self, mapper: &Mapper<'_>) -> Cow<'a, Value> {
        dispatch::map(self.value, self.tag, mapper)
    }

    /// Total transform; behaviorally identical to `map`.
    pub fn map_all(&self, mapper: &MapperAll<'_>) -> Cow<'a, Value> {
        dispatch::map_all(self.value, self.tag, mapper)
    }
}
