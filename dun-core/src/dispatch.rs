// Dispatch core - lookup by tag with two failure policies

use crate::error::UnionError;
use crate::matcher::{Mapper, MapperAll, Matcher, MatcherWithDefault};
use serde_json::Value;
use std::borrow::Cow;

/// Exhaustive dispatch: a tag with no handler is an error.
///
/// Handlers receive the entire variant value, so they can read the
/// discriminant field as well as the payload.
pub(crate) fn match_on<R>(
    value: &Value,
    tag: &str,
    matcher: &Matcher<'_, R>,
) -> Result<R, UnionError> {
    match matcher.handler(tag) {
        Some(arm) => Ok(arm(value)),
        None => Err(UnionError::IncompleteMatcher),
    }
}

/// Dispatch with fallback: a tag with no handler invokes the zero-argument
/// default instead of failing.
pub(crate) fn match_with_default<R>(
    value: &Value,
    tag: &str,
    matcher: &MatcherWithDefault<'_, R>,
) -> R {
    match matcher.handler(tag) {
        Some(arm) => arm(value),
        None => (matcher.default_handler())(),
    }
}

/// Partial transform: a tag with no arm passes the original through.
///
/// The identity path is `Cow::Borrowed` of the input, never a clone, so
/// callers can detect "no transform occurred" by checking the borrow.
pub(crate) fn map<'a>(value: &'a Value, tag: &str, mapper: &Mapper<'_>) -> Cow<'a, Value> {
    match mapper.arm(tag) {
        Some(arm) => Cow::Owned(arm(value)),
        None => Cow::Borrowed(value),
    }
}

/// Total transform. A `MapperAll` covering every tag never takes the
/// identity path, but that is the caller's contract, not checked here.
pub(crate) fn map_all<'a>(value: &'a Value, tag: &str, mapper: &MapperAll<'_>) -> Cow<'a, Value> {
    map(value, tag, mapper)
}
