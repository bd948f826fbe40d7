// Handler tables for union dispatch

use serde_json::Value;
use std::collections::BTreeMap;

/// Handler invoked with the entire variant value, discriminant field included
pub type Handler<'h, R> = Box<dyn Fn(&Value) -> R + 'h>;

/// Zero-argument fallback handler
pub type DefaultHandler<'h, R> = Box<dyn Fn() -> R + 'h>;

/// Exhaustive handler table: one handler per tag the input can carry
///
/// Exhaustiveness is the caller's contract; a tag with no handler surfaces as
/// `UnionError::IncompleteMatcher` at dispatch time rather than being
/// silently ignored.
pub struct Matcher<'h, R> {
    arms: BTreeMap<String, Handler<'h, R>>,
}

impl<'h, R> Matcher<'h, R> {
    pub fn new() -> Self {
        Matcher { arms: BTreeMap::new() }
    }

    /// Register a handler for `tag`, replacing any earlier handler for it
    pub fn on(mut self, tag: impl Into<String>, handler: impl Fn(&Value) -> R + 'h) -> Self {
        self.arms.insert(tag.into(), Box::new(handler));
        self
    }

    pub fn handler(&self, tag: &str) -> Option<&Handler<'h, R>> {
        self.arms.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.arms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<R> Default for Matcher<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial handler table with a required zero-argument fallback
///
/// The fallback is supplied at construction, so a value of this type always
/// has a recovery path and dispatch through it never fails.
pub struct MatcherWithDefault<'h, R> {
    arms: BTreeMap<String, Handler<'h, R>>,
    default: DefaultHandler<'h, R>,
}

impl<'h, R> MatcherWithDefault<'h, R> {
    pub fn new(default: impl Fn() -> R + 'h) -> Self {
        MatcherWithDefault {
            arms: BTreeMap::new(),
            default: Box::new(default),
        }
    }

    /// Register a handler for `tag`, replacing any earlier handler for it
    pub fn on(mut self, tag: impl Into<String>, handler: impl Fn(&Value) -> R + 'h) -> Self {
        self.arms.insert(tag.into(), Box::new(handler));
        self
    }

    pub fn handler(&self, tag: &str) -> Option<&Handler<'h, R>> {
        self.arms.get(tag)
    }

    pub fn default_handler(&self) -> &DefaultHandler<'h, R> {
        &self.default
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.arms.keys().map(String::as_str)
    }
}

/// Transform handler invoked with the variant, expected to return a variant
/// of the same tag
pub type MapArm<'h> = Box<dyn Fn(&Value) -> Value + 'h>;

/// Partial transform table: tags with no arm pass through unchanged
pub struct Mapper<'h> {
    arms: BTreeMap<String, MapArm<'h>>,
}

impl<'h> Mapper<'h> {
    pub fn new() -> Self {
        Mapper { arms: BTreeMap::new() }
    }

    /// Register a transform for `tag`, replacing any earlier one for it
    pub fn on(mut self, tag: impl Into<String>, arm: impl Fn(&Value) -> Value + 'h) -> Self {
        self.arms.insert(tag.into(), Box::new(arm));
        self
    }

    pub fn arm(&self, tag: &str) -> Option<&MapArm<'h>> {
        self.arms.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.arms.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl Default for Mapper<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Total transform table. Runtime behavior is identical to `Mapper`;
/// totality over the union's tags is the caller's contract.
pub type MapperAll<'h> = Mapper<'h>;
