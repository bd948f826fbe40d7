// dun - dispatch and transforms for discriminated unions over JSON values
//
// A union value is a JSON object carrying a string tag at a discriminant
// field (conventionally "type"). Validation happens once, when a `Union`
// view is constructed; the view can then be dispatched repeatedly against
// different handler tables.

mod dispatch;
pub mod error;
pub mod matcher;
pub mod union;

pub use crate::error::UnionError;
pub use crate::matcher::{Mapper, MapperAll, Matcher, MatcherWithDefault};
pub use crate::union::{is, is_union, is_union_with, is_with, Union, UnionInfo, DEFAULT_DISCRIMINANT};
