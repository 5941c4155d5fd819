//! Stock accessors covering the degenerate and std-type cases.

use std::convert::Infallible;
use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use crate::path::CasePath;

/// The accessor from a type onto itself. `extract` always succeeds.
pub fn identity<T: 'static>() -> CasePath<T, T> {
    CasePath::new(|value| value, Some)
}

/// Embeds into `()` by discarding, extracts by yielding a clone of `value`.
pub fn constant<Value>(value: Value) -> CasePath<(), Value>
where
    Value: Clone + Send + Sync + 'static,
{
    CasePath::new(|_| (), move |()| Some(value.clone()))
}

/// The accessor for a payload that cannot exist. `extract` always fails.
pub fn never<Root: 'static>() -> CasePath<Root, Infallible> {
    CasePath::new(|value| match value {}, |_| None)
}

/// Pairs `Into` with `TryFrom` as an accessor onto a raw representation.
///
/// `extract` succeeds exactly when the raw value round-trips back into
/// `Value`. Out-of-range raws yield `None`.
pub fn raw_value<Raw, Value>() -> CasePath<Raw, Value>
where
    Raw: 'static,
    Value: Into<Raw> + TryFrom<Raw> + 'static,
{
    CasePath::new(|value: Value| value.into(), |raw| Value::try_from(raw).ok())
}

/// Pairs `Display` with `FromStr` as an accessor onto the rendered text.
pub fn description<Value>() -> CasePath<String, Value>
where
    Value: Display + FromStr + 'static,
{
    CasePath::new(|value: Value| value.to_string(), |text: String| text.parse().ok())
}

/// The accessor for `Option::Some`.
pub fn some<T: 'static>() -> CasePath<Option<T>, T> {
    CasePath::new(Some, |option| option)
}

/// The accessor for `Option::None`.
pub fn none<T: 'static>() -> CasePath<Option<T>, ()> {
    CasePath::new(
        |()| None,
        |option| match option {
            None => Some(()),
            Some(_) => None,
        },
    )
}

/// The accessor for `Result::Ok`.
pub fn ok<T: 'static, E: 'static>() -> CasePath<Result<T, E>, T> {
    CasePath::new(Ok, |result| result.ok())
}

/// The accessor for `Result::Err`.
pub fn err<T: 'static, E: 'static>() -> CasePath<Result<T, E>, E> {
    CasePath::new(Err, |result| result.err())
}

/// Steps through one level of `Box` indirection.
///
/// Appending this after a case whose payload is boxed reaches the value
/// inside, which is how accessors traverse recursive types.
pub fn boxed<T: 'static>() -> CasePath<Box<T>, T> {
    CasePath::new(Box::new, |boxed| Some(*boxed))
}
