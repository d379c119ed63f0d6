//! JSON decoding and encoding primitives.
//!
//! Provides the [`FromLdtkJson`] / [`ToLdtkJson`] traits that every model type
//! implements (mostly through `#[derive(LdtkJson)]`), the [`StringUnion`] trait
//! for closed string enumerations, and the helpers the derive expands to.
//!
//! Decoding works on an already-parsed [`Value`] tree. Unknown object keys are
//! ignored so documents written by newer editor versions still decode.

mod path;

pub use path::{JsonPath, PathSegment};
pub use serde_json::{Map, Value};

pub use crate::error::DecodeError;

/// Types that can be decoded from an LDtk JSON value.
///
/// # Example
///
/// ```
/// use ldtkmap_core::json::{FromLdtkJson, Value};
///
/// let value = Value::from(42);
/// assert_eq!(i64::from_json(&value).unwrap(), 42);
/// assert!(String::from_json(&value).is_err());
/// ```
pub trait FromLdtkJson: Sized {
    /// Decode `value`, returning an error whose path is relative to `value`.
    fn from_json(value: &Value) -> Result<Self, DecodeError>;

    /// The value an absent object key decodes to, or `None` if the key is required.
    fn from_missing() -> Option<Self> {
        None
    }
}

/// Types that can be encoded back to an LDtk JSON value.
pub trait ToLdtkJson {
    fn to_json(&self) -> Value;
}

/// A closed set of string literals with a bidirectional mapping to enum variants.
///
/// Matching is exact and case-sensitive.
pub trait StringUnion: Sized + Copy + 'static {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Every accepted literal, in declaration order.
    const LITERALS: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn from_literal(literal: &str) -> Option<Self>;
}

/// Name of a JSON value's kind, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: kind_name(value),
    }
}

pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| mismatch("object", value))
}

pub fn expect_array(value: &Value) -> Result<&Vec<Value>, DecodeError> {
    value.as_array().ok_or_else(|| mismatch("array", value))
}

/// Decode the member `key` of `object`.
///
/// An absent key fails with [`DecodeError::MissingField`] unless `T` has a
/// missing value (`Option<T>` decodes it to `None`).
pub fn field<T: FromLdtkJson>(object: &Map<String, Value>, key: &str) -> Result<T, DecodeError> {
    match object.get(key) {
        Some(value) => T::from_json(value).map_err(|err| err.within_key(key)),
        None => T::from_missing().ok_or_else(|| DecodeError::MissingField.within_key(key)),
    }
}

/// Decode the member `key` of `object`, using `T::default()` when it is absent.
pub fn field_or_default<T: FromLdtkJson + Default>(
    object: &Map<String, Value>,
    key: &str,
) -> Result<T, DecodeError> {
    match object.get(key) {
        Some(value) => T::from_json(value).map_err(|err| err.within_key(key)),
        None => Ok(T::default()),
    }
}

/// Decode a string union from a JSON string.
pub fn decode_union<T: StringUnion>(value: &Value) -> Result<T, DecodeError> {
    let literal = value.as_str().ok_or_else(|| mismatch("string", value))?;
    parse_union(literal)
}

/// Map a literal to its union variant, failing closed on anything else.
pub fn parse_union<T: StringUnion>(literal: &str) -> Result<T, DecodeError> {
    T::from_literal(literal).ok_or_else(|| DecodeError::InvalidUnionLiteral {
        union_name: T::NAME,
        literal: literal.to_string(),
        accepted: T::LITERALS,
    })
}

// Primitive type implementations

impl FromLdtkJson for bool {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl FromLdtkJson for i64 {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        // Non-integral or out-of-range numbers are mismatches, not truncated
        value.as_i64().ok_or_else(|| mismatch("integer", value))
    }
}

impl FromLdtkJson for f64 {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromLdtkJson for String {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromLdtkJson for Value {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

impl<T: FromLdtkJson> FromLdtkJson for Option<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_json(value).map(Some)
        }
    }

    fn from_missing() -> Option<Self> {
        Some(None)
    }
}

impl<T: FromLdtkJson> FromLdtkJson for Vec<T> {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        expect_array(value)?
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_json(item).map_err(|err| err.within_index(index)))
            .collect()
    }
}

impl<T: FromLdtkJson, const N: usize> FromLdtkJson for [T; N] {
    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let items = expect_array(value)?;
        if items.len() != N {
            return Err(DecodeError::MalformedFixedArray {
                expected: N,
                found: items.len(),
            });
        }

        let decoded = Vec::<T>::from_json(value)?;
        <[T; N]>::try_from(decoded).map_err(|rest| DecodeError::MalformedFixedArray {
            expected: N,
            found: rest.len(),
        })
    }
}

impl ToLdtkJson for bool {
    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToLdtkJson for i64 {
    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl ToLdtkJson for f64 {
    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

impl ToLdtkJson for String {
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToLdtkJson for Value {
    fn to_json(&self) -> Value {
        self.clone()
    }
}

impl<T: ToLdtkJson> ToLdtkJson for Option<T> {
    fn to_json(&self) -> Value {
        // Absent values are written as null so the key set survives a round trip
        self.as_ref().map_or(Value::Null, ToLdtkJson::to_json)
    }
}

impl<T: ToLdtkJson> ToLdtkJson for Vec<T> {
    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}

impl<T: ToLdtkJson> ToLdtkJson for [T] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToLdtkJson::to_json).collect())
    }
}

impl<T: ToLdtkJson, const N: usize> ToLdtkJson for [T; N] {
    fn to_json(&self) -> Value {
        self.as_slice().to_json()
    }
}
