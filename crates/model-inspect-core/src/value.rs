// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar values for attribute defaults.
//!
//! Two layers:
//!
//! - [`Value`] — the primitive scalar reported in [`Attribute::default`]
//! - [`AttributeValue`] — what a record holds in memory, which may be an
//!   enumeration case that has to be unwrapped before it is reported
//!
//! [`Attribute::default`]: crate::Attribute::default

use std::fmt;

/// Primitive scalar value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// SQL `NULL` or an unset value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value.
    Int(i64),

    /// Floating point value.
    Float(f64),

    /// Text value, including raw schema default expressions.
    Text(String)
}

impl Value {
    /// Check if this is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v)
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// In-memory attribute value held by a record instance.
///
/// Enumeration values are kept tagged so the resolver can report their
/// primitive representation instead of the enum itself.
///
/// # Example
///
/// ```rust
/// use model_inspect_core::{AttributeValue, Value};
///
/// let backed = AttributeValue::Enum {
///     case:    "Active".to_string(),
///     backing: Some(Value::Int(1))
/// };
/// assert_eq!(backed.into_scalar(), Value::Int(1));
///
/// let unit = AttributeValue::Enum {
///     case:    "Draft".to_string(),
///     backing: None
/// };
/// assert_eq!(unit.into_scalar(), Value::Text("Draft".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Plain scalar.
    Raw(Value),

    /// Enumeration case with an optional backing scalar.
    Enum {
        /// Case name (e.g. `Active`).
        case:    String,
        /// Backing value for backed enumerations.
        backing: Option<Value>
    }
}

impl AttributeValue {
    /// Unwrap to the primitive representation.
    ///
    /// Backed enumerations yield their backing value, unit enumerations
    /// their case name.
    #[must_use]
    pub fn into_scalar(self) -> Value {
        match self {
            Self::Raw(value) => value,
            Self::Enum {
                backing: Some(value),
                ..
            } => value,
            Self::Enum {
                case,
                backing: None
            } => Value::Text(case)
        }
    }
}

impl From<Value> for AttributeValue {
    fn from(v: Value) -> Self {
        Self::Raw(v)
    }
}

/// Conversion from a record field into its in-memory attribute value.
///
/// `None` means the attribute is not set on the instance, so the schema
/// default applies.
pub trait ToAttributeValue {
    /// Convert the field value.
    fn to_attribute_value(&self) -> Option<AttributeValue>;
}

macro_rules! impl_to_attribute_value {
    ($($ty:ty => $conv:expr),* $(,)?) => {
        $(
            impl ToAttributeValue for $ty {
                fn to_attribute_value(&self) -> Option<AttributeValue> {
                    let conv: fn(&$ty) -> Value = $conv;
                    Some(AttributeValue::Raw(conv(self)))
                }
            }
        )*
    };
}

impl_to_attribute_value! {
    bool => |v| Value::Bool(*v),
    i8 => |v| Value::Int(i64::from(*v)),
    i16 => |v| Value::Int(i64::from(*v)),
    i32 => |v| Value::Int(i64::from(*v)),
    i64 => |v| Value::Int(*v),
    u8 => |v| Value::Int(i64::from(*v)),
    u16 => |v| Value::Int(i64::from(*v)),
    u32 => |v| Value::Int(i64::from(*v)),
    f32 => |v| Value::Float(f64::from(*v)),
    f64 => |v| Value::Float(*v),
    String => |v| Value::Text(v.clone()),
    &str => |v| Value::Text((*v).to_string()),
    Value => |v| v.clone()
}

impl ToAttributeValue for u64 {
    fn to_attribute_value(&self) -> Option<AttributeValue> {
        // Out-of-range values are reported as text rather than wrapped.
        Some(AttributeValue::Raw(match i64::try_from(*self) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Text(self.to_string())
        }))
    }
}

impl ToAttributeValue for AttributeValue {
    fn to_attribute_value(&self) -> Option<AttributeValue> {
        Some(self.clone())
    }
}

impl<T: ToAttributeValue> ToAttributeValue for Option<T> {
    fn to_attribute_value(&self) -> Option<AttributeValue> {
        self.as_ref().and_then(ToAttributeValue::to_attribute_value)
    }
}
