//! Object model walked by the path resolver
//!
//! [`Value`] mirrors the JSON data model with one addition: floats keep the
//! IEEE not-a-number sentinel, which `serde_json::Value` cannot represent.
//! Requirement descriptors often list NaN as an invalid value, so the model
//! has to be able to hold it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Insertion-ordered map used for object values.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// A structured value that descriptors are evaluated against.
///
/// # Examples
///
/// ```
/// use nebula_require::foundation::Value;
/// use serde_json::json;
///
/// let person = Value::from(json!({"name": "John", "age": 26}));
/// assert_eq!(person.get_path("name"), Some(&Value::from("John")));
/// assert!(Value::nan().is_nan());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null. Treated the same as an absent key.
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number, NaN included.
    ///
    /// JSON has no spelling for NaN or the infinities, so serializing one
    /// fails instead of degrading to `null`.
    Float(#[serde(serialize_with = "serialize_finite")] f64),
    /// UTF-8 text
    Text(String),
    /// Array of values
    Array(Vec<Value>),
    /// Key-value map
    Object(Map),
}

impl Value {
    /// Creates a NaN float value.
    #[must_use]
    pub const fn nan() -> Self {
        Self::Float(f64::NAN)
    }

    /// Creates an empty object.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Map::new())
    }

    /// Inserts `value` under `key` when `self` is an object.
    ///
    /// Non-object values are returned unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Self::Object(map) = &mut self {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for a float holding NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float(f) if f.is_nan())
    }

    /// Returns the object map, if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Membership equality used for invalid-value sets.
    ///
    /// NaN is the same value as NaN. Integers and floats are equal only when
    /// the float holds exactly that integer. Everything else uses exact
    /// structural equality.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) if a.is_nan() || b.is_nan() => {
                a.is_nan() && b.is_nan()
            }
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                integer_equals_float(*i, *f)
            }
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_value(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.same_value(other)))
            }
            _ => self == other,
        }
    }
}

/// Exact integer/float equality, without rounding the integer to `f64`.
fn integer_equals_float(integer: i64, float: f64) -> bool {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    float.fract() == 0.0 && (-LIMIT..LIMIT).contains(&float) && float as i64 == integer
}

fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format_args!(
            "{value} has no JSON representation"
        )))
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                // u64 beyond i64 and all fractional numbers land here
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================
