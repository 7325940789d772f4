//! Dot-delimited path resolution
//!
//! Paths are plain object-key chains: `spouse.name` looks up `spouse` on the
//! root and then `name` on the result. There is no index or bracket syntax.

use crate::foundation::value::Value;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Splits a path into its segment names, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

/// Resolves `path` against `object`.
///
/// Returns `None` as soon as a segment is absent or `Null`, or when a
/// segment would have to index into something that is not an object.
///
/// # Examples
///
/// ```
/// use nebula_require::foundation::{path, Value};
/// use serde_json::json;
///
/// let object = Value::from(json!({"spouse": {"name": "Jane", "age": null}}));
/// assert_eq!(path::resolve(&object, "spouse.name"), Some(&Value::from("Jane")));
/// assert_eq!(path::resolve(&object, "spouse.age"), None);
/// assert_eq!(path::resolve(&object, "spouse.name.first"), None);
/// ```
pub fn resolve<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = object;

    for segment in segments(path) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }

    Some(current)
}

impl Value {
    /// Resolves a dot-delimited path against this value.
    ///
    /// See [`resolve`] for the lookup rules.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        resolve(self, path)
    }
}
