//! Property requirement descriptors
//!
//! A [`Descriptor`] names one or more candidate paths that must resolve to a
//! usable value. Candidates are alternatives: the descriptor holds when *any*
//! of them resolves to a present, non-null value outside the invalid set.
//!
//! # Examples
//!
//! ```
//! use nebula_require::{Descriptor, Value};
//! use serde_json::json;
//!
//! let object = Value::from(json!({"email": "", "phone": "555-0100"}));
//!
//! let contact: Descriptor = Descriptor::any_of(["email", "phone"]).invalid_values([""]);
//! assert!(contact.evaluate(&object));
//!
//! let email_only: Descriptor = Descriptor::new("email").invalid_values([""]);
//! assert!(!email_only.evaluate(&object));
//! ```

use crate::foundation::{DescriptorError, ErrorPayload, Validate, Value, join_alternatives, path};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// REQUIRED PATHS
// ============================================================================

/// The `required` field: a single path or an ordered list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Required {
    /// A single path.
    One(String),
    /// Alternatives, tried in order.
    Any(Vec<String>),
}

impl Required {
    /// Candidate paths as an ordered slice.
    ///
    /// A single path is viewed as a one-element list; the descriptor itself
    /// is never rewritten.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Any(paths) => paths,
        }
    }
}

impl fmt::Display for Required {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_alternatives(self.paths()))
    }
}

impl From<&str> for Required {
    fn from(path: &str) -> Self {
        Self::One(path.to_owned())
    }
}

impl From<String> for Required {
    fn from(path: String) -> Self {
        Self::One(path)
    }
}

impl From<Vec<String>> for Required {
    fn from(paths: Vec<String>) -> Self {
        Self::Any(paths)
    }
}

impl From<Vec<&str>> for Required {
    fn from(paths: Vec<&str>) -> Self {
        Self::Any(paths.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Required {
    fn from(paths: [&str; N]) -> Self {
        Self::Any(paths.iter().map(|p| (*p).to_owned()).collect())
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// One property requirement.
///
/// `E` is the type of the optional custom error payload. It is opaque to this
/// crate and is reported verbatim when the descriptor fails.
///
/// Deserializes from the JSON shape
/// `{"required": "a.b" | ["a", "b"], "invalidValues": [...], "error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Descriptor<E = serde_json::Value> {
    required: Required,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    invalid_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<E>,
}

impl<E> Descriptor<E> {
    /// Creates a descriptor for a path or list of alternative paths.
    pub fn new(required: impl Into<Required>) -> Self {
        Self {
            required: required.into(),
            invalid_values: None,
            error: None,
        }
    }

    /// Creates a descriptor satisfied by any one of `paths`.
    pub fn any_of<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Required::Any(paths.into_iter().map(Into::into).collect()))
    }

    /// Sets the values that count as invalid even when present.
    #[must_use = "builder methods must be chained or built"]
    pub fn invalid_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.invalid_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a single invalid value.
    #[must_use = "builder methods must be chained or built"]
    pub fn invalid_value(mut self, value: impl Into<Value>) -> Self {
        self.invalid_values
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    /// Sets the payload reported when this descriptor fails.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, error: E) -> Self {
        self.error = Some(error);
        self
    }

    /// Returns the `required` field as given.
    pub const fn required(&self) -> &Required {
        &self.required
    }

    /// Candidate paths in evaluation order.
    pub fn paths(&self) -> &[String] {
        self.required.paths()
    }

    /// Configured invalid values, if any.
    pub fn invalid(&self) -> Option<&[Value]> {
        self.invalid_values.as_deref()
    }

    /// Custom error payload, if any.
    pub const fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Checks that this descriptor can be evaluated.
    ///
    /// `index` is the descriptor's position in its list and is only used to
    /// label the error.
    pub fn check(&self, index: usize) -> Result<(), DescriptorError> {
        let paths = self.paths();
        if paths.is_empty() {
            return Err(DescriptorError::NoPaths { index });
        }
        if let Some(position) = paths.iter().position(String::is_empty) {
            return Err(DescriptorError::EmptyPath { index, position });
        }
        Ok(())
    }

    /// Returns true when `value` is in the invalid set.
    pub fn is_invalid_value(&self, value: &Value) -> bool {
        self.invalid()
            .is_some_and(|invalid| invalid.iter().any(|v| v.same_value(value)))
    }

    /// Resolves one candidate and applies the invalid-value filter.
    pub fn resolve_candidate<'a>(&self, object: &'a Value, path: &str) -> Option<&'a Value> {
        path::resolve(object, path).filter(|value| !self.is_invalid_value(value))
    }

    /// Returns the first candidate path that holds, with its value.
    pub fn satisfied_by<'a, 'o>(&'a self, object: &'o Value) -> Option<(&'a str, &'o Value)> {
        self.paths().iter().find_map(|path| {
            self.resolve_candidate(object, path)
                .map(|value| (path.as_str(), value))
        })
    }

    /// Returns true when at least one candidate holds.
    pub fn evaluate(&self, object: &Value) -> bool {
        self.satisfied_by(object).is_some()
    }
}

impl<E: Clone> Descriptor<E> {
    /// The payload this descriptor reports on failure.
    pub fn failure(&self) -> ErrorPayload<E> {
        match &self.error {
            Some(error) => ErrorPayload::Custom(error.clone()),
            None => ErrorPayload::missing(self.paths()),
        }
    }
}

impl<E: Clone> Validate for Descriptor<E> {
    type Input = Value;
    type Error = ErrorPayload<E>;

    fn validate(&self, input: &Value) -> Result<(), ErrorPayload<E>> {
        if self.evaluate(input) {
            Ok(())
        } else {
            Err(self.failure())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn john() -> Value {
        Value::from(json!({"name": "John", "age": 26, "spouse": {"name": "Jane"}}))
            .with("score", Value::nan())
    }

    #[test]
    fn single_path_is_viewed_as_one_element_list() {
        let d: Descriptor = Descriptor::new("name");
        assert_eq!(d.paths(), &["name".to_owned()]);
        assert_eq!(d.required(), &Required::One("name".to_owned()));
    }

    #[test]
    fn present_value_passes() {
        let d: Descriptor = Descriptor::new("spouse.name");
        assert!(d.evaluate(&john()));
    }

    #[test]
    fn object_value_passes() {
        let d: Descriptor = Descriptor::new("spouse");
        assert!(d.evaluate(&john()));
    }

    #[test]
    fn missing_value_fails() {
        let d: Descriptor = Descriptor::new("spouse.age");
        assert!(!d.evaluate(&john()));
    }

    #[rstest]
    #[case(Value::from(26), false)]
    #[case(Value::from(26.0), false)]
    #[case(Value::from(27), true)]
    #[case(Value::from("26"), true)]
    fn invalid_set_uses_exact_numeric_equality(#[case] invalid: Value, #[case] passes: bool) {
        let d: Descriptor = Descriptor::new("age").invalid_value(invalid);
        assert_eq!(d.evaluate(&john()), passes);
    }

    #[test]
    fn large_integer_is_not_rejected_by_its_rounded_float() {
        let object = Value::from(json!({"n": 9_007_199_254_740_993_i64}));
        let d: Descriptor = Descriptor::new("n").invalid_value(9_007_199_254_740_992.0);
        assert!(d.evaluate(&object));

        let d: Descriptor = Descriptor::new("n").invalid_value(9_007_199_254_740_993_i64);
        assert!(!d.evaluate(&object));
    }

    #[test]
    fn nan_in_invalid_set_matches_nan() {
        let d: Descriptor = Descriptor::new("score").invalid_value(Value::nan());
        assert!(!d.evaluate(&john()));

        let d: Descriptor = Descriptor::new("age").invalid_value(Value::nan());
        assert!(d.evaluate(&john()));
    }

    #[test]
    fn nan_without_invalid_set_is_present() {
        let d: Descriptor = Descriptor::new("score");
        assert!(d.evaluate(&john()));
    }

    #[rstest]
    #[case(&["name", "missing"], true)]
    #[case(&["missing", "name"], true)]
    #[case(&["missing", "spouse.age"], false)]
    fn any_candidate_satisfies(#[case] paths: &[&str], #[case] expected: bool) {
        let d: Descriptor = Descriptor::any_of(paths.iter().copied());
        assert_eq!(d.evaluate(&john()), expected);
    }

    #[test]
    fn stops_at_first_valid_candidate() {
        let d: Descriptor = Descriptor::any_of(["missing", "name", "age"]);
        let object = john();
        let (path, value) = d.satisfied_by(&object).unwrap();
        assert_eq!(path, "name");
        assert_eq!(value, &Value::from("John"));
    }

    #[test]
    fn invalid_candidate_falls_through_to_next() {
        let object = Value::from(json!({"a": "", "b": "ok"}));
        let d: Descriptor = Descriptor::any_of(["a", "b"]).invalid_values([""]);
        assert_eq!(d.satisfied_by(&object).map(|(p, _)| p), Some("b"));
    }

    #[test]
    fn failure_uses_custom_error_verbatim() {
        let d = Descriptor::new("missing").with_error(json!({"code": 7}));
        assert_eq!(d.validate(&john()), Err(ErrorPayload::Custom(json!({"code": 7}))));
    }

    #[test]
    fn failure_generates_message() {
        let d: Descriptor = Descriptor::any_of(["a", "b", "c"]);
        let err = d.validate(&john()).unwrap_err();
        assert_eq!(
            err.message(),
            Some("Object must contain a valid value for a, b, or c")
        );
    }

    #[test]
    fn custom_error_can_be_any_type() {
        #[derive(Debug, Clone, PartialEq)]
        enum Problem {
            NoSpouseAge,
        }

        let d = Descriptor::new("spouse.age").with_error(Problem::NoSpouseAge);
        assert_eq!(
            d.validate(&john()),
            Err(ErrorPayload::Custom(Problem::NoSpouseAge))
        );
    }

    #[test]
    fn check_rejects_empty_list() {
        let d: Descriptor = Descriptor::new(Vec::<String>::new());
        assert!(matches!(d.check(3), Err(DescriptorError::NoPaths { index: 3 })));
    }

    #[test]
    fn check_rejects_empty_path() {
        let d: Descriptor = Descriptor::new(["a", ""]);
        assert!(matches!(
            d.check(0),
            Err(DescriptorError::EmptyPath {
                index: 0,
                position: 1
            })
        ));

        let d: Descriptor = Descriptor::new("");
        assert!(d.check(0).is_err());
    }

    #[test]
    fn required_displays_as_alternatives() {
        assert_eq!(Required::from(["x", "y"]).to_string(), "x or y");
        assert_eq!(Required::from("x").to_string(), "x");
    }

    #[test]
    fn deserializes_single_and_list_forms() {
        let one: Descriptor = serde_json::from_value(json!({"required": "a.b"})).unwrap();
        assert_eq!(one.required(), &Required::One("a.b".to_owned()));

        let many: Descriptor = serde_json::from_value(json!({
            "required": ["a", "b"],
            "invalidValues": ["", 0],
            "error": {"message": "need a or b"}
        }))
        .unwrap();
        assert_eq!(many.paths().len(), 2);
        assert_eq!(many.invalid().map(<[Value]>::len), Some(2));
        assert_eq!(many.error(), Some(&json!({"message": "need a or b"})));
    }

    #[test]
    fn deserialization_requires_required() {
        let result: Result<Descriptor, _> = serde_json::from_value(json!({"invalidValues": []}));
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_unknown_fields() {
        let result: Result<Descriptor, _> =
            serde_json::from_value(json!({"required": "a", "invalidvalues": [""]}));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_json_shape() {
        let d: Descriptor = Descriptor::new("age").invalid_values([0]);
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({"required": "age", "invalidValues": [0]})
        );
    }

    #[test]
    fn nan_invalid_value_does_not_serialize_as_null() {
        let d: Descriptor = Descriptor::new("age").invalid_value(Value::nan());
        assert!(serde_json::to_string(&d).is_err());
    }

    #[test]
    fn finite_invalid_values_survive_a_json_round_trip() {
        let d: Descriptor = Descriptor::new("age").invalid_values([Value::from(0.5), Value::Null]);
        let text = serde_json::to_string(&d).unwrap();
        let reloaded: Descriptor = serde_json::from_str(&text).unwrap();

        let object = Value::object().with("age", 0.5);
        assert!(!d.evaluate(&object));
        assert_eq!(reloaded.evaluate(&object), d.evaluate(&object));
        assert_eq!(reloaded, d);
    }
}
