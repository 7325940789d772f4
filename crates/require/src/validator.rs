//! Descriptor list evaluation
//!
//! [`validate`] is the one-shot entry point. [`Validator`] holds a checked
//! descriptor list and options for repeated use.

use crate::config::{ValidatorConfig, ValidatorOptions};
use crate::descriptor::Descriptor;
use crate::foundation::{DescriptorError, ErrorPayload, Validate, Value};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of validating one object.
///
/// Valid iff no errors were recorded. Errors keep descriptor order.
/// Serializes as `{"valid": bool, "errors": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult<E = serde_json::Value> {
    errors: Vec<ErrorPayload<E>>,
}

impl<E> ValidationResult<E> {
    /// A passing result with no errors.
    #[must_use]
    pub const fn success() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a failure.
    pub fn push(&mut self, error: ErrorPayload<E>) {
        self.errors.push(error);
    }

    /// Whether every descriptor held.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reported errors in descriptor order.
    #[must_use]
    pub const fn errors(&self) -> &[ErrorPayload<E>] {
        self.errors.as_slice()
    }

    /// Takes the reported errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorPayload<E>> {
        self.errors
    }

    /// Converts into a `Result`, with the errors as the `Err` value.
    pub fn into_result(self) -> Result<(), Vec<ErrorPayload<E>>> {
        if self.is_valid() { Ok(()) } else { Err(self.errors) }
    }
}

impl<E: Serialize> Serialize for ValidationResult<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

impl<E> Default for ValidationResult<E> {
    fn default() -> Self {
        Self::success()
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Checks every descriptor in a list, failing on the first malformed one.
pub fn check_descriptors<E>(descriptors: &[Descriptor<E>]) -> Result<(), DescriptorError> {
    descriptors
        .iter()
        .enumerate()
        .try_for_each(|(index, descriptor)| descriptor.check(index))
}

/// Validates `object` against `descriptors`.
///
/// With `lazy` set, evaluation stops at the first failing descriptor and the
/// result holds at most one error.
///
/// Descriptors are checked up front, so a malformed list is reported before
/// anything is evaluated.
///
/// # Examples
///
/// ```
/// use nebula_require::{validate, Descriptor, Value};
/// use serde_json::json;
///
/// let object = Value::from(json!({"name": "John"}));
/// let rules: Vec<Descriptor> = vec![
///     Descriptor::new("name"),
///     Descriptor::any_of(["email", "phone"]),
/// ];
///
/// let result = validate(&object, &rules, false).unwrap();
/// assert!(!result.is_valid());
/// assert_eq!(
///     result.errors()[0].message(),
///     Some("Object must contain a valid value for email or phone")
/// );
/// ```
pub fn validate<E: Clone>(
    object: &Value,
    descriptors: &[Descriptor<E>],
    lazy: bool,
) -> Result<ValidationResult<E>, DescriptorError> {
    check_descriptors(descriptors)?;
    Ok(run(object, descriptors, ValidatorOptions { lazy }))
}

fn run<E: Clone>(
    object: &Value,
    descriptors: &[Descriptor<E>],
    options: ValidatorOptions,
) -> ValidationResult<E> {
    let mut result = ValidationResult::success();

    for (index, descriptor) in descriptors.iter().enumerate() {
        match descriptor.validate(object) {
            Ok(()) => {
                trace!(index, required = %descriptor.required(), "descriptor satisfied");
            }
            Err(error) => {
                debug!(
                    index,
                    required = %descriptor.required(),
                    custom = error.is_custom(),
                    "descriptor failed"
                );
                result.push(error);
                if options.lazy {
                    debug!(
                        index,
                        skipped = descriptors.len() - index - 1,
                        "lazy validation stopped at first failure"
                    );
                    break;
                }
            }
        }
    }

    result
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A checked descriptor list with run options.
///
/// Descriptors are only ever read, so one validator can serve many threads.
///
/// # Examples
///
/// ```
/// use nebula_require::{Descriptor, Validator, Value};
///
/// let validator: Validator = Validator::new(vec![
///     Descriptor::new("a"),
///     Descriptor::new("b"),
/// ])
/// .unwrap()
/// .lazy(true);
///
/// let result = validator.check(&Value::object());
/// assert_eq!(result.errors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Validator<E = serde_json::Value> {
    descriptors: Vec<Descriptor<E>>,
    options: ValidatorOptions,
}

impl<E> Validator<E> {
    /// Creates a validator with default options.
    pub fn new(descriptors: Vec<Descriptor<E>>) -> Result<Self, DescriptorError> {
        check_descriptors(&descriptors)?;
        Ok(Self {
            descriptors,
            options: ValidatorOptions::default(),
        })
    }

    /// Creates a validator from a deserialized configuration.
    pub fn from_config(config: ValidatorConfig<E>) -> Result<Self, DescriptorError> {
        Ok(Self::new(config.descriptors)?.with_options(config.options))
    }

    /// Replaces the run options.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets lazy (stop at first failure) mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.options.lazy = lazy;
        self
    }

    /// Current run options.
    pub const fn options(&self) -> ValidatorOptions {
        self.options
    }

}

impl<E: Clone> Validator<E> {
    /// Validates `object`, returning the full result.
    pub fn check(&self, object: &Value) -> ValidationResult<E> {
        run(object, &self.descriptors, self.options)
    }
}

impl<E: Clone> Validate for Validator<E> {
    type Input = Value;
    type Error = Vec<ErrorPayload<E>>;

    fn validate(&self, input: &Value) -> Result<(), Self::Error> {
        self.check(input).into_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================
