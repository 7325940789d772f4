//! Core traits for the validation system

/// The trait implemented by everything that checks a value.
///
/// Both a single [`Descriptor`](crate::Descriptor) and a whole
/// [`Validator`](crate::Validator) implement it, so callers can hold either
/// behind the same bound.
///
/// # Examples
///
/// ```
/// use nebula_require::foundation::{Validate, Value};
/// use nebula_require::Descriptor;
///
/// let rule: Descriptor = Descriptor::new("name");
/// let object = Value::object().with("name", "John");
/// assert!(rule.validate(&object).is_ok());
/// assert!(rule.validate(&Value::object()).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// What a failed validation reports.
    type Error;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(Self::Error)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error>;

    /// Returns true when [`validate`](Validate::validate) would succeed.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;
    type Error = V::Error;

    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error> {
        (**self).validate(input)
    }
}
