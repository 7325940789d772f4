//! Loading descriptors and objects from JSON text.
//!
//! Descriptor lists are data, so they are usually kept next to the rest of a
//! workflow's configuration. Every loader here checks the descriptors before
//! returning them.
//!
//! # Examples
//!
//! ```
//! use nebula_require::json::{descriptors_from_str, object_from_str};
//! use nebula_require::{validate, Descriptor};
//!
//! let rules: Vec<Descriptor> = descriptors_from_str(
//!     r#"[{"required": "name"}, {"required": ["email", "phone"]}]"#,
//! )
//! .unwrap();
//! let object = object_from_str(r#"{"name": "John", "phone": "555-0100"}"#).unwrap();
//!
//! assert!(validate(&object, &rules, false).unwrap().is_valid());
//! ```

use crate::config::ValidatorConfig;
use crate::descriptor::Descriptor;
use crate::foundation::{DescriptorError, Value};
use crate::validator::{Validator, check_descriptors};
use serde::de::DeserializeOwned;

/// Parses and checks a JSON array of descriptors.
pub fn descriptors_from_str<E: DeserializeOwned>(
    text: &str,
) -> Result<Vec<Descriptor<E>>, DescriptorError> {
    let descriptors: Vec<Descriptor<E>> = serde_json::from_str(text)?;
    check_descriptors(&descriptors)?;
    Ok(descriptors)
}

/// Converts and checks an already-parsed JSON array of descriptors.
pub fn descriptors_from_value<E: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<Vec<Descriptor<E>>, DescriptorError> {
    let descriptors: Vec<Descriptor<E>> = serde_json::from_value(value)?;
    check_descriptors(&descriptors)?;
    Ok(descriptors)
}

/// Parses a full validator definition (options and descriptors).
pub fn validator_from_str<E: DeserializeOwned>(text: &str) -> Result<Validator<E>, DescriptorError> {
    let config: ValidatorConfig<E> = serde_json::from_str(text)?;
    Validator::from_config(config)
}

/// Parses a JSON document into a [`Value`].
pub fn object_from_str(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}
