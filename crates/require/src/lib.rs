//! # nebula-require
//!
//! Declarative property-requirement validation for Nebula objects.
//!
//! A [`Descriptor`] names the path (or alternative paths) that must resolve
//! to a usable value in an object, optionally with values that still count
//! as invalid and a custom error payload. [`validate`] runs a list of
//! descriptors against one object and reports every failure as data.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_require::prelude::*;
//! use serde_json::json;
//!
//! let person = Value::from(json!({
//!     "name": "John",
//!     "spouse": {"name": ""}
//! }));
//!
//! let rules: Vec<Descriptor> = vec![
//!     Descriptor::new("name"),
//!     Descriptor::new("spouse.name")
//!         .invalid_values([""])
//!         .with_error(json!({"message": "spouse must have a name"})),
//!     Descriptor::any_of(["email", "phone"]),
//! ];
//!
//! let result = validate(&person, &rules, false)?;
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0].message(), Some("spouse must have a name"));
//! assert_eq!(
//!     result.errors()[1].message(),
//!     Some("Object must contain a valid value for email or phone")
//! );
//! # Ok::<(), DescriptorError>(())
//! ```
//!
//! ## Rules
//!
//! - Paths are dot-delimited object keys; `Null` and absent are both missing.
//! - A descriptor holds when any one of its paths resolves to a value that is
//!   not in its invalid set. NaN in the invalid set matches NaN.
//! - Lazy mode stops at the first failing descriptor.
//! - Descriptors are never modified by validation.

pub mod config;
pub mod descriptor;
pub mod foundation;
pub mod json;
pub mod prelude;
pub mod validator;

pub use config::{ValidatorConfig, ValidatorOptions};
pub use descriptor::{Descriptor, Required};
pub use foundation::{DescriptorError, ErrorPayload, Validate, Value};
pub use validator::{ValidationResult, Validator, check_descriptors, validate};
