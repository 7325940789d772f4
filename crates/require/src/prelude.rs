//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_require::prelude::*;
//!
//! let rule: Descriptor = Descriptor::new("name");
//! assert!(rule.is_valid(&Value::object().with("name", "Ada")));
//! ```

pub use crate::config::{ValidatorConfig, ValidatorOptions};
pub use crate::descriptor::{Descriptor, Required};
pub use crate::foundation::{DescriptorError, ErrorPayload, Validate, Value};
pub use crate::validator::{ValidationResult, Validator, validate};
