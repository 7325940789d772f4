//! Validator configuration
//!
//! Options are plain serde structs so they can be embedded in any
//! configuration file the host application already loads.

use crate::descriptor::Descriptor;
use serde::{Deserialize, Serialize};

/// Options controlling a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Stop at the first failing descriptor.
    pub lazy: bool,
}

impl ValidatorOptions {
    /// Options that collect every failure.
    pub const EAGER: Self = Self { lazy: false };

    /// Options that stop at the first failure.
    pub const LAZY: Self = Self { lazy: true };
}

/// A complete validator definition: options plus the descriptor list.
///
/// ```json
/// {
///   "options": { "lazy": true },
///   "descriptors": [ { "required": "name" } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig<E = serde_json::Value> {
    /// Run options; defaults apply when omitted.
    #[serde(default)]
    pub options: ValidatorOptions,
    /// Descriptors in evaluation order.
    pub descriptors: Vec<Descriptor<E>>,
}
