//! Core building blocks
//!
//! - **Value model**: [`Value`], the tree that paths are resolved against
//! - **Paths**: [`path::resolve`], dot-delimited object-key lookup
//! - **Errors**: [`ErrorPayload`] (reported data) and [`DescriptorError`]
//!   (malformed descriptor lists)
//! - **Traits**: [`Validate`]

pub mod error;
pub mod path;
pub mod traits;
pub mod value;

pub use error::{DescriptorError, ErrorPayload, MESSAGE_PREFIX, join_alternatives};
pub use traits::Validate;
pub use value::{Map, Value};
