#![deny(unsafe_code)]

pub mod descriptions;
pub mod error;
pub mod paths;
pub mod registry;

pub use crate::descriptions::{DEFAULT_DESCRIPTION, field_description};
pub use crate::error::StandardsError;
pub use crate::paths::{SCHEMA_ENV_VAR, schema_override};
pub use crate::registry::{SchemaRegistry, default_registry};
