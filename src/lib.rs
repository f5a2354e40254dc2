//! # schemapool
//!
//! A crate for validating JSON instances against JSON Schema draft 2020-12
//! documents. Schemas are compiled once into a pool of flat records indexed
//! by integer handles; validation then walks only the keywords a record
//! actually carries and stops at the first failing constraint.
//!
//! ## Example:
//!
//! ```rust
//! use schemapool::{Context, ValidationError};
//! use serde_json::json;
//!
//! fn main() -> Result<(), ValidationError> {
//!     let schema = json!({"type": "object", "required": ["name"]});
//!     let mut context = Context::new();
//!     let root = context.compile_value(&schema)?;
//!     context.resolve_refs(root)?;
//!     assert!(context.validate_value(&json!({"name": "widget"}), root).is_ok());
//!     assert_eq!(
//!         context.validate_value(&json!({}), root),
//!         Err(ValidationError::Required)
//!     );
//!     Ok(())
//! }
//! ```
//!
//! `$ref` is supported for relative fragment pointers into `#/$defs/...`;
//! references are fused into the referring record by [`Context::resolve_refs`],
//! so validation never chases indirections.
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
mod compilation;
mod context;
mod error;
mod keywords;
mod primitive_type;
mod resolver;
mod schemas;
mod validator;

pub use context::{Context, SchemaIndex};
pub use error::ValidationError;
pub use primitive_type::InstanceType;
use serde_json::Value;

/// A shortcut for validating `instance` against `schema` in one call.
///
/// ```rust
/// use schemapool::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let mut context = Context::new();
    let root = context.compile_value(schema).expect("Invalid schema");
    context.resolve_refs(root).expect("Invalid schema");
    context.validate_value(instance, root).is_ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }
}
