use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::validator::validate_schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Array(entries) = value else {
        return Err(ValidationError::InvalidArrayType);
    };
    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        children.push(compile_schema(entry, context)?);
    }
    context.schema_mut(index).prefix_items = children;
    Ok(())
}

/// Element `i` of the instance is checked against positional schema `i`; a
/// shorter instance simply checks fewer positions. Elements past the prefix
/// belong to `items`.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    for (child, item) in schema.prefix_items.iter().zip(items.iter()) {
        validate_schema(context, *child, item).map_err(|_| ValidationError::PrefixItems)?;
    }
    Ok(())
}
