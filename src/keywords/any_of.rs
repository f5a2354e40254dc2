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
    context.schema_mut(index).any_of = children;
    Ok(())
}

pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    if schema
        .any_of
        .iter()
        .any(|child| validate_schema(context, *child, instance).is_ok())
    {
        Ok(())
    } else {
        Err(ValidationError::AnyOf)
    }
}
