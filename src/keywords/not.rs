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
    let child = compile_schema(value, context)?;
    context.schema_mut(index).not_schema = Some(child);
    Ok(())
}

pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    match schema.not_schema {
        Some(child) if validate_schema(context, child, instance).is_ok() => {
            Err(ValidationError::Not)
        }
        _ => Ok(()),
    }
}
