use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords::helpers;
use crate::schemas::Schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).max_properties = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    match schema.max_properties {
        Some(bound) if (object.len() as u64) > bound => Err(ValidationError::MaxProperties),
        _ => Ok(()),
    }
}
