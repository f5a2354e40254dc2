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
    context.schema_mut(index).min_items = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

/// Fails when the array is strictly shorter than the bound.
pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    match schema.min_items {
        Some(bound) if (items.len() as u64) < bound => Err(ValidationError::MinItems),
        _ => Ok(()),
    }
}
