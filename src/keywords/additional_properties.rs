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
    context.schema_mut(index).additional_properties = Some(child);
    Ok(())
}

/// Applies only to keys claimed by neither a `properties` child nor any
/// `patternProperties` regex of the same record.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    let Some(child) = schema.additional_properties else {
        return Ok(());
    };
    for (key, value) in object {
        let named = schema
            .properties
            .iter()
            .any(|property| context.schema(*property).name == *key);
        if named || schema.pattern_regex.iter().any(|pattern| pattern.is_match(key)) {
            continue;
        }
        validate_schema(context, child, value)
            .map_err(|_| ValidationError::AdditionalProperties)?;
    }
    Ok(())
}
