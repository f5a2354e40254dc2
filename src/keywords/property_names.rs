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
    context.schema_mut(index).property_names = Some(child);
    Ok(())
}

/// Every key of the instance, taken as a JSON string, must satisfy the
/// subschema.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    let Some(child) = schema.property_names else {
        return Ok(());
    };
    for key in object.keys() {
        let name = Value::String(key.clone());
        validate_schema(context, child, &name).map_err(|_| ValidationError::PropertyNames)?;
    }
    Ok(())
}
