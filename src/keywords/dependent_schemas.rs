use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::validator::validate_schema;
use serde_json::Value;

/// Each entry's subschema is named after its trigger key so validation can
/// tell which dependency an instance property switches on.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::InvalidObjectType);
    };
    let mut children = Vec::with_capacity(entries.len());
    for (key, subschema) in entries {
        let child = compile_schema(subschema, context)?;
        context.schema_mut(child).name = key.clone();
        children.push(child);
    }
    context.schema_mut(index).dependent_schemas = children;
    Ok(())
}

/// When the trigger key is present, the whole instance must satisfy the
/// dependent subschema.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    for child in &schema.dependent_schemas {
        if object.contains_key(&context.schema(*child).name) {
            validate_schema(context, *child, instance)
                .map_err(|_| ValidationError::DependentSchemas)?;
        }
    }
    Ok(())
}
