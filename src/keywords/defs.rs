use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use serde_json::Value;

/// `$defs` holds named reusable subschemas; each entry is compiled into the
/// pool and indexed by name for `$ref` resolution.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::InvalidObjectType);
    };
    for (name, subschema) in entries {
        let child = compile_schema(subschema, context)?;
        context.schema_mut(index).defs.insert(name.clone(), child);
    }
    Ok(())
}
