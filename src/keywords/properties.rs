use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::primitive_type::{InstanceType, TypeSet};
use crate::schemas::{Schema, SchemaKeyword};
use crate::validator::validate_schema;
use serde_json::Value;

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
    let record = context.schema_mut(index);
    record.properties = children;
    // Default the declared type to object; inert unless the `type` bit was
    // set by an explicit `type` keyword, which compiles earlier.
    if !record.flags.contains(SchemaKeyword::Type) {
        let mut types = TypeSet::empty();
        types.insert(InstanceType::Object);
        record.types = types;
    }
    Ok(())
}

/// Each named child constrains the instance value under its own key, when
/// present; a child's failure surfaces unchanged. Properties are not
/// implicitly required.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    for child in &schema.properties {
        let name = &context.schema(*child).name;
        if let Some(value) = object.get(name) {
            validate_schema(context, *child, value)?;
        }
    }
    Ok(())
}
