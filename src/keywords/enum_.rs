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
    let Value::Array(options) = value else {
        return Err(ValidationError::InvalidEnumType);
    };
    context.schema_mut(index).enum_values = options.clone();
    Ok(())
}

/// The instance must deep-equal some element; every element kind takes part
/// in the comparison, numbers included.
pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    if schema
        .enum_values
        .iter()
        .any(|option| helpers::json_equal(instance, option))
    {
        Ok(())
    } else {
        Err(ValidationError::Enum)
    }
}
