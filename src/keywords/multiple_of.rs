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
    let Value::Number(divisor) = value else {
        return Err(ValidationError::InvalidNumberType);
    };
    context.schema_mut(index).multiple_of = Some(divisor.clone());
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Number(number) = instance else {
        return Ok(());
    };
    match &schema.multiple_of {
        Some(divisor) if !helpers::is_multiple_of(number, divisor) => {
            Err(ValidationError::MultipleOf)
        }
        _ => Ok(()),
    }
}
