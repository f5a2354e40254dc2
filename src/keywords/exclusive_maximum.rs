use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords::helpers;
use crate::schemas::Schema;
use serde_json::Value;
use std::cmp::Ordering;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Number(limit) = value else {
        return Err(ValidationError::InvalidNumberType);
    };
    context.schema_mut(index).exclusive_maximum = Some(limit.clone());
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
    match &schema.exclusive_maximum {
        Some(limit) if helpers::compare_numbers(number, limit) != Some(Ordering::Less) => {
            Err(ValidationError::ExclusiveMaximum)
        }
        _ => Ok(()),
    }
}
