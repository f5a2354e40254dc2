use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords::helpers;
use crate::schemas::{Schema, SchemaKeyword};
use crate::validator::validate_schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let child = compile_schema(value, context)?;
    context.schema_mut(index).contains = Some(child);
    Ok(())
}

pub(crate) fn compile_min(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).min_contains = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

pub(crate) fn compile_max(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).max_contains = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

/// Counts the elements matching the `contains` subschema and checks the
/// count against the `minContains`/`maxContains` window. The minimum
/// defaults to one; a minimum of zero makes even an empty array valid.
/// `minContains`/`maxContains` without `contains` have no effect.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    let Some(child) = schema.contains else {
        return Ok(());
    };
    let matched = items
        .iter()
        .filter(|item| validate_schema(context, child, item).is_ok())
        .count() as u64;
    let minimum = schema.min_contains.unwrap_or(1);
    if matched < minimum {
        return if schema.flags.contains(SchemaKeyword::MinContains) {
            Err(ValidationError::MinContains)
        } else {
            Err(ValidationError::Contains)
        };
    }
    if let Some(maximum) = schema.max_contains {
        if matched > maximum {
            return Err(ValidationError::MaxContains);
        }
    }
    Ok(())
}
