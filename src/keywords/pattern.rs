use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use regex::Regex;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::String(source) = value else {
        return Err(ValidationError::InvalidStringType);
    };
    let pattern = Regex::new(source)?;
    context.schema_mut(index).pattern = Some(pattern);
    Ok(())
}

/// An unanchored search: the pattern has to match some substring, not the
/// whole string. Non-strings pass.
pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::String(text) = instance else {
        return Ok(());
    };
    match &schema.pattern {
        Some(pattern) if !pattern.is_match(text) => Err(ValidationError::Pattern),
        _ => Ok(()),
    }
}
