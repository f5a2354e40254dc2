use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords::helpers;
use crate::schemas::Schema;
use serde_json::Value;

/// A non-boolean value is ignored rather than rejected; `false` compiles to
/// a no-op.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    if let Value::Bool(enabled) = value {
        context.schema_mut(index).unique_items = *enabled;
    }
    Ok(())
}

/// Uniqueness uses deep equality, so `1` and `1.0` count as duplicates.
pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    if !schema.unique_items {
        return Ok(());
    }
    let Value::Array(items) = instance else {
        return Ok(());
    };
    for (position, item) in items.iter().enumerate() {
        if items[position + 1..]
            .iter()
            .any(|other| helpers::json_equal(item, other))
        {
            return Err(ValidationError::UniqueItems);
        }
    }
    Ok(())
}
