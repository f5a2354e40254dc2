use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use serde_json::Value;

/// `$ref` records the fragment pointer and queues the referring record for
/// the resolution pass; validation itself never sees an unresolved `$ref`
/// because the resolver fuses the target's contents in.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::String(path) = value else {
        return Err(ValidationError::InvalidStringType);
    };
    context.schema_mut(index).reference = path.clone();
    context.record_pending_ref(index, path.clone());
    Ok(())
}
