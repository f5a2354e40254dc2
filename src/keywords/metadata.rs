//! String-valued identity keywords. They are recorded verbatim and have no
//! effect on validation; a non-string value leaves the field empty rather
//! than failing compilation.
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use serde_json::Value;

fn copy_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        _ => String::new(),
    }
}

pub(crate) fn compile_dialect(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let record = context.schema_mut(index);
    record.dialect = copy_string(value);
    if !record.dialect.is_empty() && !record.dialect.contains("2020-12") {
        tracing::warn!(
            dialect = %record.dialect,
            "schema declares another dialect, validating as 2020-12"
        );
    }
    Ok(())
}

pub(crate) fn compile_id(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).id = copy_string(value);
    Ok(())
}

pub(crate) fn compile_comment(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).comment = copy_string(value);
    Ok(())
}

pub(crate) fn compile_title(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).title = copy_string(value);
    Ok(())
}

pub(crate) fn compile_description(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    context.schema_mut(index).description = copy_string(value);
    Ok(())
}
