//! The validation loop. A record's keyword set drives dispatch: only bits
//! that were set during compilation are visited, in table order, and the
//! first failing handler's error is returned unchanged.
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::keywords;
use serde_json::Value;

pub(crate) fn validate_schema(
    context: &Context,
    index: SchemaIndex,
    instance: &Value,
) -> Result<(), ValidationError> {
    let schema = context.schema(index);
    if let Some(literal) = schema.bool_schema {
        return if literal {
            Ok(())
        } else {
            Err(ValidationError::FalseSchema)
        };
    }
    if schema.empty_container {
        return Ok(());
    }
    for keyword in schema.flags.iter() {
        if let Some(validate) = keywords::KEYWORDS[keyword as usize].validate {
            validate(context, schema, instance)?;
        }
    }
    Ok(())
}
