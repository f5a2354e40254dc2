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
    context.schema_mut(index).max_length = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::String(text) = instance else {
        return Ok(());
    };
    match schema.max_length {
        Some(bound) if (text.chars().count() as u64) > bound => Err(ValidationError::MaxLength),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!(""))]
    #[test_case(json!("abc"))]
    #[test_case(json!("ééé"); "code points not bytes")]
    #[test_case(json!([1, 2, 3, 4]); "non-strings pass")]
    fn accepts(instance: Value) {
        expect_valid(json!({"maxLength": 3}), instance);
    }

    #[test_case(json!("abcd"))]
    #[test_case(json!("éééé"))]
    fn rejects(instance: Value) {
        expect_error(json!({"maxLength": 3}), instance, ValidationError::MaxLength);
    }
}
