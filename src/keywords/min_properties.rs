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
    context.schema_mut(index).min_properties = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    match schema.min_properties {
        Some(bound) if (object.len() as u64) < bound => Err(ValidationError::MinProperties),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"a": 1, "b": 2}))]
    #[test_case(json!({"a": 1, "b": 2, "c": 3}))]
    #[test_case(json!([]); "non-objects pass")]
    fn accepts(instance: Value) {
        expect_valid(json!({"minProperties": 2}), instance);
    }

    #[test_case(json!({}))]
    #[test_case(json!({"a": 1}))]
    fn rejects(instance: Value) {
        expect_error(
            json!({"minProperties": 2}),
            instance,
            ValidationError::MinProperties,
        );
    }
}
