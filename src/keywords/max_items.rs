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
    context.schema_mut(index).max_items = Some(helpers::non_negative_integer(value)?);
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    match schema.max_items {
        Some(bound) if (items.len() as u64) > bound => Err(ValidationError::MaxItems),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!([]))]
    #[test_case(json!([1, 2]); "exact bound passes")]
    #[test_case(json!({"a": 1, "b": 2, "c": 3}); "non-arrays pass")]
    fn accepts(instance: Value) {
        expect_valid(json!({"maxItems": 2}), instance);
    }

    #[test]
    fn rejects_overlong_arrays() {
        expect_error(
            json!({"maxItems": 2}),
            json!([1, 2, 3]),
            ValidationError::MaxItems,
        );
    }
}
