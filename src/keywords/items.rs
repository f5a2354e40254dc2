use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::validator::validate_schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let child = compile_schema(value, context)?;
    context.schema_mut(index).items = Some(child);
    Ok(())
}

/// Applies to every element past the `prefixItems` window (the whole array
/// when no prefix is declared).
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    let Some(child) = schema.items else {
        return Ok(());
    };
    for item in items.iter().skip(schema.prefix_items.len()) {
        validate_schema(context, child, item).map_err(|_| ValidationError::Items)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!([]))]
    #[test_case(json!([1, 2, 3]))]
    #[test_case(json!("not an array"); "non-arrays pass")]
    fn accepts(instance: Value) {
        expect_valid(json!({"items": {"type": "integer"}}), instance);
    }

    #[test_case(json!(["a"]))]
    #[test_case(json!([1, 2, "c"]))]
    fn rejects(instance: Value) {
        expect_error(
            json!({"items": {"type": "integer"}}),
            instance,
            ValidationError::Items,
        );
    }

    #[test]
    fn prefix_positions_are_exempt() {
        let schema = json!({
            "prefixItems": [{"type": "string"}],
            "items": {"type": "integer"}
        });
        expect_valid(schema.clone(), json!(["head", 1, 2]));
        expect_error(
            schema.clone(),
            json!(["head", 1, "tail"]),
            ValidationError::Items,
        );
        // The first element is judged by the prefix, not by `items`.
        expect_error(schema, json!([1, 2]), ValidationError::PrefixItems);
    }
}
