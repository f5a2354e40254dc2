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
    context.schema_mut(index).const_value = Some(value.clone());
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    match &schema.const_value {
        Some(expected) if helpers::json_equal(instance, expected) => Ok(()),
        _ => Err(ValidationError::Constant),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!(null), json!(null))]
    #[test_case(json!("fixed"), json!("fixed"))]
    #[test_case(json!(3), json!(3.0))]
    #[test_case(json!({"a": [1]}), json!({"a": [1.0]}))]
    fn equal_instance_is_accepted(constant: Value, instance: Value) {
        expect_valid(json!({ "const": constant }), instance);
    }

    #[test_case(json!(null), json!(0))]
    #[test_case(json!("fixed"), json!("Fixed"))]
    #[test_case(json!(3), json!(3.5))]
    #[test_case(json!({"a": [1]}), json!({"a": [1, 1]}))]
    fn different_instance_is_rejected(constant: Value, instance: Value) {
        expect_error(
            json!({ "const": constant }),
            instance,
            ValidationError::Constant,
        );
    }
}
