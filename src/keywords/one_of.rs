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
    let Value::Array(entries) = value else {
        return Err(ValidationError::InvalidArrayType);
    };
    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        children.push(compile_schema(entry, context)?);
    }
    context.schema_mut(index).one_of = children;
    Ok(())
}

/// Exactly one branch must accept; zero or several are both failures.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let matched = schema
        .one_of
        .iter()
        .filter(|child| validate_schema(context, **child, instance).is_ok())
        .count();
    if matched == 1 {
        Ok(())
    } else {
        Err(ValidationError::OneOf)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn exactly_one() -> Value {
        json!({"oneOf": [{"type": "integer"}, {"minimum": 10}]})
    }

    #[test_case(json!(3); "only the first branch")]
    #[test_case(json!(10.5); "only the second branch")]
    fn accepts(instance: Value) {
        expect_valid(exactly_one(), instance);
    }

    #[test_case(json!(12); "both branches match")]
    #[test_case(json!(2.5); "no branch matches")]
    fn rejects(instance: Value) {
        expect_error(exactly_one(), instance, ValidationError::OneOf);
    }
}
