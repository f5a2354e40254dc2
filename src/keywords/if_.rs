use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::validator::validate_schema;
use serde_json::Value;

pub(crate) fn compile_if(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let child = compile_schema(value, context)?;
    context.schema_mut(index).if_schema = Some(child);
    Ok(())
}

pub(crate) fn compile_then(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let child = compile_schema(value, context)?;
    context.schema_mut(index).then_schema = Some(child);
    Ok(())
}

pub(crate) fn compile_else(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let child = compile_schema(value, context)?;
    context.schema_mut(index).else_schema = Some(child);
    Ok(())
}

/// Dispatched for the `if` keyword only; `then` and `else` compile their
/// subschemas but are inert without an `if` beside them.
pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Some(condition) = schema.if_schema else {
        return Ok(());
    };
    if validate_schema(context, condition, instance).is_ok() {
        if let Some(consequent) = schema.then_schema {
            validate_schema(context, consequent, instance)
                .map_err(|_| ValidationError::IfThen)?;
        }
    } else if let Some(alternative) = schema.else_schema {
        validate_schema(context, alternative, instance).map_err(|_| ValidationError::IfElse)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn conditional() -> Value {
        json!({
            "if": {"type": "integer"},
            "then": {"minimum": 0},
            "else": {"type": "string"}
        })
    }

    #[test_case(json!(5); "condition holds and then holds")]
    #[test_case(json!("hi"); "condition fails and else holds")]
    fn accepts(instance: Value) {
        expect_valid(conditional(), instance);
    }

    #[test]
    fn then_branch_failure() {
        expect_error(conditional(), json!(-1), ValidationError::IfThen);
    }

    #[test]
    fn else_branch_failure() {
        expect_error(conditional(), json!(true), ValidationError::IfElse);
    }

    #[test]
    fn if_without_branches_never_fails() {
        expect_valid(json!({"if": {"type": "integer"}}), json!(1));
        expect_valid(json!({"if": {"type": "integer"}}), json!("x"));
    }

    #[test]
    fn then_without_if_is_inert() {
        expect_valid(json!({"then": {"minimum": 100}}), json!(1));
        expect_valid(json!({"else": {"type": "string"}}), json!(1));
    }

    #[test]
    fn missing_else_accepts_condition_failures() {
        expect_valid(
            json!({"if": {"type": "integer"}, "then": {"minimum": 0}}),
            json!("anything"),
        );
    }
}
