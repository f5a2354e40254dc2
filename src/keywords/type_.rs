use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::primitive_type::{InstanceType, TypeSet};
use crate::schemas::Schema;
use serde_json::Value;
use std::convert::TryFrom;

/// `type` accepts a single type name or an array of names; either form
/// compiles into a bitmask of permitted instance types.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let mut types = TypeSet::empty();
    match value {
        Value::String(name) => {
            let ty = InstanceType::try_from(name.as_str())
                .map_err(|()| ValidationError::InvalidInstanceType)?;
            types.insert(ty);
        }
        Value::Array(names) => {
            for name in names {
                let Value::String(name) = name else {
                    return Err(ValidationError::InvalidInstanceType);
                };
                let ty = InstanceType::try_from(name.as_str())
                    .map_err(|()| ValidationError::InvalidInstanceType)?;
                types.insert(ty);
            }
        }
        _ => return Err(ValidationError::ExpectedArrayOrString),
    }
    context.schema_mut(index).types = types;
    Ok(())
}

pub(crate) fn validate(
    _: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    if schema.types.matches(instance) {
        Ok(())
    } else {
        Err(ValidationError::Type)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_compile_error, expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!("null"), json!(null))]
    #[test_case(json!("boolean"), json!(false))]
    #[test_case(json!("object"), json!({}))]
    #[test_case(json!("array"), json!([]))]
    #[test_case(json!("number"), json!(1.5))]
    #[test_case(json!("number"), json!(7); "integers satisfy number")]
    #[test_case(json!("integer"), json!(7))]
    #[test_case(json!("integer"), json!(7.0); "zero fraction floats satisfy integer")]
    #[test_case(json!("string"), json!("x"))]
    #[test_case(json!(["integer", "string"]), json!("x"))]
    #[test_case(json!(["integer", "string"]), json!(3))]
    fn accepts(declared: Value, instance: Value) {
        expect_valid(json!({ "type": declared }), instance);
    }

    #[test_case(json!("null"), json!(0))]
    #[test_case(json!("boolean"), json!("true"))]
    #[test_case(json!("object"), json!([]))]
    #[test_case(json!("array"), json!({}))]
    #[test_case(json!("number"), json!("1"))]
    #[test_case(json!("integer"), json!(7.5))]
    #[test_case(json!("string"), json!(null))]
    #[test_case(json!(["integer", "string"]), json!(true))]
    fn rejects(declared: Value, instance: Value) {
        expect_error(json!({ "type": declared }), instance, ValidationError::Type);
    }

    #[test]
    fn unknown_type_names_fail_compilation() {
        expect_compile_error(
            json!({"type": "float"}),
            ValidationError::InvalidInstanceType,
        );
        expect_compile_error(
            json!({"type": ["string", 3]}),
            ValidationError::InvalidInstanceType,
        );
    }

    #[test]
    fn non_string_non_array_fails_compilation() {
        expect_compile_error(json!({"type": 12}), ValidationError::ExpectedArrayOrString);
    }
}
