use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use serde_json::Value;

pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Array(entries) = value else {
        return Err(ValidationError::InvalidArrayType);
    };
    let mut required = Vec::with_capacity(entries.len());
    for entry in entries {
        let Value::String(key) = entry else {
            return Err(ValidationError::InvalidStringType);
        };
        required.push(key.clone());
    }
    context.schema_mut(index).required = required;
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
    if schema.required.iter().all(|key| object.contains_key(key)) {
        Ok(())
    } else {
        Err(ValidationError::Required)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_compile_error, expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({"a": 1, "b": 2}))]
    #[test_case(json!({"a": null, "b": null, "c": 3}); "extra keys are fine")]
    #[test_case(json!("not an object"); "non-objects pass")]
    #[test_case(json!([1, 2]))]
    fn accepts(instance: Value) {
        expect_valid(json!({"required": ["a", "b"]}), instance);
    }

    #[test_case(json!({}))]
    #[test_case(json!({"a": 1}))]
    #[test_case(json!({"b": 2, "c": 3}))]
    fn rejects(instance: Value) {
        expect_error(
            json!({"required": ["a", "b"]}),
            instance,
            ValidationError::Required,
        );
    }

    #[test]
    fn entries_must_be_strings() {
        expect_compile_error(
            json!({"required": "a"}),
            ValidationError::InvalidArrayType,
        );
        expect_compile_error(
            json!({"required": ["a", 2]}),
            ValidationError::InvalidStringType,
        );
    }
}
