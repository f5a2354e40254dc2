use crate::compilation::compile_schema;
use crate::context::{Context, SchemaIndex};
use crate::error::ValidationError;
use crate::schemas::Schema;
use crate::validator::validate_schema;
use regex::Regex;
use serde_json::Value;

/// Each entry compiles its key as a regex and its value as a subschema; the
/// two sequences stay parallel, entry for entry.
pub(crate) fn compile(
    value: &Value,
    index: SchemaIndex,
    context: &mut Context,
) -> Result<(), ValidationError> {
    let Value::Object(entries) = value else {
        return Err(ValidationError::InvalidObjectType);
    };
    let mut patterns = Vec::with_capacity(entries.len());
    let mut children = Vec::with_capacity(entries.len());
    for (source, subschema) in entries {
        patterns.push(Regex::new(source)?);
        children.push(compile_schema(subschema, context)?);
    }
    let record = context.schema_mut(index);
    record.pattern_regex = patterns;
    record.pattern_properties = children;
    Ok(())
}

pub(crate) fn validate(
    context: &Context,
    schema: &Schema,
    instance: &Value,
) -> Result<(), ValidationError> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    for (pattern, child) in schema.pattern_regex.iter().zip(&schema.pattern_properties) {
        for (key, value) in object {
            if pattern.is_match(key) {
                validate_schema(context, *child, value)
                    .map_err(|_| ValidationError::PatternProperties)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util::{expect_compile_error, expect_error, expect_valid};
    use crate::ValidationError;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn counters() -> Value {
        json!({"patternProperties": {
            "^x_": {"type": "integer"},
            "_id$": {"type": "string"}
        }})
    }

    #[test_case(json!({}))]
    #[test_case(json!({"x_count": 3}))]
    #[test_case(json!({"user_id": "u1"}))]
    #[test_case(json!({"free": null}); "unmatched keys are free")]
    #[test_case(json!(["x_count"]); "non-objects pass")]
    fn accepts(instance: Value) {
        expect_valid(counters(), instance);
    }

    #[test_case(json!({"x_count": "three"}))]
    #[test_case(json!({"user_id": 9}))]
    fn rejects(instance: Value) {
        expect_error(counters(), instance, ValidationError::PatternProperties);
    }

    #[test]
    fn a_key_may_match_several_patterns() {
        // "x_user_id" matches both regexes and must satisfy both subschemas,
        // which is impossible here.
        expect_error(
            counters(),
            json!({"x_user_id": 3}),
            ValidationError::PatternProperties,
        );
    }

    #[test]
    fn regex_and_subschema_sequences_stay_parallel() {
        let mut context = crate::Context::new();
        let index = context
            .compile_value(&json!({"patternProperties": {
                "^a": {"type": "string"},
                "^b": true,
                "^c": {"minimum": 1}
            }}))
            .unwrap();
        let record = context.schema(index);
        assert_eq!(record.pattern_regex.len(), 3);
        assert_eq!(record.pattern_regex.len(), record.pattern_properties.len());
    }

    #[test]
    fn invalid_entry_regex_fails_compilation() {
        expect_compile_error(
            json!({"patternProperties": {"(": {}}}),
            ValidationError::RegexCreationFailed,
        );
        expect_compile_error(
            json!({"patternProperties": []}),
            ValidationError::InvalidObjectType,
        );
    }
}
